use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use term_life::{
    AnsiRenderer, Cli, Config, PlainRenderer, Renderer, Simulation, application::init_tracing,
};

fn main() -> ExitCode {
    // Help requests and bad arguments both print usage and fail
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };
    init_tracing();

    match run(Config::from(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    let grid = config.initial_grid()?;
    let mut renderer: Box<dyn Renderer> = if config.plain {
        Box::new(PlainRenderer::stdout())
    } else {
        Box::new(AnsiRenderer::stdout())
    };

    let mut simulation = Simulation::new(grid);
    simulation.run(&mut renderer, config.interval())?;
    Ok(())
}
