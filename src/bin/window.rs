//! The same simulation in a macroquad window.
//! Takes the terminal binary's arguments; `--plain` is ignored.

use clap::Parser;
use macroquad::prelude::*;
use term_life::{
    Cli, Config, Phase, Simulation, application::init_tracing, rendering::window,
};
use tracing::info;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 800,
        window_height: 828,
        window_resizable: true,
        ..Default::default()
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(1)
}

#[macroquad::main(window_conf)]
async fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(1)
    });
    init_tracing();

    let config = Config::from(cli);
    let grid = config.initial_grid().unwrap_or_else(|err| fail(err));
    let interval = config.interval().as_secs_f32();
    let mut simulation = Simulation::new(grid);
    let mut update_timer = 0.0;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        update_timer += get_frame_time();
        if simulation.phase() == Phase::Running && update_timer >= interval {
            update_timer = 0.0;
            if simulation.advance() == Phase::Stable {
                info!(generation = simulation.generation(), "stable, window left open");
            }
        }

        clear_background(BLACK);
        window::draw_grid(simulation.current());
        window::draw_status(
            simulation.generation(),
            simulation.current().count_alive(),
            simulation.phase(),
        );

        next_frame().await;
    }
}
