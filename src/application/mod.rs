pub mod config;
pub mod loader;
mod simulation;

pub use config::{Cli, Config, Seed};
pub use simulation::{Phase, Simulation};

use tracing_subscriber::EnvFilter;

/// Send `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`).
/// Stdout is left to the renderer.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
