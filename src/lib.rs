// Domain layer - grid, transition rule, patterns
pub mod domain;

// Application layer - configuration, loading and the driver loop
pub mod application;

// Infrastructure layer - display backends
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::{Cli, Config, Phase, Simulation};
pub use domain::{Cell, ConwayRule, Engine, Grid, Pattern, Rule, presets};
pub use error::LifeError;
pub use rendering::{AnsiRenderer, PlainRenderer, RecordingRenderer, Renderer};
