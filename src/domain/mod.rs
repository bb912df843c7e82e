mod cell;
mod engine;
mod grid;
mod patterns;
mod rules;

pub use cell::Cell;
pub use engine::Engine;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, Rule};
