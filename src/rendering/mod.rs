//! Display backends. The simulation only talks to [`Renderer`].

mod terminal;
pub mod window;

pub use terminal::{AnsiRenderer, PlainRenderer};

use crate::domain::Grid;
use crate::error::LifeError;

/// Consumes one generation per tick.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<(), LifeError>;
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<(), LifeError> {
        (**self).render(grid, generation)
    }
}

/// Keeps every frame in memory, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<(u64, Grid)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Grid> {
        self.frames.iter().map(|(_, grid)| grid.clone()).collect()
    }

    pub fn generations(&self) -> Vec<u64> {
        self.frames.iter().map(|(generation, _)| *generation).collect()
    }

    pub fn last(&self) -> Option<&Grid> {
        self.frames.last().map(|(_, grid)| grid)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<(), LifeError> {
        self.frames.push((generation, grid.clone()));
        Ok(())
    }
}
