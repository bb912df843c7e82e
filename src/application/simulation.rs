use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::{ConwayRule, Engine, Grid, Rule};
use crate::error::LifeError;
use crate::rendering::Renderer;

/// Where the simulation is in its lifecycle. `Stable` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stable,
}

/// Simulation orchestrates the run.
/// Owns the current generation and replaces it wholesale on every step.
pub struct Simulation<R = ConwayRule> {
    engine: Engine<R>,
    current: Grid,
    generation: u64,
    phase: Phase,
}

impl Simulation {
    /// Start from `grid` with Conway's rule
    pub fn new(grid: Grid) -> Self {
        Self::with_engine(Engine::new(), grid)
    }
}

impl<R: Rule> Simulation<R> {
    pub fn with_engine(engine: Engine<R>, grid: Grid) -> Self {
        Self {
            engine,
            current: grid,
            generation: 0,
            phase: Phase::Running,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Index of the current generation, 0 for the initial grid
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Compute the next generation.
    /// Moves to `Stable` instead when it equals the current one; once
    /// stable, further calls do nothing.
    pub fn advance(&mut self) -> Phase {
        if self.phase == Phase::Stable {
            return self.phase;
        }

        let next = self.engine.step(&self.current);
        if self.engine.is_stable(&self.current, &next) {
            info!(generation = self.generation, "reached a fixed point");
            self.phase = Phase::Stable;
        } else {
            self.current = next;
            self.generation += 1;
            debug!(
                generation = self.generation,
                alive = self.current.count_alive(),
                "advanced"
            );
        }
        self.phase
    }

    /// Render, step, and sleep until stable.
    /// Returns the generation at which the fixed point was found.
    pub fn run(
        &mut self,
        renderer: &mut impl Renderer,
        interval: Duration,
    ) -> Result<u64, LifeError> {
        info!(
            rows = self.current.height(),
            cols = self.current.width(),
            interval_ms = interval.as_millis() as u64,
            "starting simulation"
        );
        loop {
            renderer.render(&self.current, self.generation)?;
            if self.advance() == Phase::Stable {
                return Ok(self.generation);
            }
            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }
    }
}
