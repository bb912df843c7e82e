//! Command-line interface and the run configuration it resolves to.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::Rng;
use tracing::warn;

use super::loader;
use crate::domain::{Grid, Pattern, presets};
use crate::error::LifeError;

/// Fallback for rows, columns and ticks per second when omitted or zero
pub const DEFAULT_DIMENSION: usize = 10;
pub const DEFAULT_TICKS_PER_SECOND: u8 = 10;

/// Conway's Game of Life, run until two consecutive generations match
#[derive(Parser, Debug)]
#[command(name = "term_life", version)]
pub struct Cli {
    /// Grid rows (0 means 10)
    #[arg(short, long, default_value_t = 0)]
    pub rows: u16,

    /// Grid columns (0 means 10)
    #[arg(short, long, default_value_t = 0)]
    pub cols: u16,

    /// Generations per second (0 means 10)
    #[arg(
        short,
        long = "ticksPerSecond",
        visible_alias = "ticks-per-second",
        default_value_t = 0
    )]
    pub ticks_per_second: u8,

    /// Initial pattern file; its own size overrides --rows/--cols
    #[arg(short, long, conflicts_with_all = ["pattern", "random"])]
    pub file: Option<PathBuf>,

    /// Preset pattern placed in the middle of the grid
    #[arg(short, long, value_parser = parse_pattern, conflicts_with = "random")]
    pub pattern: Option<Pattern>,

    /// Fill the grid randomly with this fraction of live cells
    #[arg(long, value_parser = parse_density)]
    pub random: Option<f64>,

    /// Print text frames instead of coloured blocks
    #[arg(long)]
    pub plain: bool,
}

fn parse_pattern(name: &str) -> Result<Pattern, String> {
    presets::find(name).map_err(|err| {
        let known: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        format!("{err} (known: {})", known.join(", "))
    })
}

fn parse_density(value: &str) -> Result<f64, String> {
    let density: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("density must be between 0 and 1, got {density}"))
    }
}

/// Where the first generation comes from
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// All cells dead
    Blank,
    File(PathBuf),
    Pattern(Pattern),
    Random(f64),
}

/// Fully resolved run settings
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub ticks_per_second: u8,
    pub seed: Seed,
    pub plain: bool,
}

impl Config {
    /// Pause between two rendered generations
    pub fn interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }

    /// Build generation zero
    pub fn initial_grid(&self) -> Result<Grid, LifeError> {
        self.initial_grid_with(&mut rand::rng())
    }

    pub fn initial_grid_with(&self, rng: &mut impl Rng) -> Result<Grid, LifeError> {
        match &self.seed {
            Seed::Blank => Grid::new(self.rows, self.cols),
            Seed::File(path) => loader::load_file(path),
            Seed::Pattern(pattern) => pattern.centered(self.rows, self.cols),
            Seed::Random(density) => Grid::random(self.rows, self.cols, *density, rng),
        }
    }
}

fn or_default(value: u16) -> usize {
    match value {
        0 => DEFAULT_DIMENSION,
        n => usize::from(n),
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let seed = match (cli.file, cli.pattern, cli.random) {
            (Some(path), ..) => {
                if cli.rows != 0 || cli.cols != 0 {
                    warn!(path = %path.display(), "--rows/--cols ignored, size comes from the file");
                }
                Seed::File(path)
            }
            (None, Some(pattern), _) => Seed::Pattern(pattern),
            (None, None, Some(density)) => Seed::Random(density),
            (None, None, None) => Seed::Blank,
        };
        let ticks_per_second = match cli.ticks_per_second {
            0 => DEFAULT_TICKS_PER_SECOND,
            n => n,
        };

        Self {
            rows: or_default(cli.rows),
            cols: or_default(cli.cols),
            ticks_per_second,
            seed,
            plain: cli.plain,
        }
    }
}
