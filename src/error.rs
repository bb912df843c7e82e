//! Error types for grid construction, loading and rendering.

use std::path::PathBuf;

use derive_more::{Display, Error};

/// Everything that can go wrong outside the transition rule itself.
#[derive(Debug, Display, Error)]
pub enum LifeError {
    /// The initial-state file could not be opened or read.
    #[display("could not open file {}: {source}", path.display())]
    InputUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Rows of unequal length were supplied to a grid constructor.
    #[display("malformed grid: row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        /// Index of the first offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A grid needs at least one row and one column.
    #[display("grid must have at least one row and one column")]
    EmptyGrid,

    /// No preset pattern goes by the requested name.
    #[display("unknown pattern {name:?}")]
    UnknownPattern {
        /// Name as given on the command line.
        name: String,
    },

    /// Writing a frame to the display backend failed.
    #[display("failed to render frame: {source}")]
    Render {
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

impl LifeError {
    /// Wraps a renderer I/O failure.
    pub fn render(source: std::io::Error) -> Self {
        Self::Render { source }
    }
}
