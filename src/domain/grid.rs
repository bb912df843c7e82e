use std::fmt;

use rand::Rng;

use super::Cell;
use crate::error::LifeError;

/// Grid holds one generation of the bounded cellular automaton.
/// Cells are stored row-major; every row has the same length.
/// There is no mutation API: a new generation is always a new Grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        Self::from_fn(rows, cols, |_, _| false)
    }

    /// Build a grid by asking `alive` about every `(i, j)`
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut alive: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, LifeError> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyGrid);
        }
        let cells = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| Cell::from(alive(i, j)))
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from explicit rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(LifeError::MalformedGrid { row, expected, found });
        }
        Self::from_fn(rows.len(), expected, |i, j| rows[i][j])
    }

    /// Randomize a fresh grid, each cell alive with probability `density`
    pub fn random(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut impl Rng,
    ) -> Result<Self, LifeError> {
        let density = density.clamp(0.0, 1.0);
        Self::from_fn(rows, cols, |_, _| rng.random_bool(density))
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.rows
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Get cell at row `i`, column `j` (with bounds checking)
    pub fn get(&self, i: usize, j: usize) -> Option<Cell> {
        (i < self.rows && j < self.cols).then(|| self.cells[self.get_index(i, j)])
    }

    /// Positions outside the grid are dead
    pub fn is_alive(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_some_and(Cell::is_alive)
    }

    /// Cells of row `i`, left to right
    pub fn row(&self, i: usize) -> Option<&[Cell]> {
        (i < self.rows).then(|| &self.cells[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Same-shaped grid whose cells come from `f`, which sees only `self`
    pub(crate) fn map_cells(&self, f: impl Fn(usize, usize, Cell) -> Cell) -> Self {
        let cells = self.iter_cells().map(|(i, j, cell)| f(i, j, cell)).collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

/// `#` for alive, `-` for dead, one line per row.
/// The output loads back through the pattern loader unchanged.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for &cell in self.row(i).unwrap_or_default() {
                f.write_str(if cell.is_alive() { "#" } else { "-" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
