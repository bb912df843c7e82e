//! Transition engine: one generation to the next, plus the fixed-point check.
//!
//! The topology is bounded. Neighbors that would fall outside the grid do not
//! exist, so a corner cell has 3 candidates, an edge cell 5 and an interior
//! cell 8.

use tracing::trace;

use super::{ConwayRule, Grid, Rule};

/// Applies a [`Rule`] to whole grids.
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine<R = ConwayRule> {
    rule: R,
}

impl Engine {
    /// Engine running Conway's B3/S23
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Rule> Engine<R> {
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    /// Count live neighbors of `(i, j)`, clamping each axis to the grid
    pub fn live_neighbors(&self, grid: &Grid, i: usize, j: usize) -> u8 {
        let last_row = grid.height() - 1;
        let last_col = grid.width() - 1;
        let cols = j.saturating_sub(1)..=(j + 1).min(last_col);

        (i.saturating_sub(1)..=(i + 1).min(last_row))
            .flat_map(|k| cols.clone().map(move |l| (k, l)))
            .filter(|&pos| pos != (i, j))
            .filter(|&(k, l)| grid.is_alive(k, l))
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation.
    /// Every cell is computed from `grid` alone; nothing reads a cell
    /// produced by this call.
    pub fn step(&self, grid: &Grid) -> Grid {
        let next = grid.map_cells(|i, j, cell| {
            self.rule.evolve(cell, self.live_neighbors(grid, i, j))
        });
        trace!(
            rule = self.rule.name(),
            before = grid.count_alive(),
            after = next.count_alive(),
            "stepped grid"
        );
        next
    }

    /// Two consecutive generations are identical
    pub fn is_stable(&self, previous: &Grid, next: &Grid) -> bool {
        previous == next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use proptest::prelude::*;

    fn grid_from(lines: &[&str]) -> Grid {
        Grid::from_rows(
            lines
                .iter()
                .map(|line| line.chars().map(|c| c == '#').collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_cell_dies() {
        let engine = Engine::new();
        for (i, j) in [(0, 0), (0, 4), (2, 2), (4, 0), (4, 4), (0, 2)] {
            let grid = Grid::from_fn(5, 5, |k, l| (k, l) == (i, j)).unwrap();
            assert_eq!(engine.live_neighbors(&grid, i, j), 0);
            assert_eq!(engine.step(&grid).count_alive(), 0, "cell at ({}, {})", i, j);
        }
    }

    #[test]
    fn test_block_still_life() {
        let engine = Engine::new();
        let grid = grid_from(&[
            "----", //
            "-##-",
            "-##-",
            "----",
        ]);

        let next = engine.step(&grid);

        assert_eq!(next, grid);
        assert!(engine.is_stable(&grid, &next));
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        let engine = Engine::new();
        let grid = grid_from(&["##", "##"]);

        assert_eq!(engine.step(&grid), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let engine = Engine::new();
        let horizontal = grid_from(&[
            "-----", //
            "-----",
            "-###-",
            "-----",
            "-----",
        ]);
        let vertical = grid_from(&[
            "-----", //
            "--#--",
            "--#--",
            "--#--",
            "-----",
        ]);

        let first = engine.step(&horizontal);
        let second = engine.step(&first);

        assert_eq!(first, vertical);
        assert_eq!(second, horizontal);
        assert!(!engine.is_stable(&horizontal, &first));
        assert!(!engine.is_stable(&first, &second));
    }

    #[test]
    fn test_step_reads_snapshot_only() {
        // Updating in place row by row kills (0, 1) before (1, 0) is
        // visited, so (1, 0) would see 2 neighbors and never be born.
        let engine = Engine::new();
        let grid = grid_from(&[
            "-#-", //
            "--#",
            "###",
        ]);
        let expected = grid_from(&[
            "---", //
            "#-#",
            "-##",
        ]);

        assert_eq!(engine.step(&grid), expected);
    }

    #[test]
    fn test_glider_hits_wall_without_wrapping() {
        let engine = Engine::new();
        let mut grid = grid_from(&[
            "-#---", //
            "--#--",
            "###--",
            "-----",
            "-----",
        ]);
        // On a torus the glider would travel forever. Bounded, it
        // collapses into a block in the bottom-right corner.
        for _ in 0..20 {
            grid = engine.step(&grid);
        }
        let block = grid_from(&[
            "-----", //
            "-----",
            "-----",
            "---##",
            "---##",
        ]);
        assert_eq!(grid, block);
        assert!(engine.is_stable(&grid, &engine.step(&grid)));
    }

    #[test]
    fn test_neighbor_counts_on_full_grid() {
        let engine = Engine::new();
        for n in 3..=7 {
            let grid = Grid::from_fn(n, n, |_, _| true).unwrap();
            for (i, j, _) in grid.iter_cells() {
                let on_row_edge = i == 0 || i == n - 1;
                let on_col_edge = j == 0 || j == n - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 3,
                    (true, false) | (false, true) => 5,
                    (false, false) => 8,
                };
                assert_eq!(
                    engine.live_neighbors(&grid, i, j),
                    expected,
                    "({}, {}) in {}x{}",
                    i,
                    j,
                    n,
                    n
                );
            }
        }
    }

    #[test]
    fn test_neighbors_on_single_row_and_column() {
        let engine = Engine::new();
        let row = Grid::from_fn(1, 4, |_, _| true).unwrap();
        let column = Grid::from_fn(4, 1, |_, _| true).unwrap();
        let single = Grid::from_fn(1, 1, |_, _| true).unwrap();

        assert_eq!(engine.live_neighbors(&row, 0, 0), 1);
        assert_eq!(engine.live_neighbors(&row, 0, 2), 2);
        assert_eq!(engine.live_neighbors(&column, 3, 0), 1);
        assert_eq!(engine.live_neighbors(&single, 0, 0), 0);
        assert_eq!(engine.step(&single).get(0, 0), Some(Cell::Dead));
    }

    #[test]
    fn test_default_dead_grid_is_stable_after_one_step() {
        let engine = Engine::new();
        let grid = Grid::new(10, 10).unwrap();

        let next = engine.step(&grid);

        assert!(engine.is_stable(&grid, &next));
    }

    #[test]
    fn test_custom_rule() {
        // B1/S: every cell touching exactly one live cell is born, nothing survives
        struct Gnarl;
        impl Rule for Gnarl {
            fn name(&self) -> &'static str {
                "B1/S"
            }
            fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
                Cell::from(current == Cell::Dead && neighbors == 1)
            }
        }
        let engine = Engine::with_rule(Gnarl);
        let grid = Grid::from_fn(3, 3, |i, j| (i, j) == (1, 1)).unwrap();

        let next = engine.step(&grid);

        assert_eq!(next.count_alive(), 8);
        assert!(!next.is_alive(1, 1));
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..12, 1usize..12).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |bits| {
                Grid::from_fn(rows, cols, |i, j| bits[i * cols + j]).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn test_step_is_deterministic(grid in arb_grid()) {
            let engine = Engine::new();
            prop_assert_eq!(engine.step(&grid), engine.step(&grid));
        }

        #[test]
        fn test_step_preserves_shape(grid in arb_grid()) {
            let next = Engine::new().step(&grid);
            prop_assert_eq!(next.height(), grid.height());
            prop_assert_eq!(next.width(), grid.width());
        }

        #[test]
        fn test_stable_is_reflexive(grid in arb_grid()) {
            prop_assert!(Engine::new().is_stable(&grid, &grid.clone()));
        }

        #[test]
        fn test_lone_cell_always_dies(rows in 1usize..20, cols in 1usize..20, seed in any::<usize>()) {
            let (i, j) = (seed % rows, (seed / rows) % cols);
            let grid = Grid::from_fn(rows, cols, |k, l| (k, l) == (i, j)).unwrap();
            prop_assert_eq!(Engine::new().step(&grid).count_alive(), 0);
        }

        #[test]
        fn test_neighbor_count_bounded(grid in arb_grid()) {
            let engine = Engine::new();
            for (i, j, _) in grid.iter_cells() {
                prop_assert!(engine.live_neighbors(&grid, i, j) <= 8);
            }
        }
    }
}
