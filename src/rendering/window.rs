//! macroquad drawing for the `window` binary.
//!
//! Drawing has to happen between macroquad frames, so this backend is a set
//! of draw calls rather than a [`Renderer`](super::Renderer).

use macroquad::prelude::*;

use crate::application::Phase;
use crate::domain::Grid;

pub const STATUS_HEIGHT: f32 = 28.0;

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0); // Bright green
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Largest square cell that fits the whole grid above the status bar
pub fn cell_size(grid: &Grid, area_width: f32, area_height: f32) -> f32 {
    let by_width = area_width / grid.width() as f32;
    let by_height = (area_height - STATUS_HEIGHT).max(0.0) / grid.height() as f32;
    by_width.min(by_height).max(1.0)
}

/// Draw the grid scaled to the window, centred horizontally
pub fn draw_grid(grid: &Grid) {
    let size = cell_size(grid, screen_width(), screen_height());
    let left = (screen_width() - size * grid.width() as f32).max(0.0) / 2.0;
    let draw_grid_lines = size >= 4.0;

    for (i, j, cell) in grid.iter_cells() {
        let x = left + j as f32 * size;
        let y = STATUS_HEIGHT + i as f32 * size;
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, size, size, color);
        if draw_grid_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Generation counter and run state along the top edge
pub fn draw_status(generation: u64, alive: usize, phase: Phase) {
    let state = match phase {
        Phase::Running => "running",
        Phase::Stable => "stable (Esc to quit)",
    };
    let text = format!("generation {generation}  alive {alive}  {state}");
    draw_text(&text, 8.0, STATUS_HEIGHT - 8.0, 22.0, WHITE);
}
