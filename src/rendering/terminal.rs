use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{Clear, ClearType},
};

use super::Renderer;
use crate::domain::Grid;
use crate::error::LifeError;

/// Clears the screen and paints each cell as a two-column coloured block:
/// white when alive, black when dead.
pub struct AnsiRenderer<W: Write> {
    out: W,
}

impl AnsiRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for i in 0..grid.height() {
            for j in 0..grid.width() {
                let color = if grid.is_alive(i, j) { Color::White } else { Color::Black };
                queue!(self.out, SetBackgroundColor(color), Print("  "), ResetColor)?;
            }
            queue!(self.out, Print("\n"))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn render(&mut self, grid: &Grid, _generation: u64) -> Result<(), LifeError> {
        self.draw(grid).map_err(LifeError::render)
    }
}

/// Text frames (`#` alive, `-` dead) with a generation header, no escape codes.
/// Suitable for piping into a file.
pub struct PlainRenderer<W: Write> {
    out: W,
}

impl PlainRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<(), LifeError> {
        writeln!(self.out, "generation {generation}")
            .and_then(|()| write!(self.out, "{grid}"))
            .and_then(|()| writeln!(self.out))
            .and_then(|()| self.out.flush())
            .map_err(LifeError::render)
    }
}
