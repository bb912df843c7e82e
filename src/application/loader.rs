//! Initial patterns from plain text.
//!
//! Each line is a row and each byte a cell. A cell is alive when its byte is
//! one of the [`INK_GLYPHS`]; anything else, trailing whitespace included,
//! is dead. Short lines are right-padded with dead cells so the result is
//! always rectangular.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::Grid;
use crate::error::LifeError;

/// Characters that mark a live cell
pub const INK_GLYPHS: [u8; 17] = [
    b'1', b'o', b'O', b'*', b'@', b'#', b'X', b'x', b'+', b'%', b'$', b'&', b'~', b'^', b';',
    b':', b'.',
];

pub fn is_ink(byte: u8) -> bool {
    INK_GLYPHS.contains(&byte)
}

/// Parse a pattern from raw text
pub fn parse_grid(text: &[u8]) -> Result<Grid, LifeError> {
    let text = text.strip_suffix(b"\n").unwrap_or(text);
    if text.is_empty() {
        return Err(LifeError::EmptyGrid);
    }

    let lines: Vec<&[u8]> = text
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect();
    let cols = lines.iter().map(|line| line.len()).max().unwrap_or(0);

    Grid::from_fn(lines.len(), cols, |i, j| {
        lines[i].get(j).copied().is_some_and(is_ink)
    })
}

/// Load a pattern file from disk
#[instrument]
pub fn load_file(path: &Path) -> Result<Grid, LifeError> {
    let text = fs::read(path).map_err(|source| LifeError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(&text)?;
    debug!(rows = grid.height(), cols = grid.width(), "loaded grid:\n{}", grid);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_every_glyph_is_ink() {
        let grid = parse_grid(b"1oO*@#Xx+%$&~^;:.").unwrap();

        assert_eq!(grid.width(), 17);
        assert_eq!(grid.count_alive(), 17);
    }

    #[test]
    fn test_other_characters_are_dead() {
        let grid = parse_grid(b" -_0aZ|/\t=").unwrap();

        assert_eq!(grid.width(), 10);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_short_lines_are_padded() {
        let grid = parse_grid(b"#\n\n..#\n").unwrap();

        assert_eq!((grid.height(), grid.width()), (3, 3));
        assert!(grid.is_alive(0, 0));
        assert!(!grid.is_alive(0, 1));
        assert_eq!(grid.row(1).map(|row| row.len()), Some(3));
        assert!(grid.is_alive(2, 0));
        assert!(grid.is_alive(2, 2));
    }

    #[test]
    fn test_crlf_and_trailing_newline() {
        let unix = parse_grid(b"#-\n-#\n").unwrap();
        let dos = parse_grid(b"#-\r\n-#\r\n").unwrap();
        let bare = parse_grid(b"#-\n-#").unwrap();

        assert_eq!(unix, dos);
        assert_eq!(unix, bare);
        assert_eq!(unix.height(), 2);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(parse_grid(b""), Err(LifeError::EmptyGrid)));
        assert!(matches!(parse_grid(b"\n"), Err(LifeError::EmptyGrid)));
        assert!(matches!(parse_grid(b"\n\n\n"), Err(LifeError::EmptyGrid)));
    }

    #[test]
    fn test_display_loads_back() {
        let grid = Grid::from_fn(4, 6, |i, j| (i * j) % 3 == 1).unwrap();

        assert_eq!(parse_grid(grid.to_string().as_bytes()).unwrap(), grid);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "-o-\n-o-\n-o-\n").unwrap();

        let grid = load_file(file.path()).unwrap();

        assert_eq!((grid.height(), grid.width()), (3, 3));
        assert_eq!(grid.count_alive(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match load_file(&path) {
            Err(LifeError::InputUnavailable { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected InputUnavailable, got {:?}", other),
        }
    }
}
