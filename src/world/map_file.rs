//! Map loading and saving
//!
//! Plain text: one line per row, one character per cell.
//! `#` is a wall, `.` is floor, `S` marks the start cell (editor output only).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Wall cell symbol
pub const WALL: char = '#';
/// Floor cell symbol
pub const FLOOR: char = '.';
/// Start marker symbol
pub const START: char = 'S';

/// Error type for map file access
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MapError {
    fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == ErrorKind::NotFound {
            MapError::NotFound(path.to_path_buf())
        } else {
            MapError::Io { path: path.to_path_buf(), source }
        }
    }
}

/// Split map text into rows of cell symbols.
///
/// Surrounding whitespace is stripped from each line. Rows may be ragged.
pub fn parse_rows(text: &str) -> Vec<Vec<char>> {
    text.lines().map(|line| line.trim().chars().collect()).collect()
}

/// Find the first start marker in row-major order, as `(column, row)`
pub fn find_start(rows: &[Vec<char>]) -> Option<(usize, usize)> {
    rows.iter().enumerate().find_map(|(j, row)| {
        row.iter().position(|&c| c == START).map(|i| (i, j))
    })
}

/// Render rows back to map text (newline after every row)
pub fn rows_to_string(rows: &[Vec<char>]) -> String {
    let mut out = String::with_capacity(rows.iter().map(|r| r.len() + 1).sum());
    for row in rows {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Read raw rows from a map file (start marker left in place)
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<char>>, MapError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| MapError::from_io(path, e))?;
    Ok(parse_rows(&contents))
}

/// Write rows to a map file
pub fn write_rows<P: AsRef<Path>>(path: P, rows: &[Vec<char>]) -> Result<(), MapError> {
    let path = path.as_ref();
    fs::write(path, rows_to_string(rows)).map_err(|e| MapError::from_io(path, e))
}
