//! Editor state and data

use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::world::{find_start, read_rows, write_rows, MapError, FLOOR, START, WALL};

/// Default grid size for a new map
pub const MAP_WIDTH: usize = 20;
pub const MAP_HEIGHT: usize = 15;

/// Editor state: the grid being painted plus file and status info
pub struct EditorState {
    /// Cell symbols, row-major; may contain one `S`
    pub grid: Vec<Vec<char>>,

    /// Start cell as (column, row), mirrored by the `S` in `grid`
    pub start: Option<(usize, usize)>,

    /// File used by the Save/Load buttons
    pub current_file: PathBuf,

    /// Status message (shown in status bar)
    pub status_message: Option<(String, f64)>, // (message, expiry_time)
}

impl EditorState {
    /// Empty floor grid of the default size
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self::with_size(MAP_WIDTH, MAP_HEIGHT, file)
    }

    pub fn with_size(width: usize, height: usize, file: impl Into<PathBuf>) -> Self {
        Self {
            grid: vec![vec![FLOOR; width]; height],
            start: None,
            current_file: file.into(),
            status_message: None,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<char> {
        self.grid.get(j).and_then(|row| row.get(i)).copied()
    }

    /// Click on a cell: clears the start marker if it is one, else flips wall/floor.
    /// Returns false for cells outside the grid.
    pub fn toggle_cell(&mut self, i: usize, j: usize) -> bool {
        let Some(cell) = self.grid.get_mut(j).and_then(|row| row.get_mut(i)) else {
            return false;
        };
        *cell = match *cell {
            START => {
                self.start = None;
                FLOOR
            }
            FLOOR => WALL,
            _ => FLOOR,
        };
        true
    }

    /// Move the start marker to `(i, j)`, clearing the previous one
    pub fn set_start(&mut self, i: usize, j: usize) -> bool {
        if self.cell(i, j).is_none() {
            return false;
        }
        if let Some((oi, oj)) = self.start.take() {
            if let Some(c) = self.grid.get_mut(oj).and_then(|row| row.get_mut(oi)) {
                *c = FLOOR;
            }
        }
        self.grid[j][i] = START;
        self.start = Some((i, j));
        true
    }

    /// Write the grid (including the `S` marker) to a file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), MapError> {
        write_rows(path, &self.grid)
    }

    /// Replace the grid with a file's contents, keeping its `S` marker.
    ///
    /// Only the first `S` in row-major order survives; any others become floor.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MapError> {
        let mut rows = read_rows(path)?;
        let start = find_start(&rows);
        for (j, row) in rows.iter_mut().enumerate() {
            for (i, c) in row.iter_mut().enumerate() {
                if *c == START && start != Some((i, j)) {
                    *c = FLOOR;
                }
            }
        }
        self.start = start;
        self.grid = rows;
        Ok(())
    }

    /// Save button: write to the current file and report in the status bar
    pub fn save(&mut self, now: f64) {
        let path = self.current_file.clone();
        match self.save_to(&path) {
            Ok(()) => {
                info!(path = %path.display(), "map saved");
                self.set_status(&format!("Map saved to {}", path.display()), now, 3.0);
            }
            Err(e) => {
                warn!(error = %e, "map save failed");
                self.set_status(&format!("Save failed: {}", e), now, 5.0);
            }
        }
    }

    /// Load button: read the current file and report in the status bar
    pub fn load(&mut self, now: f64) {
        let path = self.current_file.clone();
        match self.load_from(&path) {
            Ok(()) => {
                info!(path = %path.display(), start = ?self.start, "map loaded");
                self.set_status(&format!("Loaded {}", path.display()), now, 3.0);
            }
            Err(MapError::NotFound(_)) => {
                warn!(path = %path.display(), "map file not found");
                self.set_status("File not found. Please save a map first.", now, 5.0);
            }
            Err(e) => {
                warn!(error = %e, "map load failed");
                self.set_status(&format!("Load failed: {}", e), now, 5.0);
            }
        }
    }

    /// Set a status message that expires `duration` seconds after `now`
    pub fn set_status(&mut self, message: &str, now: f64, duration: f64) {
        self.status_message = Some((message.to_string(), now + duration));
    }

    /// Get current status message if not expired
    pub fn get_status(&self, now: f64) -> Option<&str> {
        match &self.status_message {
            Some((msg, expiry)) if now < *expiry => Some(msg.as_str()),
            _ => None,
        }
    }
}
