//! Tile grid used for collision and ray termination

use std::path::Path;
use super::map_file::{find_start, parse_rows, read_rows, MapError, FLOOR, START, WALL};

/// Default cell width in world units
pub const CELL_WIDTH: f32 = 60.0;
/// Default cell height in world units
pub const CELL_HEIGHT: f32 = 60.0;

/// Immutable 2D grid of cell symbols plus the designated start cell.
///
/// Anything outside the grid (including past the end of a short row)
/// counts as solid, so ragged input never needs padding.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    cells: Vec<Vec<char>>,
    width: usize,
    start: Option<(usize, usize)>,
    cell_width: f32,
    cell_height: f32,
}

impl TileMap {
    /// Build a map from raw rows.
    ///
    /// The first `S` in row-major order becomes the start cell. Every `S`
    /// is turned into floor, so no marker survives loading.
    pub fn from_rows(mut cells: Vec<Vec<char>>) -> Self {
        let start = find_start(&cells);
        for c in cells.iter_mut().flatten() {
            if *c == START {
                *c = FLOOR;
            }
        }
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(0);
        Self {
            cells,
            width,
            start,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
        }
    }

    /// Parse map text
    pub fn parse(text: &str) -> Self {
        Self::from_rows(parse_rows(text))
    }

    /// Load a map from a text file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        Ok(Self::from_rows(read_rows(path)?))
    }

    /// Override the world-space size of one cell
    pub fn with_cell_size(mut self, width: f32, height: f32) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Number of columns (length of the longest row)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Symbol at column `i`, row `j`, if the cell exists
    pub fn cell(&self, i: usize, j: usize) -> Option<char> {
        self.cells.get(j).and_then(|row| row.get(i)).copied()
    }

    /// True when `(i, j)` is outside the grid or holds a wall
    pub fn is_blocking(&self, i: i64, j: i64) -> bool {
        if i < 0 || j < 0 {
            return true;
        }
        match self.cell(i as usize, j as usize) {
            Some(c) => c == WALL,
            None => true,
        }
    }

    /// Map a continuous world position to its cell
    pub fn cell_at(&self, x: f32, y: f32) -> (i64, i64) {
        (
            (x / self.cell_width).floor() as i64,
            (y / self.cell_height).floor() as i64,
        )
    }

    /// `is_blocking` for the cell containing a world position
    pub fn is_blocking_at(&self, x: f32, y: f32) -> bool {
        let (i, j) = self.cell_at(x, y);
        self.is_blocking(i, j)
    }

    /// Start cell as `(column, row)`, if the file had an `S`
    pub fn start(&self) -> Option<(usize, usize)> {
        self.start
    }

    /// World position at the center of the start cell
    pub fn start_position(&self) -> Option<(f32, f32)> {
        self.start.map(|(i, j)| {
            (
                i as f32 * self.cell_width + self.cell_width / 2.0,
                j as f32 * self.cell_height + self.cell_height / 2.0,
            )
        })
    }

    /// Count of passable cells (for load diagnostics)
    pub fn floor_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c != WALL).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_start_marker_becomes_floor() {
        let map = TileMap::parse("#####\n#..S#\n#####\n");
        assert_eq!(map.start(), Some((3, 1)));
        assert_eq!(map.cell(3, 1), Some('.'));
        assert!((0..map.height()).all(|j| (0..map.width()).all(|i| map.cell(i, j) != Some('S'))));
    }

    #[test]
    fn test_only_first_start_is_used() {
        let map = TileMap::parse("S.S\n...\n");
        assert_eq!(map.start(), Some((0, 0)));
        assert_eq!(map.cell(0, 0), Some('.'));
        assert_eq!(map.cell(2, 0), Some('.'));
    }

    #[test]
    fn test_no_start() {
        let map = TileMap::parse("###\n#.#\n###\n");
        assert_eq!(map.start(), None);
        assert_eq!(map.start_position(), None);
    }

    #[test]
    fn test_start_position_is_cell_center() {
        let map = TileMap::parse("###\n#S#\n###\n");
        assert_eq!(map.start_position(), Some((90.0, 90.0)));
    }

    #[test]
    fn test_ragged_rows() {
        let map = TileMap::parse("#####\n#.\n#...#\n");
        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 3);
        // Past the end of the short row is solid
        assert!(map.is_blocking(3, 1));
        assert!(!map.is_blocking(1, 1));
    }

    #[test]
    fn test_cell_at() {
        let map = TileMap::parse("...\n...\n");
        assert_eq!(map.cell_at(0.0, 0.0), (0, 0));
        assert_eq!(map.cell_at(59.9, 60.0), (0, 1));
        assert_eq!(map.cell_at(-0.1, 10.0), (-1, 0));
    }

    #[test]
    fn test_custom_cell_size() {
        let map = TileMap::parse("..\n..\n").with_cell_size(10.0, 20.0);
        assert_eq!(map.cell_at(15.0, 15.0), (1, 0));
        assert!(map.is_blocking_at(25.0, 5.0));
    }

    #[test]
    fn test_empty_map_is_all_blocking() {
        let map = TileMap::parse("");
        assert_eq!(map.width(), 0);
        assert!(map.is_blocking(0, 0));
    }

    proptest! {
        #[test]
        fn prop_outside_grid_is_blocking(
            w in 1usize..8,
            h in 1usize..8,
            i in -50i64..50,
            j in -50i64..50,
        ) {
            let text = vec![".".repeat(w); h].join("\n");
            let map = TileMap::parse(&text);
            let outside = i < 0 || j < 0 || i >= w as i64 || j >= h as i64;
            prop_assert_eq!(map.is_blocking(i, j), outside);
        }
    }
}
