//! Editor screen layout
//!
//! Map grid on the left, button panel in the rightmost 200 pixels.

use crate::ui::Rect;

/// Window size
pub const WINDOW_WIDTH: f32 = 1000.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
/// Pixel size of one grid cell
pub const TILE_SIZE: f32 = 40.0;
/// Width reserved for the button panel
pub const PANEL_WIDTH: f32 = 200.0;

/// Fixed editor layout derived from the window size
#[derive(Debug, Clone, Copy)]
pub struct EditorLayout {
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self { width: WINDOW_WIDTH, height: WINDOW_HEIGHT, tile_size: TILE_SIZE }
    }
}

impl EditorLayout {
    /// Area where the grid is drawn and clicked
    pub fn grid_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width - PANEL_WIDTH, self.height)
    }

    pub fn save_button(&self) -> Rect {
        Rect::new(self.width - 190.0, 50.0, 180.0, 40.0)
    }

    pub fn load_button(&self) -> Rect {
        Rect::new(self.width - 190.0, 100.0, 180.0, 40.0)
    }

    /// Grid cell under a screen point, if the point is in the grid area
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || x >= self.width - PANEL_WIDTH || y >= self.height {
            return None;
        }
        Some(((x / self.tile_size) as usize, (y / self.tile_size) as usize))
    }

    /// Screen rect of cell `(i, j)`
    pub fn cell_rect(&self, i: usize, j: usize) -> Rect {
        Rect::new(i as f32 * self.tile_size, j as f32 * self.tile_size, self.tile_size, self.tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at() {
        let layout = EditorLayout::default();
        assert_eq!(layout.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(layout.cell_at(85.0, 41.0), Some((2, 1)));
        assert_eq!(layout.cell_at(799.0, 599.0), Some((19, 14)));
        // Panel area
        assert_eq!(layout.cell_at(800.0, 10.0), None);
        assert_eq!(layout.cell_at(-1.0, 10.0), None);
    }

    #[test]
    fn test_buttons_in_panel() {
        let layout = EditorLayout::default();
        let grid = layout.grid_rect();
        for b in [layout.save_button(), layout.load_button()] {
            assert!(b.x > grid.right());
            assert!(b.right() <= layout.width);
        }
    }
}
