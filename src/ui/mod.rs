//! Immediate-mode UI helpers for the map editor

mod input;
mod widgets;

pub use input::*;
pub use widgets::*;

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Inclusive on all edges
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(810.0, 50.0, 180.0, 40.0);
        assert!(r.contains(810.0, 50.0));
        assert!(r.contains(990.0, 90.0));
        assert!(!r.contains(809.9, 60.0));
        assert!(!r.contains(900.0, 90.1));
    }
}
