//! Input state for UI interaction

use super::Rect;
use macroquad::prelude::*;

/// Mouse and modifier state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_pressed: bool, // Just pressed this frame
    /// Start-placement key held (S in the editor)
    pub place_start: bool,
}

impl MouseState {
    /// Poll macroquad for this frame
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            place_start: is_key_down(KeyCode::S),
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
#[derive(Debug, Default)]
pub struct UiContext {
    pub mouse: MouseState,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_needs_press_inside() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut mouse = MouseState { x: 5.0, y: 5.0, ..Default::default() };
        assert!(mouse.inside(&rect));
        assert!(!mouse.clicked(&rect));
        mouse.left_pressed = true;
        assert!(mouse.clicked(&rect));
        mouse.x = 20.0;
        assert!(!mouse.clicked(&rect));
    }
}
