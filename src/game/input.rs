//! Frame input polling
//!
//! Reads keyboard and mouse state once per frame into a plain struct so the
//! game update stays independent of the window layer.

use macroquad::prelude::*;
use crate::player::MoveIntents;

/// Everything the game needs from one frame of input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal pointer motion in pixels (positive = turn right)
    pub mouse_dx: f32,
    pub intents: MoveIntents,
    pub toggle_help: bool,
    pub toggle_fullscreen: bool,
    pub request_message: bool,
    /// Escape held or window close requested
    pub quit: bool,
}

impl FrameInput {
    /// Poll macroquad for this frame
    pub fn poll() -> Self {
        // Normalized delta is in [-1, 1] per half screen, inverted
        let delta = mouse_delta_position();
        let mouse_dx = -delta.x * screen_width() / 2.0;

        Self {
            mouse_dx,
            intents: MoveIntents {
                forward: is_key_down(KeyCode::W),
                backward: is_key_down(KeyCode::S),
                strafe_left: is_key_down(KeyCode::A),
                strafe_right: is_key_down(KeyCode::D),
            },
            toggle_help: is_key_pressed(KeyCode::F1),
            toggle_fullscreen: is_key_pressed(KeyCode::F),
            request_message: is_key_pressed(KeyCode::F2),
            quit: is_key_down(KeyCode::Escape) || is_quit_requested(),
        }
    }
}
