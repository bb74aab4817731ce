//! Screen output: framebuffer blit plus help and message overlays

use macroquad::prelude::*;
use crate::raycaster::Framebuffer;

/// Help panel text, top to bottom
pub const HELP_LINES: [&str; 5] = [
    "W, A, S, D: Move",
    "Mouse: Look Around",
    "F1: Toggle Help",
    "F2: Get Message",
    "F: Toggle Fullscreen",
];

const FONT_SIZE: f32 = 30.0;
const LINE_SPACING: f32 = 40.0;
const MESSAGE_BAR_HEIGHT: f32 = 60.0;

/// Stretch the framebuffer over the whole window
pub fn present(fb: &Framebuffer) {
    let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
    texture.set_filter(FilterMode::Nearest);

    draw_texture_ex(
        &texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(Vec2::new(screen_width(), screen_height())),
            ..Default::default()
        },
    );
}

/// Key bindings, top-left
pub fn draw_help() {
    for (i, line) in HELP_LINES.iter().enumerate() {
        let y = 10.0 + i as f32 * LINE_SPACING + FONT_SIZE;
        draw_text(line, 10.0, y, FONT_SIZE, WHITE);
    }
}

/// Black bar along the bottom with the message centered in it
pub fn draw_message(text: &str) {
    let w = screen_width();
    let h = screen_height();
    draw_rectangle(0.0, h - MESSAGE_BAR_HEIGHT, w, MESSAGE_BAR_HEIGHT, BLACK);

    let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
    let x = ((w - dims.width) / 2.0).round();
    let y = (h - MESSAGE_BAR_HEIGHT / 2.0 + dims.offset_y / 2.0).round();
    draw_text(text, x, y, FONT_SIZE, WHITE);
}
