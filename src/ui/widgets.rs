//! Basic UI widgets

use macroquad::prelude::*;
use super::{Rect, UiContext};

/// Idle button background
pub const BUTTON_BG: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0);
/// Hovered button background
pub const BUTTON_HOVER_BG: Color = Color::new(220.0 / 255.0, 220.0 / 255.0, 220.0 / 255.0, 1.0);

const BUTTON_FONT_SIZE: f32 = 28.0;

/// Draw a labeled button, returns true if clicked
pub fn text_button(ctx: &UiContext, rect: Rect, label: &str) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    let bg = if hovered { BUTTON_HOVER_BG } else { BUTTON_BG };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);

    // Left-aligned with padding, vertically centered - integer pixels for crisp text
    let dims = measure_text(label, None, BUTTON_FONT_SIZE as u16, 1.0);
    let text_x = (rect.x + 10.0).round();
    let text_y = (rect.y + (rect.h + dims.offset_y) * 0.5).round();
    draw_text(label, text_x, text_y, BUTTON_FONT_SIZE, WHITE);

    ctx.mouse.clicked(&rect)
}
