//! Editor drawing and click handling

use macroquad::prelude::*;
use crate::ui::{text_button, MouseState, UiContext};
use crate::world::{START, WALL};
use super::{EditorLayout, EditorState};

/// What the panel buttons asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Save,
    Load,
}

const GRID_LINE_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const START_COLOR: Color = Color::new(0.0, 0.78, 0.0, 1.0);

/// Apply a grid click: S held places the start, otherwise the cell toggles.
/// Returns true if the grid changed.
pub fn handle_grid_click(state: &mut EditorState, layout: &EditorLayout, mouse: &MouseState) -> bool {
    if !mouse.left_pressed {
        return false;
    }
    let Some((i, j)) = layout.cell_at(mouse.x, mouse.y) else {
        return false;
    };
    if mouse.place_start {
        state.set_start(i, j)
    } else {
        state.toggle_cell(i, j)
    }
}

/// Draw one editor frame and process its clicks
pub fn draw_editor(ctx: &UiContext, layout: &EditorLayout, state: &mut EditorState) -> EditorAction {
    clear_background(WHITE);

    handle_grid_click(state, layout, &ctx.mouse);
    draw_grid(layout, state);

    let mut action = EditorAction::None;
    if text_button(ctx, layout.save_button(), "Save Map") {
        action = EditorAction::Save;
    }
    if text_button(ctx, layout.load_button(), "Load Map") {
        action = EditorAction::Load;
    }
    action
}

fn draw_grid(layout: &EditorLayout, state: &EditorState) {
    for (j, row) in state.grid.iter().enumerate() {
        for (i, &c) in row.iter().enumerate() {
            let r = layout.cell_rect(i, j);
            match c {
                WALL => draw_rectangle(r.x, r.y, r.w, r.h, BLACK),
                START => {
                    draw_rectangle(r.x, r.y, r.w, r.h, START_COLOR);
                    draw_line(r.x + 5.0, r.y + 5.0, r.right() - 5.0, r.bottom() - 5.0, 3.0, WHITE);
                    draw_line(r.right() - 5.0, r.y + 5.0, r.x + 5.0, r.bottom() - 5.0, 3.0, WHITE);
                }
                _ => {}
            }
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Status text along the bottom of the button panel
pub fn draw_status(layout: &EditorLayout, text: &str) {
    let x = layout.grid_rect().right() + 10.0;
    let y = layout.height - 20.0;
    draw_text(text, x.round(), y.round(), 16.0, DARKGRAY);
}
