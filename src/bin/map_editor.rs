//! Map editor for tilecaster maps
//!
//! Left click toggles wall/floor, S + left click places the start.
//! Save Map / Load Map read and write the map file the raycaster uses.

use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tilecaster::config::{RaycasterConfig, CONFIG_FILE};
use tilecaster::editor::{
    draw_editor, draw_status, EditorAction, EditorLayout, EditorState, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use tilecaster::ui::{MouseState, UiContext};
use tilecaster::VERSION;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Tilecaster Map Editor v{}", VERSION),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RaycasterConfig::load_or_default(CONFIG_FILE);
    let layout = EditorLayout::default();
    let mut state = EditorState::new(config.map_path);
    let mut ui_ctx = UiContext::new();

    info!(path = %state.current_file.display(), "map editor started");

    prevent_quit();

    loop {
        if is_quit_requested() {
            break;
        }

        ui_ctx.begin_frame(MouseState::poll());
        let now = get_time();

        match draw_editor(&ui_ctx, &layout, &mut state) {
            EditorAction::Save => state.save(now),
            EditorAction::Load => state.load(now),
            EditorAction::None => {}
        }
        if let Some(text) = state.get_status(now) {
            draw_status(&layout, text);
        }

        next_frame().await;
    }

    info!("exiting");
}
