//! Tilecaster: first-person raycasting renderer
//!
//! Loads `map.txt` (or the map named in `tilecaster.ron`), then runs the
//! frame loop until Escape or the window is closed.

use std::sync::Arc;
use std::time::Instant;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tilecaster::config::{RaycasterConfig, CONFIG_FILE};
use tilecaster::game::{view, FrameInput, FrameLimiter, Game, GameAction};
use tilecaster::ollama::OllamaClient;
use tilecaster::raycaster::Framebuffer;
use tilecaster::world::TileMap;
use tilecaster::VERSION;

fn window_conf() -> Conf {
    // Runs before logging is set up; problems are reported again in main
    let config = RaycasterConfig::load(CONFIG_FILE).ok().flatten().unwrap_or_default();
    Conf {
        window_title: format!("Tilecaster v{}", VERSION),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        fullscreen: config.fullscreen,
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

    // No map, nothing to play: fail before the loop starts
    let map = match TileMap::load(&config.map_path) {
        Ok(map) => map,
        Err(e) => {
            error!(error = %e, "failed to load map");
            std::process::exit(1);
        }
    };
    info!(
        path = %config.map_path.display(),
        width = map.width(),
        height = map.height(),
        floor = map.floor_count(),
        start = ?map.start(),
        "map loaded"
    );

    let source = Arc::new(OllamaClient::from_config(&config.message));
    let mut game = Game::new(map, &config, source);
    let mut fb = Framebuffer::new(config.window_width as usize, config.window_height as usize);
    let mut limiter = FrameLimiter::new(config.frame_time());

    prevent_quit();
    set_cursor_grab(true);
    show_mouse(false);

    while game.is_running() {
        let input = FrameInput::poll();
        for action in game.update(&input) {
            match action {
                GameAction::SetFullscreen(on) => set_fullscreen(on),
            }
        }
        if !game.is_running() {
            break;
        }

        // Render at window resolution; changes on fullscreen toggle
        fb.resize(screen_width() as usize, screen_height() as usize);
        game.render(&mut fb);
        clear_background(BLACK);
        view::present(&fb);
        if game.show_help {
            view::draw_help();
        }
        if let Some(text) = game.message(Instant::now()) {
            view::draw_message(&text);
        }

        limiter.wait();
        next_frame().await;
    }

    set_cursor_grab(false);
    show_mouse(true);
    info!("exiting");
}
