//! Game session: everything the frame loop owns

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use crate::config::RaycasterConfig;
use crate::message::{MessageBoard, MessageSource};
use crate::player::{PlayerController, Pose};
use crate::raycaster::{render_frame, Framebuffer, RenderSettings};
use crate::world::TileMap;
use super::input::FrameInput;

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Terminated,
}

/// Side effects the window layer must carry out after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SetFullscreen(bool),
}

/// Owns the map, pose, UI flags and the message board for one run
pub struct Game {
    /// Loaded once, read-only afterwards
    pub map: TileMap,
    pub pose: Pose,
    pub controller: PlayerController,
    pub settings: RenderSettings,
    pub state: GameState,
    pub show_help: bool,
    pub fullscreen: bool,
    pub messages: MessageBoard,
    source: Arc<dyn MessageSource>,
}

impl Game {
    /// Start a session on `map`.
    ///
    /// The player starts at the center of the map's `S` cell, or at
    /// `config.default_start` when the map has none.
    pub fn new(map: TileMap, config: &RaycasterConfig, source: Arc<dyn MessageSource>) -> Self {
        let map = map.with_cell_size(config.cell_size.0, config.cell_size.1);
        let (x, y) = match map.start_position() {
            Some(pos) => pos,
            None => {
                warn!(
                    x = config.default_start.0,
                    y = config.default_start.1,
                    "map has no start marker, using configured default start"
                );
                config.default_start
            }
        };

        Self {
            map,
            pose: Pose::new(x, y, 0.0),
            controller: config.player_controller(),
            settings: config.render_settings(),
            state: GameState::Running,
            show_help: false,
            fullscreen: config.fullscreen,
            messages: MessageBoard::new(config.message.duration()),
            source,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Explicit quit request
    pub fn quit(&mut self) {
        if self.state != GameState::Terminated {
            info!("quit requested");
            self.state = GameState::Terminated;
        }
    }

    /// Apply one frame of input: toggles first, then rotation and movement
    pub fn update(&mut self, input: &FrameInput) -> Vec<GameAction> {
        let mut actions = Vec::new();
        if !self.is_running() {
            return actions;
        }
        if input.quit {
            self.quit();
            return actions;
        }

        if input.toggle_help {
            self.show_help = !self.show_help;
        }
        if input.toggle_fullscreen {
            self.fullscreen = !self.fullscreen;
            info!(fullscreen = self.fullscreen, "display mode toggled");
            actions.push(GameAction::SetFullscreen(self.fullscreen));
        }
        if input.request_message {
            // Worker runs detached; the board holds the result
            if self.messages.request(Arc::clone(&self.source)).is_some() {
                info!("message requested");
            }
        }

        self.controller.update(&self.map, &mut self.pose, input.mouse_dx, input.intents);
        actions
    }

    /// Draw the 3D view for the current pose
    pub fn render(&self, fb: &mut Framebuffer) {
        render_frame(fb, &self.map, &self.pose, &self.settings);
    }

    /// Message text to overlay this frame
    pub fn message(&self, now: Instant) -> Option<String> {
        self.messages.current(now)
    }
}
