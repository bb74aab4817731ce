//! Tilecaster: a Wolfenstein-style raycasting renderer
//!
//! - Tile maps loaded from plain text (`#` wall, `.` floor, `S` start)
//! - Fixed-step (or exact DDA) ray marching per screen column
//! - Fisheye-corrected wall projection into a software framebuffer
//! - Collision-checked player movement
//! - Companion map editor writing the same text format

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod editor;
pub mod game;
pub mod message;
pub mod ollama;
pub mod player;
pub mod raycaster;
pub mod ui;
pub mod world;
