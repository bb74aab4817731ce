//! Raycasting renderer
//!
//! Features:
//! - One ray per screen strip against the tile grid
//! - Fixed-step march or exact DDA
//! - Fisheye correction and perspective wall projection
//! - Software framebuffer, uploaded as a texture each frame

mod cast;
mod framebuffer;
mod render;
mod types;

pub use cast::*;
pub use framebuffer::*;
pub use render::*;
pub use types::*;
