//! World module - tile grid maps
//!
//! - Text map format shared by the renderer and the editor
//! - Out-of-bounds cells are solid for both collision and ray casting

mod map_file;
mod tile_map;

pub use map_file::*;
pub use tile_map::*;
