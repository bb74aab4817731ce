//! Game loop pieces
//!
//! - `Game`: session state (map, pose, flags, message board)
//! - `FrameInput`: one frame of polled input
//! - `FrameLimiter`: fixed frame cadence
//! - `view`: presenting the framebuffer and drawing overlays

mod frame;
mod input;
mod state;
pub mod view;

pub use frame::*;
pub use input::*;
pub use state::*;
