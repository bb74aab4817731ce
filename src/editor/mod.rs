//! Map Editor
//!
//! Click-to-paint grid of walls and floor with a single start marker,
//! saved as the text map the raycaster loads.

mod state;
mod layout;
mod view;

pub use state::*;
pub use layout::*;
pub use view::*;
