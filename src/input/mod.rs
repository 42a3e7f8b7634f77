//! Mouse input handling for the drawing surface.
//!
//! ## Architecture
//!
//! Stroke capture uses an explicit state machine (`StrokeState`) to track
//! whether the pen is down and where the previous sample landed. This makes
//! impossible states unrepresentable: a "last point" only exists while a
//! stroke is active.
//!
//! ## Modules
//!
//! - `coords` - Coordinate mapping from window space to surface space
//! - `state` - Stroke state machine enum and helper methods
//! - `mouse_down` - Pen-down handling (stroke start)
//! - `mouse_move` - Pen-move handling (segment drawing and re-export)
//! - `mouse_up` - Pen-up and pointer-leave handling (stroke end)

pub mod coords;
mod state;
mod mouse_down;
mod mouse_move;
mod mouse_up;

pub use state::{Segment, StrokeState};
