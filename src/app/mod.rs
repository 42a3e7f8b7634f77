//! Application module - the main DigitPad entity and its logic.
//!
//! - `state` - The DigitPad struct definition and sub-structs
//! - `lifecycle` - Initialization
//! - `actions` - Clear and predict actions, export bookkeeping

mod actions;
mod lifecycle;
mod state;

pub use state::{CanvasState, DigitPad, PredictionFetch};
