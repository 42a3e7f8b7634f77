//! View layer - the drawing card and the results panel.
//!
//! Pure presentation: everything here reads already-computed state off the
//! `DigitPad` entity and paints it. No drawing or classification logic.
//!
//! - `pad` - Window layout, the drawing surface, and the action buttons
//! - `results` - Predicted digit, confidence badge, and probability bars

mod pad;
mod results;

pub use pad::palette;
