//! digitpad - a native digit sketch pad with live classification.
//!
//! Captures freehand mouse strokes onto a fixed 280x280 raster surface,
//! re-exports the bitmap as a base64 PNG after every mutation, and sends it
//! on demand to an external MNIST classifier service over HTTP.
//!
//! The crate splits into a headless core - coordinate mapping, stroke
//! capture, rasterization, export, and the prediction client - and a thin
//! gpui view layer on top of it. The core carries all the invariants and
//! all the tests.

pub mod api;
pub mod app;
pub mod constants;
pub mod input;
pub mod raster;
pub mod render;
pub mod types;

pub use app::DigitPad;
