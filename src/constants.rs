//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Raster Surface
// ============================================================================

/// Internal width and height of the drawing surface in logical pixels.
/// The classifier downsamples to 28x28, so the surface is a 10x multiple.
pub const SURFACE_SIZE: u32 = 280;

/// Stroke width in logical pixels
pub const STROKE_WIDTH: f32 = 8.0;

/// Background luminance (white)
pub const BACKGROUND_LUMA: u8 = 0xff;

/// Stroke luminance (black)
pub const STROKE_LUMA: u8 = 0x00;

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 56.0;

/// On-screen edge length of the drawing surface in pixels.
/// Deliberately larger than `SURFACE_SIZE` so the coordinate mapper's
/// rescale correction is exercised on every sample.
pub const SURFACE_DISPLAY_SIZE: f32 = 420.0;

/// Padding inside the two main cards
pub const CARD_PADDING: f32 = 16.0;

/// Gap between the drawing card and the results card
pub const CARD_GAP: f32 = 24.0;

/// Corner radius for cards and buttons
pub const CARD_RADIUS: f32 = 10.0;

/// Button height
pub const BUTTON_HEIGHT: f32 = 32.0;

/// Width of a probability bar at 100%
pub const PROBABILITY_BAR_WIDTH: f32 = 120.0;

/// Height of a probability bar
pub const PROBABILITY_BAR_HEIGHT: f32 = 8.0;

// ============================================================================
// Classifier Service
// ============================================================================

/// Environment variable overriding the classifier base URL
pub const API_URL_ENV: &str = "DIGITPAD_API_URL";

/// Default classifier base URL when the environment variable is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Transport timeout for a single request/response round trip, in seconds.
/// Bounded waits are a transport property; the call itself is never retried.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of digit classes returned by the classifier
pub const DIGIT_CLASSES: usize = 10;
