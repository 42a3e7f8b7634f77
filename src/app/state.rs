//! Application state - the DigitPad struct definition and sub-structs.

use crate::api::PredictionClient;
use crate::constants::SURFACE_SIZE;
use crate::input::coords::SurfaceGeometry;
use crate::input::{Segment, StrokeState};
use crate::raster::{EncodedImage, RasterSurface};
use crate::types::Prediction;
use gpui::{Bounds, Pixels};
use std::sync::Arc;

/// Drawing-side state: the bitmap, the stroke recorder, and the display
/// model painted each frame.
///
/// Everything here is owned by the UI thread; the only data that leaves it
/// is a cloned `EncodedImage` handed to the background request.
pub struct CanvasState {
    /// The session-lived 280x280 bitmap
    pub surface: RasterSurface,
    /// Pen-down/pen-up state machine
    pub stroke: StrokeState,
    /// Segments drawn since the last clear, in surface coordinates.
    /// Repainted (scaled to display size) every frame.
    pub segments: Vec<Segment>,
    /// On-screen bounds of the rendered surface, captured during prepaint.
    /// `None` until the first frame has laid the element out.
    pub bounds: Option<Bounds<Pixels>>,
    /// Export of the current bitmap, refreshed after every mutation
    pub current_export: Option<EncodedImage>,
}

impl CanvasState {
    /// Geometry for coordinate mapping, once the surface has been laid out
    pub fn geometry(&self) -> Option<SurfaceGeometry> {
        self.bounds
            .map(|bounds| SurfaceGeometry::new(bounds, SURFACE_SIZE, SURFACE_SIZE))
    }

    /// True once at least one segment has been drawn since the last clear
    pub fn has_drawing(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Lifecycle of the displayed classification result.
///
/// Exactly one of these is current at any time; a new drawing action or a
/// clear returns to `Waiting`.
#[derive(Debug, Clone)]
pub enum PredictionFetch {
    /// Nothing requested yet, or the drawing changed since the last result
    Waiting,
    /// A request is in flight on the background executor
    Loading,
    /// The classifier answered
    Ready(Prediction),
    /// The request failed; the message is shown to the user
    Failed(String),
}

impl PredictionFetch {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Ready(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Main application state
pub struct DigitPad {
    /// Drawing surface and stroke capture
    pub canvas: CanvasState,
    /// Current classification state
    pub fetch: PredictionFetch,
    /// Classifier client, shared with background request tasks
    pub client: Arc<PredictionClient>,
}
