//! Application lifecycle - initialization.

use super::{CanvasState, DigitPad, PredictionFetch};
use crate::api::PredictionClient;
use crate::input::StrokeState;
use crate::raster::RasterSurface;
use gpui::Context;
use std::sync::Arc;
use tracing::error;

impl DigitPad {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        // The surface is constructed already reset; export it once so the
        // blank state is available downstream from the first frame.
        let surface = RasterSurface::new();
        let current_export = match surface.export() {
            Ok(image) => Some(image),
            Err(e) => {
                error!("initial export failed: {e}");
                None
            }
        };

        Self {
            canvas: CanvasState {
                surface,
                stroke: StrokeState::default(),
                segments: Vec::new(),
                bounds: None,
                current_export,
            },
            fetch: PredictionFetch::Waiting,
            client: Arc::new(PredictionClient::from_env()),
        }
    }
}
