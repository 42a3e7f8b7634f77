//! Clear and predict actions, plus the export bookkeeping shared by every
//! mutating operation.

use super::{DigitPad, PredictionFetch};
use crate::api::ApiResult;
use crate::types::Prediction;
use gpui::Context;
use tracing::error;

impl DigitPad {
    /// Re-export the bitmap and drop any stale displayed result. Called
    /// after every mutating surface operation; the whole bitmap is
    /// re-encoded each time, no dirty tracking.
    pub fn drawing_changed(&mut self, cx: &mut Context<Self>) {
        match self.canvas.surface.export() {
            Ok(image) => self.canvas.current_export = Some(image),
            Err(e) => error!("surface export failed: {e}"),
        }

        // A drawing change invalidates the displayed prediction or error.
        // An in-flight request is left to finish; its response replaces the
        // state on arrival.
        if !self.fetch.is_loading() {
            self.fetch = PredictionFetch::Waiting;
        }
        cx.notify();
    }

    /// Reset the surface to blank, discarding strokes, the displayed
    /// result, and any error.
    pub fn clear_canvas(&mut self, cx: &mut Context<Self>) {
        self.canvas.surface.reset();
        self.canvas.segments.clear();
        self.canvas.stroke.pen_up();
        self.fetch = PredictionFetch::Waiting;
        self.drawing_changed(cx);
    }

    /// Predict is available when something has been drawn and no request
    /// is already in flight.
    pub fn can_predict(&self) -> bool {
        self.canvas.has_drawing() && !self.fetch.is_loading()
    }

    /// Kick off a health-gated prediction on the background executor. The
    /// UI thread never blocks; the response is applied back on it.
    pub fn start_prediction(&mut self, cx: &mut Context<Self>) {
        if !self.can_predict() {
            return;
        }
        let Some(image) = self.canvas.current_export.clone() else {
            return;
        };

        self.fetch = PredictionFetch::Loading;
        cx.notify();

        let client = self.client.clone();
        let request = cx
            .background_executor()
            .spawn(async move { client.classify(&image) });

        cx.spawn(async move |this, cx| {
            let result = request.await;
            this.update(cx, |pad, cx| pad.finish_prediction(result, cx))
                .ok();
        })
        .detach();
    }

    fn finish_prediction(&mut self, result: ApiResult<Prediction>, cx: &mut Context<Self>) {
        self.fetch = match result {
            Ok(prediction) => PredictionFetch::Ready(prediction),
            Err(e) => {
                error!("prediction failed: {e}");
                PredictionFetch::Failed(e.to_string())
            }
        };
        cx.notify();
    }
}
