//! Pen-move handling - segment drawing and re-export.
//!
//! This is the hot path while a stroke is active: every sample draws one
//! segment onto the bitmap and re-exports it. Samples that arrive while the
//! pen is up exit early.

use crate::app::DigitPad;
use crate::input::coords::CoordinateMapper;
use gpui::{Context, MouseMoveEvent, Window};
use tracing::trace;

impl DigitPad {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.canvas.stroke.is_drawing() {
            return;
        }
        let Some(geometry) = self.canvas.geometry() else {
            return;
        };

        // Pointer left the surface: treated as pen-up, no segment drawn
        if !geometry.contains(event.position) {
            self.canvas.stroke.pen_up();
            cx.notify();
            return;
        }

        let point = match CoordinateMapper::window_to_surface(event.position, &geometry) {
            Ok(point) => point,
            Err(e) => {
                trace!("dropping move sample: {e}");
                return;
            }
        };

        if let Some(segment) = self.canvas.stroke.sample(point) {
            self.canvas.surface.draw_segment(segment.from, segment.to);
            self.canvas.segments.push(segment);
            self.drawing_changed(cx);
        }
    }
}
