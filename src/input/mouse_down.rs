//! Pen-down handling - stroke start.

use crate::app::DigitPad;
use crate::input::coords::CoordinateMapper;
use gpui::{Context, MouseDownEvent, Window};
use tracing::trace;

impl DigitPad {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(geometry) = self.canvas.geometry() else {
            return;
        };
        if !geometry.contains(event.position) {
            return;
        }

        let point = match CoordinateMapper::window_to_surface(event.position, &geometry) {
            Ok(point) => point,
            Err(e) => {
                trace!("dropping pen-down sample: {e}");
                return;
            }
        };

        // Records the point only; a tap with no movement leaves no mark
        self.canvas.stroke.pen_down(point);
        cx.notify();
    }
}
