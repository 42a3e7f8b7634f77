//! Pen-up handling - stroke end.

use crate::app::DigitPad;
use gpui::{Context, MouseUpEvent, Window};

impl DigitPad {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.canvas.stroke.is_drawing() {
            self.canvas.stroke.pen_up();
            cx.notify();
        }
    }
}
