//! Window layout, the drawing surface, and the action buttons.

use crate::app::DigitPad;
use crate::constants::{
    BUTTON_HEIGHT, CARD_GAP, CARD_PADDING, CARD_RADIUS, HEADER_HEIGHT, STROKE_WIDTH,
    SURFACE_DISPLAY_SIZE, SURFACE_SIZE,
};
use crate::input::Segment;
use crate::input::coords::{CoordinateMapper, SurfaceGeometry};
use gpui::prelude::FluentBuilder;
use gpui::*;

use super::results::render_results;

/// Fixed palette for the app chrome (the surface itself is always white
/// with black ink, matching the exported bitmap).
pub mod palette {
    use gpui::{Hsla, hsla};

    pub fn window_bg() -> Hsla {
        hsla(222.0 / 360.0, 0.47, 0.11, 1.0)
    }

    pub fn card_bg() -> Hsla {
        hsla(222.0 / 360.0, 0.40, 0.15, 1.0)
    }

    pub fn card_border() -> Hsla {
        hsla(222.0 / 360.0, 0.25, 0.28, 1.0)
    }

    pub fn text() -> Hsla {
        hsla(210.0 / 360.0, 0.30, 0.90, 1.0)
    }

    pub fn muted_text() -> Hsla {
        hsla(215.0 / 360.0, 0.16, 0.62, 1.0)
    }

    pub fn accent() -> Hsla {
        hsla(217.0 / 360.0, 0.85, 0.60, 1.0)
    }

    pub fn danger() -> Hsla {
        hsla(0.0, 0.72, 0.55, 1.0)
    }

    pub fn ink() -> Hsla {
        hsla(0.0, 0.0, 0.0, 1.0)
    }
}

impl Render for DigitPad {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(palette::window_bg())
            .text_color(palette::text())
            // Stroke capture listens at the window level; the coordinate
            // mapper gates samples to the surface bounds.
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .child(render_header())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_start()
                    .justify_center()
                    .gap(px(CARD_GAP))
                    .p(px(CARD_GAP))
                    .child(self.render_drawing_card(cx))
                    .child(render_results(&self.fetch)),
            )
    }
}

fn render_header() -> Div {
    div()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .flex()
        .items_center()
        .justify_center()
        .gap(px(8.0))
        .border_b_1()
        .border_color(palette::card_border())
        .child(
            div()
                .text_size(px(18.0))
                .font_weight(FontWeight::BOLD)
                .child("Digit Classifier"),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(palette::muted_text())
                .child("draw a digit (0-9), then predict"),
        )
}

impl DigitPad {
    fn render_drawing_card(&self, cx: &mut Context<Self>) -> Div {
        let predict_enabled = self.can_predict();
        let predict_label = if self.fetch.is_loading() {
            "Predicting..."
        } else {
            "Predict Digit"
        };

        div()
            .flex()
            .flex_col()
            .gap(px(12.0))
            .p(px(CARD_PADDING))
            .bg(palette::card_bg())
            .border_1()
            .border_color(palette::card_border())
            .rounded(px(CARD_RADIUS))
            .child(self.render_surface(cx))
            .child(
                div()
                    .flex()
                    .gap(px(8.0))
                    .child(
                        render_button("clear-canvas", "Clear Canvas", true)
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.clear_canvas(cx);
                            })),
                    )
                    .child(
                        render_button("predict-digit", predict_label, predict_enabled)
                            .on_click(cx.listener(|this, _, _window, cx| {
                                this.start_prediction(cx);
                            })),
                    ),
            )
    }

    /// The white drawing square. Prepaint captures the element bounds for
    /// the coordinate mapper; paint replays the recorded segments scaled up
    /// to the display size.
    fn render_surface(&self, cx: &mut Context<Self>) -> Div {
        let entity = cx.entity();
        let segments = self.canvas.segments.clone();

        div()
            .w(px(SURFACE_DISPLAY_SIZE))
            .h(px(SURFACE_DISPLAY_SIZE))
            .bg(white())
            .rounded(px(CARD_RADIUS))
            .overflow_hidden()
            .border_2()
            .border_color(palette::card_border())
            .child(
                canvas(
                    move |bounds, _window, cx| {
                        entity.update(cx, |pad, _| pad.canvas.bounds = Some(bounds));
                    },
                    move |bounds, _prepaint, window, _cx| {
                        paint_segments(bounds, window, &segments);
                    },
                )
                .size_full(),
            )
    }
}

fn render_button(id: &'static str, label: &'static str, enabled: bool) -> Stateful<Div> {
    div()
        .id(id)
        .flex_1()
        .h(px(BUTTON_HEIGHT))
        .rounded(px(CARD_RADIUS - 4.0))
        .bg(palette::accent())
        .flex()
        .items_center()
        .justify_center()
        .cursor_pointer()
        .when(!enabled, |this| this.opacity(0.4).cursor_default())
        .when(enabled, |this| {
            this.hover(|style| style.opacity(0.85))
        })
        .child(
            div()
                .text_size(px(13.0))
                .font_weight(FontWeight::MEDIUM)
                .child(label),
        )
}

/// Replay the stroke segments at the on-screen scale. The bitmap is the
/// exported truth; this is only its display projection.
fn paint_segments(bounds: Bounds<Pixels>, window: &mut Window, segments: &[Segment]) {
    if segments.is_empty() {
        return;
    }

    let geometry = SurfaceGeometry::new(bounds, SURFACE_SIZE, SURFACE_SIZE);
    let display_scale = f32::from(bounds.size.width) / geometry.internal_width;
    let stroke_width = px(STROKE_WIDTH * display_scale);

    for segment in segments {
        let from = CoordinateMapper::surface_to_window(segment.from, &geometry);
        let to = CoordinateMapper::surface_to_window(segment.to, &geometry);

        let mut path = PathBuilder::stroke(stroke_width);
        path.move_to(from);
        path.line_to(to);
        if let Ok(built) = path.build() {
            window.paint_path(built, palette::ink());
        }
    }
}
