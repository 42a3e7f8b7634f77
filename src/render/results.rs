//! Results panel - predicted digit, confidence badge, probability bars.

use crate::app::PredictionFetch;
use crate::constants::{
    CARD_PADDING, CARD_RADIUS, DIGIT_CLASSES, PROBABILITY_BAR_HEIGHT, PROBABILITY_BAR_WIDTH,
};
use gpui::prelude::FluentBuilder;
use gpui::*;

use super::pad::palette;

pub fn render_results(fetch: &PredictionFetch) -> Div {
    div()
        .flex()
        .flex_col()
        .items_center()
        .gap(px(16.0))
        .p(px(CARD_PADDING))
        .min_w(px(280.0))
        .bg(palette::card_bg())
        .border_1()
        .border_color(palette::card_border())
        .rounded(px(CARD_RADIUS))
        .child(render_headline(fetch))
        .child(render_status_badge(fetch))
        .child(render_probability_grid(fetch))
        .when_some(fetch.error(), |this, message| {
            this.child(render_error_card(message))
        })
}

/// The big digit: `?` before the first request, `...` while loading,
/// `!` on failure.
fn render_headline(fetch: &PredictionFetch) -> Div {
    let (glyph, color) = match fetch {
        PredictionFetch::Waiting => ("?".to_string(), palette::muted_text()),
        PredictionFetch::Loading => ("...".to_string(), palette::muted_text()),
        PredictionFetch::Ready(prediction) => {
            (prediction.predicted_digit.to_string(), palette::accent())
        }
        PredictionFetch::Failed(_) => ("!".to_string(), palette::danger()),
    };

    div()
        .text_size(px(64.0))
        .font_weight(FontWeight::BOLD)
        .text_color(color)
        .child(glyph)
}

fn render_status_badge(fetch: &PredictionFetch) -> Div {
    let (label, color) = match fetch {
        PredictionFetch::Waiting => ("Waiting for input".to_string(), palette::muted_text()),
        PredictionFetch::Loading => ("Analyzing...".to_string(), palette::muted_text()),
        PredictionFetch::Ready(prediction) => (
            format!("Confidence: {:.1}%", prediction.confidence_percent()),
            palette::accent(),
        ),
        PredictionFetch::Failed(_) => ("Error occurred".to_string(), palette::danger()),
    };

    div()
        .px(px(10.0))
        .py(px(3.0))
        .rounded(px(12.0))
        .border_1()
        .border_color(color)
        .text_size(px(12.0))
        .text_color(color)
        .child(label)
}

/// One row per digit class. Bars read zero until a prediction is ready;
/// the predicted digit's row is highlighted.
fn render_probability_grid(fetch: &PredictionFetch) -> Div {
    let prediction = fetch.prediction();

    div()
        .flex()
        .flex_col()
        .gap(px(4.0))
        .children((0..DIGIT_CLASSES).map(|digit| {
            let probability = prediction
                .map(|p| p.probability_of(digit))
                .unwrap_or(0.0)
                .clamp(0.0, 1.0);
            let highlighted = prediction.is_some_and(|p| p.predicted_digit as usize == digit);
            let bar_color = if highlighted {
                palette::accent()
            } else {
                palette::muted_text()
            };

            div()
                .flex()
                .items_center()
                .gap(px(10.0))
                .child(
                    div()
                        .w(px(14.0))
                        .text_size(px(13.0))
                        .when(highlighted, |this| this.font_weight(FontWeight::BOLD))
                        .text_color(if highlighted {
                            palette::accent()
                        } else {
                            palette::text()
                        })
                        .child(digit.to_string()),
                )
                .child(
                    div()
                        .w(px(PROBABILITY_BAR_WIDTH))
                        .h(px(PROBABILITY_BAR_HEIGHT))
                        .rounded(px(PROBABILITY_BAR_HEIGHT / 2.0))
                        .bg(palette::card_border())
                        .child(
                            div()
                                .w(px(PROBABILITY_BAR_WIDTH * probability))
                                .h_full()
                                .rounded(px(PROBABILITY_BAR_HEIGHT / 2.0))
                                .bg(bar_color),
                        ),
                )
                .child(
                    div()
                        .text_size(px(11.0))
                        .text_color(palette::muted_text())
                        .child(format!("{}%", (probability * 100.0).round() as u32)),
                )
        }))
}

fn render_error_card(message: &str) -> Div {
    div()
        .max_w(px(260.0))
        .p(px(10.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(palette::danger())
        .text_size(px(12.0))
        .text_color(palette::danger())
        .child(message.to_string())
}
