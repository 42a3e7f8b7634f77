//! Core types shared across the crate: surface points and the classifier
//! wire types.

use crate::constants::DIGIT_CLASSES;
use serde::{Deserialize, Serialize};

/// A position in surface-internal pixel space.
///
/// Produced by the coordinate mapper; `0 <= x <= width` and `0 <= y <= height`
/// whenever the source device position was inside the rendered bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Response shape of `GET /health` on the classifier service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

/// Request body of `POST /predict`. The `image` field carries the raw base64
/// PNG payload with any data-URL prefix already stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub image: String,
}

/// A classification result: one predicted digit plus the full probability
/// distribution over all ten classes, index i corresponding to digit i.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_digit: u8,
    pub confidence: f32,
    pub probabilities: Vec<f32>,
}

impl Prediction {
    /// Probability for a single digit, zero when the service returned a
    /// short vector.
    pub fn probability_of(&self, digit: usize) -> f32 {
        self.probabilities.get(digit).copied().unwrap_or(0.0)
    }

    /// Confidence as a display percentage, e.g. 92.3
    pub fn confidence_percent(&self) -> f32 {
        self.confidence * 100.0
    }

    /// True when the distribution covers all ten classes and roughly sums
    /// to one. Used to log suspicious responses, never to reject them.
    pub fn is_well_formed(&self) -> bool {
        if self.probabilities.len() != DIGIT_CLASSES {
            return false;
        }
        let sum: f32 = self.probabilities.iter().sum();
        (sum - 1.0).abs() < 0.05
    }
}

/// Error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
