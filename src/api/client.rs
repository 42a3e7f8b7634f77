//! The blocking classifier client.

use super::{ApiError, ApiResult};
use crate::constants::{API_URL_ENV, DEFAULT_API_URL, REQUEST_TIMEOUT_SECS};
use crate::raster::EncodedImage;
use crate::types::{ErrorDetail, HealthStatus, PredictRequest, Prediction};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the digit classifier service.
///
/// One instance per session; the underlying agent reuses connections across
/// calls but every operation is a single round trip with no retries.
pub struct PredictionClient {
    agent: ureq::Agent,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self { agent, base_url }
    }

    /// Build a client from `DIGITPAD_API_URL`, falling back to the local
    /// default when unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        info!(url = %base_url, "classifier endpoint configured");
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health` - reports service status and whether the model is loaded.
    pub fn check_health(&self) -> ApiResult<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        debug!(%url, "checking classifier health");
        let response = self.agent.get(&url).call().map_err(|e| self.map_error(e))?;
        let health: HealthStatus = response.into_json()?;
        debug!(status = %health.status, model_loaded = health.model_loaded, "health response");
        Ok(health)
    }

    /// `POST /predict` - classify an exported drawing.
    ///
    /// Only the raw base64 payload is transmitted; any data-URL prefix on
    /// the encoded image is stripped here.
    pub fn predict(&self, image: &EncodedImage) -> ApiResult<Prediction> {
        let url = format!("{}/predict", self.base_url);
        let body = PredictRequest {
            image: image.payload().to_string(),
        };
        debug!(%url, payload_bytes = body.image.len(), "requesting prediction");

        let response = self
            .agent
            .post(&url)
            .send_json(&body)
            .map_err(|e| self.map_error(e))?;
        let prediction: Prediction = response.into_json()?;

        if !prediction.is_well_formed() {
            warn!(
                classes = prediction.probabilities.len(),
                "classifier returned an unexpected probability vector"
            );
        }
        info!(
            digit = prediction.predicted_digit,
            confidence = prediction.confidence,
            "prediction received"
        );
        Ok(prediction)
    }

    /// Health-gated prediction: checks `GET /health` first and fails with
    /// [`ApiError::ModelNotReady`] before any predict request when the model
    /// is not loaded.
    pub fn classify(&self, image: &EncodedImage) -> ApiResult<Prediction> {
        let health = self.check_health()?;
        if !health.model_loaded {
            return Err(ApiError::ModelNotReady);
        }
        self.predict(image)
    }

    /// Map ureq failures onto the crate taxonomy. Non-success responses
    /// surface the service's `detail` message verbatim when the body parses,
    /// else a generic status line.
    fn map_error(&self, error: ureq::Error) -> ApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let fallback = format!("HTTP {}: {}", status, response.status_text());
                let detail = response
                    .into_json::<ErrorDetail>()
                    .map(|body| body.detail)
                    .unwrap_or(fallback);
                ApiError::RequestRejected { status, detail }
            }
            ureq::Error::Transport(transport) => ApiError::ServiceUnavailable {
                url: self.base_url.clone(),
                source: Box::new(transport),
            },
        }
    }
}
