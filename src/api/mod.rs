//! HTTP client for the external digit classifier service.
//!
//! The service exposes two endpoints: `GET /health` reporting whether the
//! model is loaded, and `POST /predict` mapping a base64 PNG to a digit
//! probability distribution. The client is blocking and performs exactly one
//! request/response round trip per call; retries and caching are the
//! caller's concern (and nobody's, at this scale).
//!
//! ## Modules
//!
//! - `client` - The `PredictionClient` itself
//! - `error` - The `ApiError` taxonomy surfaced to the UI

mod client;
mod error;

pub use client::PredictionClient;
pub use error::{ApiError, ApiResult};
