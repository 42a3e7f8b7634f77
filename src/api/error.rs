//! Error types for classifier requests.
//!
//! Every variant maps to one user-visible failure state; none of them are
//! fatal. A new drawing action clears whichever one is displayed.

use thiserror::Error;

/// Errors that can occur while talking to the classifier service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Health check reported the model as not loaded; no predict request
    /// was issued.
    #[error("Model is not loaded on the backend. Run the model setup script first.")]
    ModelNotReady,

    /// Transport-level failure reaching the service
    #[error(
        "Unable to connect to the prediction server at {url}. \
         Please ensure the classifier backend is running."
    )]
    ServiceUnavailable {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The service answered with a non-success status. `detail` carries the
    /// service-provided message when the body was parseable, else a generic
    /// status line.
    #[error("{detail}")]
    RequestRejected { status: u16, detail: String },

    /// A 2xx response whose body did not match the wire contract
    #[error("Malformed response from the classifier: {0}")]
    MalformedResponse(#[from] std::io::Error),
}

/// Result type alias for classifier operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status carried by the error, when one exists
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
