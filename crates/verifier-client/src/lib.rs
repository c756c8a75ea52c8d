pub use alloy_primitives;
use reqwest::StatusCode;

mod api;
mod types;

pub use api::VerifierApi;
pub use types::{
    CodeFormat, StatusResponse, VerificationId, VerificationRequest, VerificationStatus,
};

pub type VerifierResult<T> = Result<T, VerifierApiError>;

#[derive(Debug, thiserror::Error)]
pub enum VerifierApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Expected a numeric verification id, got `{body}`")]
    MalformedId { body: String },

    #[error("Malformed status response `{body}`: {source}")]
    MalformedStatus {
        body: String,
        source: serde_json::Error,
    },
}
