use thiserror::Error;

/// Failure to turn a complaints response body into records.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("complaints payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of complaints, found {0}")]
    NotAnArray(&'static str),
}
