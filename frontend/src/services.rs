// API service layer for the remote complaints resource
use gloo_net::http::Request;
use railease_shared::DecodeError;
use thiserror::Error;

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("failed to read response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "NETWORK_ERROR",
            ApiError::Status { .. } => "HTTP_ERROR",
            ApiError::Parse(_) => "PARSE_ERROR",
        }
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        ApiError::Parse(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    /// Plain `GET` with no headers or query parameters; returns the body of a
    /// 2xx response.
    pub async fn get_text(url: &str) -> ApiResult<String> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

// ============================================
// COMPLAINTS SERVICE
// ============================================

pub mod complaints {
    use super::*;
    use railease_shared::{ComplaintRecord, decode_complaints};

    /// Fetch the whole collection in one request.
    pub async fn fetch_all(url: &str) -> ApiResult<Vec<ComplaintRecord>> {
        let body = ApiClient::get_text(url).await?;
        Ok(decode_complaints(&body)?)
    }
}
