use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize, Clone, PartialEq)]
pub enum ApiError {
    /// The transport could not produce a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON
    #[error("Failed to decode response (status {status}): {message}")]
    Decode { status: u16, message: String },

    /// The record could not be serialized to JSON
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// URL or headers could not be assembled into a request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<http::Error> for ApiError {
    fn from(err: http::Error) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}
