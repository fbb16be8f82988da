pub mod http_client;
pub mod in_memory;

use crate::core::errors::{ApiError, ApiResult};
use async_trait::async_trait;
use http::{HeaderMap, Request, Response, StatusCode};
use serde_json::Value;

/// Performs one HTTP exchange. Bodies are raw bytes in both directions.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request<Vec<u8>>) -> ApiResult<Response<Vec<u8>>>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: Request<Vec<u8>>) -> ApiResult<Response<Vec<u8>>> {
        (**self).send(request).await
    }
}

/// A response handed back without any JSON parsing. Deletes and other
/// empty-bodied endpoints return this so callers check the status themselves.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> ApiResult<Value> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Decode {
            status: self.status.as_u16(),
            message: e.to_string(),
        })
    }
}

impl From<Response<Vec<u8>>> for RawResponse {
    fn from(response: Response<Vec<u8>>) -> Self {
        let (parts, body) = response.into_parts();
        RawResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}
