use crate::core::errors::{ApiError, ApiResult};
use crate::infrastructure::transport::Transport;
use async_trait::async_trait;
use http::{HeaderMap, Method, Request, Response, StatusCode, header};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A request as seen by [`InMemoryTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Path relative to the host, without the query string.
    pub fn path(&self) -> &str {
        let after_scheme = self.uri.split_once("://").map_or(self.uri.as_str(), |(_, rest)| rest);
        let path = after_scheme.find('/').map_or("", |i| &after_scheme[i..]);
        path.split('?').next().unwrap_or(path)
    }

    pub fn query(&self) -> Option<&str> {
        self.uri.split_once('?').map(|(_, q)| q)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(header::CONTENT_TYPE).and_then(|h| h.to_str().ok())
    }

    pub fn body_json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

enum Reply {
    Respond(StatusCode, Vec<u8>),
    Fail(String),
}

/// Records every request and answers from a queue of canned replies.
/// Once the queue is drained each request gets `200` with `{}`.
#[derive(Clone, Default)]
pub struct InMemoryTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_json(&self, status: StatusCode, body: Value) {
        self.push_text(status, &body.to_string()).await;
    }

    pub async fn push_text(&self, status: StatusCode, body: &str) {
        self.replies
            .lock()
            .await
            .push_back(Reply::Respond(status, body.as_bytes().to_vec()));
    }

    pub async fn push_failure(&self, reason: &str) {
        self.replies.lock().await.push_back(Reply::Fail(reason.to_string()));
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().await.last().cloned()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn send(&self, request: Request<Vec<u8>>) -> ApiResult<Response<Vec<u8>>> {
        let (parts, body) = request.into_parts();
        self.requests.lock().await.push(RecordedRequest {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });

        let reply = self.replies.lock().await.pop_front();
        match reply {
            Some(Reply::Respond(status, body)) => Ok(Response::builder().status(status).body(body)?),
            Some(Reply::Fail(reason)) => Err(ApiError::Transport(reason)),
            None => Ok(Response::builder().status(StatusCode::OK).body(b"{}".to_vec())?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_request_splits_uri() {
        let req = RecordedRequest {
            method: Method::GET,
            uri: "http://localhost:8080/api/forecast?months=3".to_string(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        };
        assert_eq!(req.path(), "/api/forecast");
        assert_eq!(req.query(), Some("months=3"));
        assert_eq!(req.body_json(), None);
    }

    #[tokio::test]
    async fn replies_are_consumed_in_order() {
        let transport = InMemoryTransport::new();
        transport.push_text(StatusCode::CREATED, "1").await;
        transport.push_failure("connection reset").await;

        let first = transport
            .send(Request::get("http://h/a").body(Vec::new()).unwrap())
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);
        assert_eq!(first.body(), b"1");

        let second = transport.send(Request::get("http://h/b").body(Vec::new()).unwrap()).await;
        assert_eq!(second.unwrap_err(), ApiError::Transport("connection reset".to_string()));

        let third = transport
            .send(Request::get("http://h/c").body(Vec::new()).unwrap())
            .await
            .unwrap();
        assert_eq!(third.body(), b"{}");
        assert_eq!(transport.requests().await.len(), 3);
    }
}
