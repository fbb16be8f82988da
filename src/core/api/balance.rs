use crate::core::client::ApiClient;
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::Transport;
use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// `/balance` endpoints: a single current value plus its append-only history.
pub struct BalanceApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> BalanceApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        BalanceApi { client }
    }

    pub async fn get_current(&self) -> ApiResult<Value> {
        self.client.get_json("/balance/current").await
    }

    /// Sets a new balance; the backend appends a history entry and returns it.
    pub async fn update<R: Serialize + ?Sized>(&self, record: &R) -> ApiResult<Value> {
        self.client.send_json(Method::POST, "/balance/update", record).await
    }

    pub async fn get_history(&self) -> ApiResult<Value> {
        self.client.get_json("/balance/history").await
    }

    pub async fn get_history_by_type(&self, change_type: impl Display) -> ApiResult<Value> {
        self.client
            .get_json(&format!("/balance/history/type/{}", change_type))
            .await
    }
}
