use crate::core::client::ApiClient;
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::{RawResponse, Transport};
use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// Recurring cash-flow entries. Income (`/income`) and fixed expenses
/// (`/expenses`) share the same route layout.
pub struct EntriesApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
    collection: &'static str,
}

impl<'a, T: Transport> EntriesApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>, collection: &'static str) -> Self {
        EntriesApi { client, collection }
    }

    fn item(&self, id: impl Display) -> String {
        format!("{}/{}", self.collection, id)
    }

    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get_json(self.collection).await
    }

    pub async fn get_active(&self) -> ApiResult<Value> {
        self.client.get_json(&self.item("active")).await
    }

    pub async fn get_by_id(&self, id: impl Display) -> ApiResult<Value> {
        self.client.get_json(&self.item(id)).await
    }

    pub async fn add<R: Serialize + ?Sized>(&self, record: &R) -> ApiResult<Value> {
        self.client.send_json(Method::POST, self.collection, record).await
    }

    pub async fn update<R: Serialize + ?Sized>(&self, id: impl Display, record: &R) -> ApiResult<Value> {
        self.client.send_json(Method::PUT, &self.item(id), record).await
    }

    pub async fn delete(&self, id: impl Display) -> ApiResult<RawResponse> {
        self.client.delete(&self.item(id)).await
    }

    pub async fn get_monthly_total(&self) -> ApiResult<Value> {
        self.client.get_json(&self.item("monthly-total")).await
    }
}
