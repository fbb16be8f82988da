use crate::core::client::ApiClient;
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::{RawResponse, Transport};
use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// `/loans` endpoints.
pub struct LoansApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> LoansApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        LoansApi { client }
    }

    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get_json("/loans").await
    }

    pub async fn get_active(&self) -> ApiResult<Value> {
        self.client.get_json("/loans/active").await
    }

    /// The id is placed into the path exactly as it formats.
    pub async fn get_by_id(&self, id: impl Display) -> ApiResult<Value> {
        self.client.get_json(&format!("/loans/{}", id)).await
    }

    pub async fn add<R: Serialize + ?Sized>(&self, record: &R) -> ApiResult<Value> {
        self.client.send_json(Method::POST, "/loans", record).await
    }

    pub async fn update<R: Serialize + ?Sized>(&self, id: impl Display, record: &R) -> ApiResult<Value> {
        self.client
            .send_json(Method::PUT, &format!("/loans/{}", id), record)
            .await
    }

    /// Returns the response untouched; the backend answers with an empty body.
    pub async fn delete(&self, id: impl Display) -> ApiResult<RawResponse> {
        self.client.delete(&format!("/loans/{}", id)).await
    }

    pub async fn record_payment<R: Serialize + ?Sized>(&self, id: impl Display, payment: &R) -> ApiResult<Value> {
        self.client
            .send_json(Method::POST, &format!("/loans/{}/payment", id), payment)
            .await
    }

    pub async fn get_summary(&self) -> ApiResult<Value> {
        self.client.get_json("/loans/summary").await
    }

    /// Loans grouped by lending platform.
    pub async fn get_by_platform(&self) -> ApiResult<Value> {
        self.client.get_json("/loans/by-platform").await
    }

    pub async fn get_platform_summary(&self) -> ApiResult<Value> {
        self.client.get_json("/loans/platform-summary").await
    }

    pub async fn get_payment_history(&self, id: impl Display) -> ApiResult<Value> {
        self.client
            .get_json(&format!("/loans/{}/payment-history", id))
            .await
    }

    pub async fn get_detail(&self, id: impl Display) -> ApiResult<Value> {
        self.client.get_json(&format!("/loans/{}/detail", id)).await
    }
}
