use crate::core::client::ApiClient;
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::Transport;
use serde_json::Value;
use std::fmt::Display;

pub struct PaymentRecordsApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> PaymentRecordsApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        PaymentRecordsApi { client }
    }

    pub async fn get_for_loan(&self, loan_id: impl Display) -> ApiResult<Value> {
        self.client
            .get_json(&format!("/payment-records/loan/{}", loan_id))
            .await
    }

    pub async fn get_current_month(&self) -> ApiResult<Value> {
        self.client.get_json("/payment-records/current-month").await
    }

    pub async fn get_for_month(&self, year: i32, month: u32) -> ApiResult<Value> {
        self.client
            .get_json(&format!("/payment-records/month/{}/{}", year, month))
            .await
    }
}
