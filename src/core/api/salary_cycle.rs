use crate::core::client::ApiClient;
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::{RawResponse, Transport};
use http::Method;
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt::Display;

/// Salary-cycle projections, salary settings and one-off transactions.
pub struct SalaryCycleApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SalaryCycleApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        SalaryCycleApi { client }
    }

    pub async fn get_current(&self) -> ApiResult<Value> {
        self.client.get_json("/salary-cycle/current").await
    }

    pub async fn get_future(&self, count: u32) -> ApiResult<Value> {
        self.client
            .get_json(&format!("/salary-cycle/future/{}", count))
            .await
    }

    pub async fn get_salary_day(&self) -> ApiResult<Value> {
        self.client.get_json("/salary-cycle/config/salary-day").await
    }

    /// The backend answers with an empty body, so the raw response is returned.
    pub async fn set_salary_day(&self, day: u32) -> ApiResult<RawResponse> {
        self.client
            .send_raw(Method::PUT, "/salary-cycle/config/salary-day", &json!({ "day": day }))
            .await
    }

    pub async fn get_salary_amount(&self) -> ApiResult<Value> {
        self.client.get_json("/salary-cycle/config/salary-amount").await
    }

    pub async fn set_salary_amount(&self, amount: f64) -> ApiResult<RawResponse> {
        self.client
            .send_raw(
                Method::PUT,
                "/salary-cycle/config/salary-amount",
                &json!({ "amount": amount }),
            )
            .await
    }

    pub async fn get_temp_transactions(&self) -> ApiResult<Value> {
        self.client.get_json("/salary-cycle/temp-transactions").await
    }

    pub async fn add_temp_transaction<R: Serialize + ?Sized>(&self, record: &R) -> ApiResult<Value> {
        self.client
            .send_json(Method::POST, "/salary-cycle/temp-transactions", record)
            .await
    }

    pub async fn delete_temp_transaction(&self, id: impl Display) -> ApiResult<RawResponse> {
        self.client
            .delete(&format!("/salary-cycle/temp-transactions/{}", id))
            .await
    }
}
