use crate::core::client::{ApiClient, with_query};
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::Transport;
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt::Display;

/// Per-period repayment schedules (`/schedules`).
pub struct SchedulesApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SchedulesApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        SchedulesApi { client }
    }

    pub async fn get_for_loan(&self, loan_id: impl Display) -> ApiResult<Value> {
        self.client.get_json(&format!("/schedules/loan/{}", loan_id)).await
    }

    pub async fn get_pending_for_loan(&self, loan_id: impl Display) -> ApiResult<Value> {
        self.client
            .get_json(&format!("/schedules/loan/{}/pending", loan_id))
            .await
    }

    pub async fn get_current_month(&self) -> ApiResult<Value> {
        self.client.get_json("/schedules/current-month").await
    }

    pub async fn get_for_month(&self, year: i32, month: u32) -> ApiResult<Value> {
        self.client
            .get_json(&format!("/schedules/month/{}/{}", year, month))
            .await
    }

    /// Marks one scheduled period as paid. Amount and date travel in the query string.
    pub async fn pay(&self, schedule_id: impl Display, amount: f64, payment_date: NaiveDate) -> ApiResult<Value> {
        let path = with_query(
            &format!("/schedules/{}/pay", schedule_id),
            &[
                ("amount", amount.to_string()),
                ("paymentDate", payment_date.format("%Y-%m-%d").to_string()),
            ],
        );
        self.client.post_json(&path).await
    }

    /// Marks every period due today as paid.
    pub async fn mark_today_paid(&self) -> ApiResult<Value> {
        self.client.post_json("/schedules/mark-today-paid").await
    }
}
