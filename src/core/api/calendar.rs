use crate::core::client::{ApiClient, with_query};
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::Transport;
use serde_json::Value;

/// Repayment calendar views.
pub struct CalendarApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> CalendarApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        CalendarApi { client }
    }

    pub async fn get_month_summary(&self, year: i32, month: u32) -> ApiResult<Value> {
        let path = with_query(
            "/calendar/summary",
            &[("year", year.to_string()), ("month", month.to_string())],
        );
        self.client.get_json(&path).await
    }

    pub async fn get_day_payments(&self, year: i32, month: u32, day: u32) -> ApiResult<Value> {
        let path = with_query(
            "/calendar/day-payments",
            &[
                ("year", year.to_string()),
                ("month", month.to_string()),
                ("day", day.to_string()),
            ],
        );
        self.client.get_json(&path).await
    }
}
