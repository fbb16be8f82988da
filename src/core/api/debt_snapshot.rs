use crate::core::client::{ApiClient, with_query};
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::Transport;
use serde_json::Value;

pub const DEFAULT_TREND_DAYS: i64 = 30;
pub const DEFAULT_TREND_MONTHS: i64 = 12;

/// Point-in-time debt totals and their trends.
pub struct DebtSnapshotApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> DebtSnapshotApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        DebtSnapshotApi { client }
    }

    /// Asks the backend to capture a snapshot of today's debt.
    pub async fn create(&self) -> ApiResult<Value> {
        self.client.post_json("/debt-snapshot/create").await
    }

    pub async fn get_daily_trend(&self, days: Option<i64>) -> ApiResult<Value> {
        let days = days.unwrap_or(DEFAULT_TREND_DAYS);
        self.client
            .get_json(&with_query("/debt-snapshot/trend/daily", &[("days", days.to_string())]))
            .await
    }

    pub async fn get_monthly_trend(&self, months: Option<i64>) -> ApiResult<Value> {
        let months = months.unwrap_or(DEFAULT_TREND_MONTHS);
        self.client
            .get_json(&with_query(
                "/debt-snapshot/trend/monthly",
                &[("months", months.to_string())],
            ))
            .await
    }

    pub async fn get_statistics(&self) -> ApiResult<Value> {
        self.client.get_json("/debt-snapshot/statistics").await
    }
}
