use crate::core::client::{ApiClient, with_query};
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::Transport;
use serde_json::Value;

/// Horizon used when the caller passes `None`.
pub const DEFAULT_FORECAST_MONTHS: i64 = 12;

/// `/forecast` endpoints. The horizon is sent as `months=N` with no bounds check.
pub struct ForecastApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ForecastApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        ForecastApi { client }
    }

    fn path(base: &str, months: Option<i64>) -> String {
        let months = months.unwrap_or(DEFAULT_FORECAST_MONTHS);
        with_query(base, &[("months", months.to_string())])
    }

    pub async fn get_cash_flow(&self, months: Option<i64>) -> ApiResult<Value> {
        self.client.get_json(&Self::path("/forecast", months)).await
    }

    pub async fn get_deficit(&self, months: Option<i64>) -> ApiResult<Value> {
        self.client
            .get_json(&Self::path("/forecast/deficit", months))
            .await
    }

    pub async fn get_timeline(&self, months: Option<i64>) -> ApiResult<Value> {
        self.client
            .get_json(&Self::path("/forecast/timeline", months))
            .await
    }
}
