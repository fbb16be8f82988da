use crate::core::client::{ApiClient, with_query};
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::Transport;
use serde_json::Value;

/// Maintenance actions exposed under `/system`.
pub struct SystemApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SystemApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        SystemApi { client }
    }

    pub async fn get_info(&self) -> ApiResult<Value> {
        self.client.get_json("/system/info").await
    }

    /// Triggers the backend job that advances paid periods on active loans.
    pub async fn update_paid_periods(&self) -> ApiResult<Value> {
        self.client.post_json("/system/update-paid-periods").await
    }

    /// Back-fills payment history for one loan, or for all active loans when `loan_id` is `None`.
    pub async fn generate_payment_history(&self, loan_id: Option<i64>) -> ApiResult<Value> {
        let params: Vec<(&str, String)> = loan_id
            .map(|id| vec![("loanId", id.to_string())])
            .unwrap_or_default();
        self.client
            .post_json(&with_query("/system/generate-payment-history", &params))
            .await
    }
}
