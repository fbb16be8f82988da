use crate::core::client::ApiClient;
use crate::core::errors::ApiResult;
use crate::infrastructure::transport::Transport;
use serde_json::Value;

pub struct DashboardApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> DashboardApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        DashboardApi { client }
    }

    pub async fn get_data(&self) -> ApiResult<Value> {
        self.client.get_json("/dashboard").await
    }

    pub async fn get_overview(&self) -> ApiResult<Value> {
        self.client.get_json("/dashboard/overview").await
    }
}
