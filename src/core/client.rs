use crate::core::api::{
    balance::BalanceApi, calendar::CalendarApi, dashboard::DashboardApi, debt_snapshot::DebtSnapshotApi,
    entries::EntriesApi, forecast::ForecastApi, loans::LoansApi, payment_records::PaymentRecordsApi,
    salary_cycle::SalaryCycleApi, schedules::SchedulesApi, system::SystemApi,
};
use crate::core::errors::{ApiError, ApiResult};
use crate::infrastructure::transport::{RawResponse, Transport};
use http::{Method, Request, header};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;
use uuid::Uuid;

const API_PREFIX: &str = "/api";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Entry point to the finance backend. Each endpoint family is reached
/// through an accessor such as [`ApiClient::loans`].
pub struct ApiClient<T: Transport> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// `origin` is scheme, host and port, e.g. `http://localhost:8080`.
    pub fn new(origin: &str, transport: T) -> Self {
        ApiClient {
            base_url: format!("{}{}", origin.trim_end_matches('/'), API_PREFIX),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn loans(&self) -> LoansApi<'_, T> {
        LoansApi::new(self)
    }

    pub fn income(&self) -> EntriesApi<'_, T> {
        EntriesApi::new(self, "/income")
    }

    pub fn expenses(&self) -> EntriesApi<'_, T> {
        EntriesApi::new(self, "/expenses")
    }

    pub fn balance(&self) -> BalanceApi<'_, T> {
        BalanceApi::new(self)
    }

    pub fn dashboard(&self) -> DashboardApi<'_, T> {
        DashboardApi::new(self)
    }

    pub fn forecast(&self) -> ForecastApi<'_, T> {
        ForecastApi::new(self)
    }

    pub fn calendar(&self) -> CalendarApi<'_, T> {
        CalendarApi::new(self)
    }

    pub fn debt_snapshot(&self) -> DebtSnapshotApi<'_, T> {
        DebtSnapshotApi::new(self)
    }

    pub fn payment_records(&self) -> PaymentRecordsApi<'_, T> {
        PaymentRecordsApi::new(self)
    }

    pub fn schedules(&self) -> SchedulesApi<'_, T> {
        SchedulesApi::new(self)
    }

    pub fn salary_cycle(&self) -> SalaryCycleApi<'_, T> {
        SalaryCycleApi::new(self)
    }

    pub fn system(&self) -> SystemApi<'_, T> {
        SystemApi::new(self)
    }

    pub(crate) async fn get_json(&self, path: &str) -> ApiResult<Value> {
        self.execute(Method::GET, path, Vec::new()).await?.json()
    }

    pub(crate) async fn send_json<B>(&self, method: Method, path: &str, record: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_raw(method, path, record).await?.json()
    }

    pub(crate) async fn send_raw<B>(&self, method: Method, path: &str, record: &B) -> ApiResult<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(record).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(method, path, body).await
    }

    /// POST with no body, for action endpoints that take their input from the path or query.
    pub(crate) async fn post_json(&self, path: &str) -> ApiResult<Value> {
        self.execute(Method::POST, path, Vec::new()).await?.json()
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<RawResponse> {
        self.execute(Method::DELETE, path, Vec::new()).await
    }

    async fn execute(&self, method: Method, path: &str, body: Vec<u8>) -> ApiResult<RawResponse> {
        let url = request_url(&self.base_url, path)?;
        let request_id = Uuid::new_v4();
        debug!(%request_id, %method, %url, body_len = body.len(), "sending request");

        let mut builder = Request::builder().method(method.clone()).uri(url.as_str());
        if method == Method::POST || method == Method::PUT {
            builder = builder.header(header::CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        let request = builder.body(body)?;

        let response = RawResponse::from(self.transport.send(request).await?);
        trace!(%request_id, status = response.status().as_u16(), "response received");
        Ok(response)
    }
}

/// Joins base and path, percent-encoding characters a URI cannot carry
/// (spaces, quotes, non-ASCII) the way a browser does. `/`, `?` and `#` keep their meaning.
fn request_url(base_url: &str, path: &str) -> ApiResult<Url> {
    let raw = format!("{}{}", base_url, path);
    Url::parse(&raw).map_err(|e| ApiError::InvalidRequest(format!("{}: {}", e, raw)))
}

/// Appends `key=value` pairs to a path. Values are inserted as given.
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}
