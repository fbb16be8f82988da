pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::client::ApiClient;
pub use crate::core::display::{DisplayUtils, Locale, format_date, format_money};
pub use crate::core::errors::{ApiError, ApiResult};
pub use crate::infrastructure::transport::http_client::HttpTransport;
pub use crate::infrastructure::transport::in_memory::InMemoryTransport;
pub use crate::infrastructure::transport::{RawResponse, Transport};

#[cfg(test)]
mod tests;
