use crate::core::client::ApiClient;
use crate::core::display::{DisplayUtils, Locale};
use crate::infrastructure::transport::http_client::HttpTransport;
use crate::infrastructure::ui::console::{ConsoleNotifier, ConsoleUiStatus};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use tracing::warn;

const DEFAULT_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme, host and port of the backend; `/api` is appended by the client.
    pub api_origin: String,
    pub locale: Locale,
    pub log_level: String,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            api_origin: env::var("LOANS_API_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string()),
            locale: locale_from(env::var("LOANS_LOCALE").ok()),
            log_level: log_level(),
        }
    }

    pub fn api_client(&self) -> ApiClient<HttpTransport> {
        ApiClient::new(&self.api_origin, HttpTransport::new())
    }

    pub fn display(&self) -> DisplayUtils<ConsoleUiStatus, ConsoleNotifier> {
        DisplayUtils::new(self.locale, ConsoleUiStatus, ConsoleNotifier)
    }
}

/// `LOG_LEVEL` filter directive, readable before [`CONFIG`] is forced so
/// the subscriber is in place for warnings raised while loading it.
pub fn log_level() -> String {
    dotenv().ok();
    env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

fn locale_from(value: Option<String>) -> Locale {
    let Some(value) = value else {
        return Locale::default();
    };
    value.parse().unwrap_or_else(|err| {
        warn!("LOANS_LOCALE: {}, falling back to {:?}", err, Locale::default());
        Locale::default()
    })
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_env_value() {
        assert_eq!(locale_from(None), Locale::ZhCn);
        assert_eq!(locale_from(Some("en-US".to_string())), Locale::EnUs);
        assert_eq!(locale_from(Some("zh_CN".to_string())), Locale::ZhCn);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        assert_eq!(locale_from(Some("fr-FR".to_string())), Locale::ZhCn);
    }
}
