pub mod format;

pub use format::{Amount, CalendarDate, DateValue, format_date, format_money};

use crate::infrastructure::ui::{Cursor, Notifier, UiStatus};
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    EnUs,
}

impl Locale {
    pub fn error_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "错误：",
            Locale::EnUs => "Error: ",
        }
    }

    pub fn success_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "成功：",
            Locale::EnUs => "Success: ",
        }
    }

    pub fn short_date(&self, date: NaiveDate) -> String {
        match self {
            Locale::ZhCn => format!("{}/{}/{}", date.year(), date.month(), date.day()),
            Locale::EnUs => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Ok(Locale::ZhCn),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Formatting plus the page-level side effects: busy cursor and alerts.
/// The cursor and alert sinks are injected so callers can swap them.
pub struct DisplayUtils<U: UiStatus, N: Notifier> {
    locale: Locale,
    status: U,
    notifier: N,
}

impl<U: UiStatus, N: Notifier> DisplayUtils<U, N> {
    pub fn new(locale: Locale, status: U, notifier: N) -> Self {
        DisplayUtils {
            locale,
            status,
            notifier,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format_money<A: Amount + ?Sized>(&self, amount: &A) -> String {
        format_money(amount)
    }

    pub fn format_date<D: DateValue>(&self, date: Option<D>) -> String {
        format_date(date, self.locale)
    }

    pub fn show_loading(&self) {
        self.status.set_cursor(Cursor::Wait);
    }

    pub fn hide_loading(&self) {
        self.status.set_cursor(Cursor::Default);
    }

    pub fn show_error(&self, message: &str) {
        self.notifier
            .alert(&format!("{}{}", self.locale.error_label(), message));
    }

    pub fn show_success(&self, message: &str) {
        self.notifier
            .alert(&format!("{}{}", self.locale.success_label(), message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_common_spellings() {
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::ZhCn));
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::EnUs));
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
