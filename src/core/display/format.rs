//! Money and date rendering.
//!
//! Amounts always use `,` for thousands and `.` with exactly two decimals.
//! Dates use the locale's short numeric form.

use crate::core::display::Locale;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

pub const INVALID_DATE: &str = "Invalid Date";

/// Anything that can be coerced to a number for display.
///
/// Text is trimmed; empty text counts as zero and anything unparseable as NaN.
pub trait Amount {
    fn to_amount(&self) -> f64;
}

macro_rules! numeric_amount {
    ($($t:ty),*) => {
        $(impl Amount for $t {
            fn to_amount(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

numeric_amount!(f64, f32, i32, i64, u32, u64, usize);

impl Amount for str {
    fn to_amount(&self) -> f64 {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    }
}

impl Amount for String {
    fn to_amount(&self) -> f64 {
        self.as_str().to_amount()
    }
}

impl Amount for Value {
    fn to_amount(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.to_amount(),
            Value::Array(_) | Value::Object(_) => f64::NAN,
        }
    }
}

impl<A: Amount + ?Sized> Amount for &A {
    fn to_amount(&self) -> f64 {
        (**self).to_amount()
    }
}

/// Formats with thousands grouping and two decimals: `1234.5` becomes `1,234.50`.
pub fn format_money<A: Amount + ?Sized>(amount: &A) -> String {
    let value = amount.to_amount();
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = two_decimals(value.abs());
    let (integer_part, decimal_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, decimal_part)
}

/// Rounds the exact binary value to cents, ties away from zero.
/// Values too large for `Decimal` fall back to `{:.2}`.
fn two_decimals(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{:.2}", value),
    }
}

/// Result of reading a date-like input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDate {
    Empty,
    Invalid,
    Date(NaiveDate),
}

pub trait DateValue {
    fn calendar_date(&self) -> CalendarDate;
}

impl DateValue for NaiveDate {
    fn calendar_date(&self) -> CalendarDate {
        CalendarDate::Date(*self)
    }
}

impl DateValue for NaiveDateTime {
    fn calendar_date(&self) -> CalendarDate {
        CalendarDate::Date(self.date())
    }
}

impl<Tz: TimeZone> DateValue for DateTime<Tz> {
    fn calendar_date(&self) -> CalendarDate {
        CalendarDate::Date(self.date_naive())
    }
}

impl DateValue for str {
    fn calendar_date(&self) -> CalendarDate {
        let text = self.trim();
        if text.is_empty() {
            return CalendarDate::Empty;
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return CalendarDate::Date(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return CalendarDate::Date(dt.date_naive());
        }
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
                return CalendarDate::Date(dt.date());
            }
        }
        CalendarDate::Invalid
    }
}

impl DateValue for String {
    fn calendar_date(&self) -> CalendarDate {
        self.as_str().calendar_date()
    }
}

impl<D: DateValue + ?Sized> DateValue for &D {
    fn calendar_date(&self) -> CalendarDate {
        (**self).calendar_date()
    }
}

/// Short numeric date for the locale. Missing or empty input gives an empty string.
pub fn format_date<D: DateValue>(date: Option<D>, locale: Locale) -> String {
    let Some(date) = date else {
        return String::new();
    };
    match date.calendar_date() {
        CalendarDate::Empty => String::new(),
        CalendarDate::Invalid => INVALID_DATE.to_string(),
        CalendarDate::Date(d) => locale.short_date(d),
    }
}
