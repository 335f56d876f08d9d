//! Stock cell renderers.
//!
//! Each function has the [`Renderer`](crate::column::Renderer) signature and
//! can be passed straight to [`Column::render`](crate::Column::render).

use chrono::DateTime;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::column::CellStyle;
use crate::column::DisplayValue;
use crate::model::Value;
use crate::model::types::Money;

/// Text form of the value, unstyled.
pub fn text(value: &Value) -> DisplayValue {
    DisplayValue::plain(value.to_string())
}

/// Text form of the value, emphasised.
pub fn emphasis(value: &Value) -> DisplayValue {
    DisplayValue::styled(value.to_string(), CellStyle::Emphasis)
}

/// Text form of the value, as a badge.
pub fn badge(value: &Value) -> DisplayValue {
    DisplayValue::styled(value.to_string(), CellStyle::Badge)
}

/// Dollar amount with thousands separators (`1234.5` → `$1,234.5`).
///
/// Numeric strings are accepted. Null renders empty; anything else that is
/// not a number falls back to its plain text form.
pub fn currency(value: &Value) -> DisplayValue {
    let amount = match value {
        Value::Null => return DisplayValue::styled("", CellStyle::Numeric),
        Value::Int(n) => Some(Decimal::from(*n)),
        Value::Float(f) => Decimal::from_f64(*f),
        Value::Decimal(d) => Some(*d),
        Value::Money(m) => Some(m.value()),
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    };

    match amount {
        Some(amount) if amount.is_sign_negative() && !amount.is_zero() => DisplayValue::styled(
            format!("-${}", Money::new(amount.abs()).grouped()),
            CellStyle::Numeric,
        ),
        Some(amount) => DisplayValue::styled(
            format!("${}", Money::new(amount).grouped()),
            CellStyle::Numeric,
        ),
        None => text(value),
    }
}

/// Calendar date as `YYYY-MM-DD` (UTC for timestamps).
///
/// Strings holding an RFC 3339 timestamp or a `YYYY-MM-DD` date are parsed.
/// Anything else falls back to its plain text form.
pub fn date(value: &Value) -> DisplayValue {
    let parsed = match value {
        Value::Date(d) => Some(*d),
        Value::DateTime(dt) => Some(dt.date_naive()),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.naive_utc().date())
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
            .ok(),
        _ => None,
    };

    match parsed {
        Some(d) => DisplayValue::styled(d.format("%Y-%m-%d").to_string(), CellStyle::Timestamp),
        None => text(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(currency(&Value::Int(1234)).text, "$1,234");
        assert_eq!(currency(&Value::Float(1234.5)).text, "$1,234.5");
        assert_eq!(currency(&Value::from("2500")).text, "$2,500");
        assert_eq!(currency(&Value::Int(-1500)).text, "-$1,500");
        assert_eq!(currency(&Value::Int(0)).text, "$0");
        assert_eq!(currency(&Value::Int(50)).style, CellStyle::Numeric);
    }

    #[test]
    fn test_currency_fallbacks() {
        assert_eq!(currency(&Value::Null).text, "");
        let cell = currency(&Value::from("n/a"));
        assert_eq!(cell, DisplayValue::plain("n/a"));
    }

    #[test]
    fn test_date() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(date(&Value::Date(d)).text, "2024-02-29");

        let dt = d.and_hms_opt(23, 59, 0).unwrap().and_utc();
        assert_eq!(date(&Value::DateTime(dt)).text, "2024-02-29");

        assert_eq!(date(&Value::from("2024-03-01T01:00:00+02:00")).text, "2024-02-29");
        assert_eq!(date(&Value::from("2024-03-01")).style, CellStyle::Timestamp);
        assert_eq!(date(&Value::from("yesterday")), DisplayValue::plain("yesterday"));
    }

    #[test]
    fn test_styles() {
        assert_eq!(emphasis(&Value::from("a")).style, CellStyle::Emphasis);
        assert_eq!(badge(&Value::from("Pro")).style, CellStyle::Badge);
        assert_eq!(text(&Value::Bool(true)).text, "true");
    }
}
