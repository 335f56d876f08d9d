//! Value enum for dynamic field values

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::SecondsFormat;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::types::Money;

/// A dynamic value held by one field of a grid row.
///
/// Every value has a text form (its [`Display`](fmt::Display) output) which is
/// what free-text search matches against and what the default cell renderer
/// shows.
///
/// # Text Form
///
/// | Variant | Text |
/// |---------|------|
/// | `Null` | empty string |
/// | `Bool` | `true` / `false` |
/// | `Int`, `Float`, `Decimal`, `Money` | default numeric formatting |
/// | `String` | verbatim |
/// | `Guid` | hyphenated lowercase |
/// | `Date` | `YYYY-MM-DD` |
/// | `DateTime` | RFC 3339, UTC (`2024-03-01T12:00:00Z`) |
/// | `Json` | compact JSON |
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Value;
///
/// let email = Value::from("user1@example.com");
/// let mrr = Value::from(120i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
///
/// assert_eq!(mrr.to_string(), "120");
/// assert_eq!(active.to_string(), "true");
/// assert_eq!(empty.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// Monetary value.
    Money(Money),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Opaque structured value (nested objects and arrays).
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for values that compare numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) | Value::Money(_)
        )
    }

    /// Returns `true` for values that compare chronologically.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Value::Date(_) | Value::DateTime(_))
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Money(_) => "money",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Json(_) => "json",
        }
    }

    /// Exact decimal form of an integral or decimal value.
    ///
    /// Returns `None` for floats and non-numeric values.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(n) => Some(Decimal::from(*n)),
            Value::Decimal(d) => Some(*d),
            Value::Money(m) => Some(m.value()),
            _ => None,
        }
    }

    /// Lossy floating point form of any numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        use rust_decimal::prelude::ToPrimitive;

        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Decimal(d) => d.to_f64(),
            Value::Money(m) => m.value().to_f64(),
            _ => None,
        }
    }

    /// Instant of a temporal value; dates are taken at midnight UTC.
    ///
    /// Strings holding an RFC 3339 timestamp or a `YYYY-MM-DD` date are read
    /// the same way, so timestamps kept as text still order chronologically.
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            Value::Date(d) => midnight(*d),
            Value::String(s) => parse_timestamp(s).or_else(|| parse_date(s).and_then(midnight)),
            _ => None,
        }
    }

    /// Converts a parsed JSON value.
    ///
    /// Integers become `Int`, other numbers `Float`. Strings holding a UUID,
    /// an RFC 3339 timestamp or a `YYYY-MM-DD` date are parsed into the
    /// matching variant when its text form reproduces the string exactly;
    /// every other string (an offset timestamp, an uppercase UUID) is kept as
    /// is so search sees the source text. Arrays and objects stay opaque.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Json(serde_json::Value::Number(n))
                }
            }
            serde_json::Value::String(s) => from_json_string(s),
            other => Value::Json(other),
        }
    }
}

fn from_json_string(s: String) -> Value {
    let parsed = if let Ok(uuid) = Uuid::parse_str(&s) {
        Value::Guid(uuid)
    } else if let Some(dt) = parse_timestamp(&s) {
        Value::DateTime(dt)
    } else if let Some(date) = parse_date(&s) {
        Value::Date(date)
    } else {
        return Value::String(s);
    };

    if parsed.to_string() == s {
        parsed
    } else {
        Value::String(s)
    }
}

pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Money(m) => write!(f, "{}", m),
            Value::String(s) => f.write_str(s),
            Value::Guid(g) => write!(f, "{}", g),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Json(json) => write!(f, "{}", json),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<Money> for Value {
    fn from(v: Money) -> Self {
        Value::Money(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_form() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Decimal(Decimal::new(1250, 2)).to_string(), "12.50");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::from("Pro").to_string(), "Pro");
        assert_eq!(Value::Null.to_string(), "");

        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2024-03-09");

        let dt = date.and_hms_opt(12, 30, 0).unwrap().and_utc();
        assert_eq!(Value::DateTime(dt).to_string(), "2024-03-09T12:30:00Z");

        let json = serde_json::json!({"tier": "gold"});
        assert_eq!(Value::Json(json).to_string(), r#"{"tier":"gold"}"#);
    }

    #[test]
    fn test_classification() {
        assert!(Value::Int(1).is_numeric());
        assert!(Value::Money(Money::from_int(3)).is_numeric());
        assert!(!Value::from("1").is_numeric());
        assert!(Value::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).is_temporal());
        assert!(!Value::Null.is_temporal());
    }

    #[test]
    fn test_from_json_parses_strings() {
        let value = Value::from_json(serde_json::json!("2024-05-01"));
        assert_eq!(value.type_name(), "date");

        let value = Value::from_json(serde_json::json!("2024-05-01T08:00:00Z"));
        assert_eq!(value.type_name(), "datetime");

        let value = Value::from_json(serde_json::json!("12345678-1234-1234-1234-123456789012"));
        assert_eq!(value.type_name(), "guid");

        let value = Value::from_json(serde_json::json!("Enterprise"));
        assert_eq!(value, Value::from("Enterprise"));
    }

    #[test]
    fn test_from_json_keeps_source_text() {
        let raw = "2024-05-01T08:00:00.000+02:00";
        let value = Value::from_json(serde_json::json!(raw));
        assert_eq!(value, Value::from(raw));
        assert_eq!(value.to_string(), raw);

        let instant = value.as_instant().unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-05-01T06:00:00+00:00");

        let upper = "12345678-1234-1234-1234-1234567890AB";
        assert_eq!(Value::from_json(serde_json::json!(upper)).to_string(), upper);
    }

    #[test]
    fn test_plain_strings_have_no_instant() {
        assert_eq!(Value::from("Enterprise").as_instant(), None);
        assert_eq!(Value::Int(20240101).as_instant(), None);
        assert!(Value::from("2024-01-02").as_instant().is_some());
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from_json(serde_json::json!(42)), Value::Int(42));
        assert_eq!(Value::from_json(serde_json::json!(4.25)), Value::Float(4.25));
        assert_eq!(
            Value::from_json(serde_json::json!([1, 2])).type_name(),
            "json"
        );
    }

    #[test]
    fn test_date_instant_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let instant = Value::Date(date).as_instant().unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-01-02T00:00:00+00:00");
    }
}
