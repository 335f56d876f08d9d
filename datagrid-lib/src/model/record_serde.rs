//! JSON (de)serialization for Record.
//!
//! A record maps to a flat JSON object:
//! - Each property becomes one field, converted with [`Value::from_json`]
//!   (integers, floats, booleans, null, UUID/date/timestamp strings).
//! - Nested objects and arrays are kept as opaque [`Value::Json`].
//! - The record key is not part of the object; use the `key_field` argument
//!   of [`records_from_json_str`] to derive it from a property.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;
use crate::error::GridError;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a grid row")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            record.fields.insert(key, Value::from_json(value));
        }
        Ok(record)
    }
}

impl Record {
    /// Parses a single record from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Record, GridError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        record_from_json(0, value)
    }
}

/// Parses a JSON array of objects into records.
///
/// When `key_field` is given, each record's key is taken from that property.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::records_from_json_str;
///
/// let json = r#"[
///     {"id": "usr_1", "email": "user1@example.com", "mrr": 120},
///     {"id": "usr_2", "email": "user2@example.com", "mrr": 80}
/// ]"#;
///
/// let records = records_from_json_str(json, Some("id")).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].key(), Some("usr_2"));
/// ```
pub fn records_from_json_str(json: &str, key_field: Option<&str>) -> Result<Vec<Record>, GridError> {
    let items: Vec<serde_json::Value> = serde_json::from_str(json)?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let mut record = record_from_json(index, item)?;
            if let Some(field) = key_field {
                record.key_from_field(field);
            }
            Ok(record)
        })
        .collect()
}

fn record_from_json(index: usize, json: serde_json::Value) -> Result<Record, GridError> {
    match json {
        serde_json::Value::Object(_) => Ok(serde_json::from_value(json)?),
        other => Err(GridError::NotAnObject {
            index,
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"email": "user1@example.com", "mrr": 120, "active": true, "plan": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get_string("email").unwrap(), Some("user1@example.com"));
        assert_eq!(record.get_int("mrr").unwrap(), Some(120));
        assert_eq!(record.get_bool("active").unwrap(), Some(true));
        assert_eq!(record.get_string("plan").unwrap(), None);
    }

    #[test]
    fn test_deserialize_dates() {
        let json = r#"{"createdAt": "2024-06-01", "seenAt": "2024-06-01T09:15:00Z"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert!(record.get_date("createdAt").unwrap().is_some());
        assert!(record.get_datetime("seenAt").unwrap().is_some());
    }

    #[test]
    fn test_offset_timestamps_keep_source_text() {
        let json = r#"{"seenAt": "2024-05-01T08:00:00.000+02:00"}"#;
        let record = Record::from_json_str(json).unwrap();

        assert_eq!(record.get("seenAt").unwrap().to_string(), "2024-05-01T08:00:00.000+02:00");
        assert_eq!(
            record.get_datetime("seenAt").unwrap().unwrap().to_rfc3339(),
            "2024-05-01T06:00:00+00:00"
        );
    }

    #[test]
    fn test_nested_values_stay_opaque() {
        let json = r#"{"tags": ["a", "b"], "meta": {"source": "import"}}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("tags").unwrap().type_name(), "json");
        assert_eq!(record.get("meta").unwrap().to_string(), r#"{"source":"import"}"#);
    }

    #[test]
    fn test_serialize_fields() {
        let record = Record::new().set("plan", "Pro").set("mrr", 250i64);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"plan\":\"Pro\""));
        assert!(json.contains("\"mrr\":250"));
    }

    #[test]
    fn test_records_rejects_non_objects() {
        let err = records_from_json_str(r#"[{"a": 1}, 7]"#, None).unwrap_err();
        assert!(matches!(
            err,
            GridError::NotAnObject {
                index: 1,
                found: "number"
            }
        ));
    }

    #[test]
    fn test_records_rejects_invalid_json() {
        let err = records_from_json_str("{not json", None).unwrap_err();
        assert!(matches!(err, GridError::Json(_)));
    }

    #[test]
    fn test_from_json_str_single() {
        let record = Record::from_json_str(r#"{"plan": "Free"}"#).unwrap();
        assert_eq!(record.get_string("plan").unwrap(), Some("Free"));

        assert!(Record::from_json_str("[]").is_err());
    }
}
