//! GridRow trait for types that can be shown by the grid

use std::borrow::Cow;

use super::Value;

/// Trait for records that can be filtered, sorted and paginated by a
/// [`DataGrid`](crate::DataGrid).
///
/// All rows of one dataset are expected to share the same field set. The
/// engine only reads rows; it never mutates them.
///
/// [`Record`](super::Record) implements this for dynamic data. Typed rows
/// implement it by mapping field names to values.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use datagrid_lib::model::{GridRow, Value};
///
/// #[derive(Clone)]
/// struct Invoice {
///     number: String,
///     total: i64,
/// }
///
/// impl GridRow for Invoice {
///     fn value(&self, field: &str) -> Option<Cow<'_, Value>> {
///         match field {
///             "number" => Some(Cow::Owned(Value::from(self.number.as_str()))),
///             "total" => Some(Cow::Owned(Value::from(self.total))),
///             _ => None,
///         }
///     }
///
///     fn values(&self) -> Vec<Cow<'_, Value>> {
///         vec![
///             Cow::Owned(Value::from(self.number.as_str())),
///             Cow::Owned(Value::from(self.total)),
///         ]
///     }
///
///     fn key(&self) -> Option<String> {
///         Some(self.number.clone())
///     }
/// }
/// ```
pub trait GridRow {
    /// Value of the given field, or `None` if the row has no such field.
    fn value(&self, field: &str) -> Option<Cow<'_, Value>>;

    /// Every field value of the row, in any order.
    fn values(&self) -> Vec<Cow<'_, Value>>;

    /// Stable identity for rendering, if the caller has one.
    fn key(&self) -> Option<String> {
        None
    }
}
