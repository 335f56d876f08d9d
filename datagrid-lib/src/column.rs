//! Column descriptors and rendered cell values.

use std::fmt;
use std::sync::Arc;

use crate::model::Value;
use crate::render;

/// Visual treatment of a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStyle {
    /// Plain text.
    #[default]
    Plain,
    /// Emphasised text, e.g. a row's primary label.
    Emphasis,
    /// A short tag shown as a badge.
    Badge,
    /// A number, shown with tabular digits.
    Numeric,
    /// A date or time.
    Timestamp,
}

/// The display form of one cell, produced by a column's renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayValue {
    pub text: String,
    pub style: CellStyle,
}

impl DisplayValue {
    /// Plain text cell.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::Plain)
    }

    /// Cell with an explicit style.
    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Cell renderer: turns a field value into its display form.
pub type Renderer = Arc<dyn Fn(&Value) -> DisplayValue + Send + Sync>;

/// Column definition.
///
/// A column names the row field it shows, the header label, whether the
/// header toggles sorting, and how cells render.
///
/// # Examples
///
/// ```
/// use datagrid_lib::{Column, render};
///
/// let columns = vec![
///     Column::new("email", "Email").render(render::emphasis),
///     Column::new("mrr", "MRR").render(render::currency),
///     Column::new("notes", "Notes").unsortable(),
/// ];
/// assert!(!columns[2].sortable);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Row field this column reads.
    pub field: String,
    /// Header label.
    pub label: String,
    /// Whether the header toggles sorting.
    pub sortable: bool,
    renderer: Renderer,
}

impl Column {
    /// Create a sortable column with the plain text renderer.
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            sortable: true,
            renderer: Arc::new(render::text),
        }
    }

    /// Make the column ignore sort commands.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Set the cell renderer.
    pub fn render<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Value) -> DisplayValue + Send + Sync + 'static,
    {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Render one value of this column. A missing field renders as `Null`.
    pub fn render_value(&self, value: Option<&Value>) -> DisplayValue {
        (self.renderer)(value.unwrap_or(&Value::Null))
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}
