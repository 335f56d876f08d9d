//! The derived view handed to a rendering surface.

use std::sync::Arc;

use crate::column::Column;
use crate::column::DisplayValue;
use crate::model::GridRow;
use crate::pipeline::Derivation;
use crate::state::Direction;
use crate::state::ViewState;

/// Header metadata for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub field: String,
    pub label: String,
    pub sortable: bool,
    /// Direction this column is sorted in, if it is the active sort key.
    pub sorted: Option<Direction>,
}

impl HeaderView {
    /// `↑`, `↓`, or an empty string when the column is not sorted.
    pub fn indicator(&self) -> &'static str {
        self.sorted.map(Direction::indicator).unwrap_or("")
    }
}

/// One page of a grid, ready for display.
///
/// A view is an immutable snapshot: it shares the row storage of the grid
/// that produced it, so it stays valid (and cheap to clone) after the grid
/// moves on to another state.
///
/// # Example
///
/// ```
/// use datagrid_lib::{Column, DataGrid};
/// use datagrid_lib::model::Record;
///
/// let rows = (1..=12).map(|i| Record::new().set("n", i as i64)).collect();
/// let mut grid = DataGrid::new(vec![Column::new("n", "N")], rows);
///
/// let view = grid.next_page().clone();
/// assert_eq!(view.page_label(), "Page 2 of 2");
/// assert_eq!(view.visible_rows().count(), 2);
/// ```
#[derive(Debug)]
pub struct DerivedView<R> {
    rows: Arc<[R]>,
    columns: Arc<[Column]>,
    visible: Vec<usize>,
    headers: Arc<[HeaderView]>,
    total_filtered_count: usize,
    page_index: usize,
    page_size: usize,
    page_count: usize,
    can_go_prev: bool,
    can_go_next: bool,
}

impl<R> Clone for DerivedView<R> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            columns: Arc::clone(&self.columns),
            visible: self.visible.clone(),
            headers: Arc::clone(&self.headers),
            total_filtered_count: self.total_filtered_count,
            page_index: self.page_index,
            page_size: self.page_size,
            page_count: self.page_count,
            can_go_prev: self.can_go_prev,
            can_go_next: self.can_go_next,
        }
    }
}

impl<R: GridRow> DerivedView<R> {
    pub(crate) fn new(
        rows: Arc<[R]>,
        columns: Arc<[Column]>,
        state: &ViewState,
        derivation: Derivation,
    ) -> Self {
        let headers = columns
            .iter()
            .map(|column| HeaderView {
                field: column.field.clone(),
                label: column.label.clone(),
                sortable: column.sortable,
                sorted: state.sorted_direction(&column.field),
            })
            .collect();

        Self {
            rows,
            columns,
            visible: derivation.visible,
            headers,
            total_filtered_count: derivation.total_filtered_count,
            page_index: derivation.window.page_index,
            page_size: state.page_size,
            page_count: derivation.window.page_count,
            can_go_prev: derivation.window.can_go_prev,
            can_go_next: derivation.window.can_go_next,
        }
    }

    /// Renders every visible cell through its column's renderer, row by row.
    pub fn cells(&self) -> Vec<Vec<DisplayValue>> {
        self.visible_rows()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.render_value(row.value(&column.field).as_deref()))
                    .collect()
            })
            .collect()
    }
}

impl<R> DerivedView<R> {
    /// Rows of the current page, in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.visible.iter().map(|&index| &self.rows[index])
    }

    /// Positions of the visible rows in the input row sequence.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Header metadata, one entry per column.
    pub fn headers(&self) -> &[HeaderView] {
        &self.headers
    }

    /// Number of rows matching the query, across all pages.
    pub fn total_filtered_count(&self) -> usize {
        self.total_filtered_count
    }

    /// Number of rows in the dataset before filtering.
    pub fn total_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages, at least 1.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns `true` if there is a previous page.
    pub fn can_go_prev(&self) -> bool {
        self.can_go_prev
    }

    /// Returns `true` if there is a next page.
    pub fn can_go_next(&self) -> bool {
        self.can_go_next
    }

    /// Returns `true` if no row matches the query.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// `"Page N of M"`, one-based. An empty result reads `"Page 1 of 1"`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }

    /// `"K rows"`, where K is the filtered row count.
    pub fn row_count_label(&self) -> String {
        format!("{} rows", self.total_filtered_count)
    }
}
