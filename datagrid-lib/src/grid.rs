//! The grid controller: owns the view state and re-derives the view after
//! every command.

use std::sync::Arc;

use log::debug;

use crate::column::Column;
use crate::config::GridConfig;
use crate::model::GridRow;
use crate::pipeline;
use crate::state::Direction;
use crate::state::SortState;
use crate::state::ViewState;
use crate::view::DerivedView;

/// An in-memory data grid over rows of type `R`.
///
/// The grid holds a column registry, the rows, and the user's [`ViewState`].
/// Every command mutates only the view state, then recomputes the whole
/// filter → sort → paginate pipeline and returns the new [`DerivedView`].
/// Commands never fail: out-of-range requests are clamped or ignored.
///
/// Mutation goes through `&mut self`, so one owner drives the grid at a
/// time. Views are snapshots that can be cloned and shared with readers.
///
/// # Example
///
/// ```
/// use datagrid_lib::{Column, DataGrid, Direction};
/// use datagrid_lib::model::Record;
///
/// let rows = vec![
///     Record::new().set("email", "b@example.com").set("mrr", 80i64),
///     Record::new().set("email", "a@example.com").set("mrr", 120i64),
///     Record::new().set("email", "c@test.org").set("mrr", 40i64),
/// ];
/// let columns = vec![Column::new("email", "Email"), Column::new("mrr", "MRR")];
/// let mut grid = DataGrid::new(columns, rows);
///
/// grid.set_query("example");
/// let view = grid.toggle_sort("mrr");
/// assert_eq!(view.total_filtered_count(), 2);
/// assert_eq!(view.headers()[1].sorted, Some(Direction::Ascending));
///
/// let mrr: Vec<_> = view
///     .visible_rows()
///     .map(|row| row.get_int("mrr").unwrap())
///     .collect();
/// assert_eq!(mrr, vec![Some(80), Some(120)]);
/// ```
#[derive(Debug)]
pub struct DataGrid<R> {
    config: GridConfig,
    columns: Arc<[Column]>,
    rows: Arc<[R]>,
    state: ViewState,
    view: DerivedView<R>,
}

impl<R: GridRow> DataGrid<R> {
    /// Creates a grid with the default configuration.
    pub fn new(columns: Vec<Column>, rows: Vec<R>) -> Self {
        Self::with_config(columns, rows, GridConfig::default())
    }

    /// Creates a grid with an explicit configuration.
    pub fn with_config(columns: Vec<Column>, rows: Vec<R>, config: GridConfig) -> Self {
        let columns: Arc<[Column]> = columns.into();
        let rows: Arc<[R]> = rows.into();
        let mut state = config.initial_state();
        let view = derive_view(&rows, &columns, &mut state);

        Self {
            config,
            columns,
            rows,
            state,
            view,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The most recently derived view.
    pub fn view(&self) -> &DerivedView<R> {
        &self.view
    }

    /// The current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The column registry.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up the column showing `field`.
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.field == field)
    }

    /// The full, unfiltered rows.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The configuration used for fresh view state.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Replaces the search query.
    ///
    /// The current page is kept if it still exists in the new result,
    /// otherwise the view returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) -> &DerivedView<R> {
        let query = query.into();
        debug!("grid query set to {:?}", query);
        self.state.query = query;
        self.refresh()
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Advances the header sort cycle of `field`:
    /// unsorted → ascending → descending → unsorted.
    ///
    /// Starting on another column replaces the previous sort. Fields without
    /// a sortable column are ignored.
    pub fn toggle_sort(&mut self, field: &str) -> &DerivedView<R> {
        if !self.is_sortable(field) {
            debug!("ignoring sort toggle on non-sortable field {:?}", field);
            return &self.view;
        }

        self.state.sort = SortState::toggled(self.state.sort.as_ref(), field);
        debug!("grid sort toggled to {:?}", self.state.sort);
        self.refresh()
    }

    /// Sorts by `field` in the given direction, replacing any previous sort.
    /// Fields without a sortable column are ignored.
    pub fn set_sort(&mut self, field: &str, direction: Direction) -> &DerivedView<R> {
        if !self.is_sortable(field) {
            debug!("ignoring sort on non-sortable field {:?}", field);
            return &self.view;
        }

        self.state.sort = Some(SortState {
            field: field.to_string(),
            direction,
        });
        debug!("grid sort set to {:?}", self.state.sort);
        self.refresh()
    }

    /// Returns rows to their filtered input order.
    pub fn clear_sort(&mut self) -> &DerivedView<R> {
        if self.state.sort.take().is_some() {
            debug!("grid sort cleared");
        }
        self.refresh()
    }

    fn is_sortable(&self, field: &str) -> bool {
        self.column(field).is_some_and(|column| column.sortable)
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Moves to the next page. No-op on the last page.
    pub fn next_page(&mut self) -> &DerivedView<R> {
        if !self.view.can_go_next() {
            return &self.view;
        }
        self.state.page_index += 1;
        debug!("grid moved to page {}", self.state.page_index);
        self.refresh()
    }

    /// Moves to the previous page. No-op on the first page.
    pub fn previous_page(&mut self) -> &DerivedView<R> {
        if !self.view.can_go_prev() {
            return &self.view;
        }
        self.state.page_index -= 1;
        debug!("grid moved to page {}", self.state.page_index);
        self.refresh()
    }

    /// Jumps to `page_index`, clamped to the last page.
    pub fn go_to_page(&mut self, page_index: usize) -> &DerivedView<R> {
        let last = self.view.page_count() - 1;
        self.state.page_index = page_index.min(last);
        debug!("grid moved to page {}", self.state.page_index);
        self.refresh()
    }

    /// Changes the number of rows per page. Zero is raised to 1.
    pub fn set_page_size(&mut self, page_size: usize) -> &DerivedView<R> {
        self.state.page_size = page_size.max(1);
        debug!("grid page size set to {}", self.state.page_size);
        self.refresh()
    }

    // =========================================================================
    // Data
    // =========================================================================

    /// Replaces the rows of the current dataset, keeping the view state.
    pub fn set_rows(&mut self, rows: Vec<R>) -> &DerivedView<R> {
        debug!("grid rows refreshed: {} -> {}", self.rows.len(), rows.len());
        self.rows = rows.into();
        self.refresh()
    }

    /// Swaps in a different dataset and resets the view state to defaults.
    pub fn replace_dataset(&mut self, columns: Vec<Column>, rows: Vec<R>) -> &DerivedView<R> {
        debug!(
            "grid dataset replaced: {} columns, {} rows",
            columns.len(),
            rows.len()
        );
        self.columns = columns.into();
        self.rows = rows.into();
        self.state = self.config.initial_state();
        self.refresh()
    }

    /// Re-runs the pipeline and stores the new view.
    fn refresh(&mut self) -> &DerivedView<R> {
        self.view = derive_view(&self.rows, &self.columns, &mut self.state);
        &self.view
    }
}

/// Runs the pipeline for `state`, sending its page index back to the first
/// page if the result no longer has the current one.
fn derive_view<R: GridRow>(
    rows: &Arc<[R]>,
    columns: &Arc<[Column]>,
    state: &mut ViewState,
) -> DerivedView<R> {
    let mut derivation = pipeline::derive(rows, state);

    let page_index = pipeline::revalidate_page_index(
        state.page_index,
        derivation.total_filtered_count,
        state.page_size,
    );
    if page_index != state.page_index {
        debug!(
            "page {} no longer exists ({} pages), returning to page {}",
            state.page_index, derivation.window.page_count, page_index
        );
        state.page_index = page_index;
        derivation = pipeline::derive(rows, state);
    }

    DerivedView::new(Arc::clone(rows), Arc::clone(columns), state, derivation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn grid(n: i64) -> DataGrid<Record> {
        let rows = (0..n)
            .map(|i| Record::new().set("n", i).set("label", format!("row {}", i)))
            .collect();
        DataGrid::new(
            vec![Column::new("n", "N"), Column::new("label", "Label").unsortable()],
            rows,
        )
    }

    #[test]
    fn test_initial_view() {
        let grid = grid(25);
        let view = grid.view();
        assert_eq!(view.page_count(), 3);
        assert_eq!(view.visible_indices(), &(0..10).collect::<Vec<_>>()[..]);
        assert!(!view.can_go_prev());
        assert!(view.can_go_next());
    }

    #[test]
    fn test_unsortable_column_is_ignored() {
        let mut grid = grid(5);
        grid.toggle_sort("label");
        assert_eq!(grid.state().sort, None);

        grid.set_sort("label", Direction::Descending);
        assert_eq!(grid.state().sort, None);

        grid.toggle_sort("no_such_field");
        assert_eq!(grid.state().sort, None);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut grid = grid(25);
        assert_eq!(grid.go_to_page(99).page_index(), 2);
        assert_eq!(grid.go_to_page(1).page_index(), 1);
    }

    #[test]
    fn test_page_size_change_revalidates_index() {
        let mut grid = grid(25);
        grid.go_to_page(2);

        let view = grid.set_page_size(20);
        assert_eq!(view.page_count(), 2);
        assert_eq!(view.page_index(), 0);

        let view = grid.set_page_size(0);
        assert_eq!(view.page_size(), 1);
        assert_eq!(view.page_count(), 25);
    }

    #[test]
    fn test_initial_state_is_revalidated() {
        let config = GridConfig::default().with_page_size(4);
        let grid = DataGrid::with_config(vec![Column::new("n", "N")], Vec::<Record>::new(), config);
        assert_eq!(grid.state().page_index, 0);
        assert_eq!(grid.view().page_label(), "Page 1 of 1");
        assert!(grid.view().is_empty());
    }

    #[test]
    fn test_sort_keeps_page() {
        let mut grid = grid(25);
        grid.next_page();
        let view = grid.set_sort("n", Direction::Descending);
        assert_eq!(view.page_index(), 1);
        assert_eq!(view.visible_indices()[0], 14);

        let view = grid.clear_sort();
        assert_eq!(view.visible_indices()[0], 10);
    }
}
