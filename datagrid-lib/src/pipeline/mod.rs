//! The derivation pipeline: filter → sort → paginate.
//!
//! Every stage is a pure function over row indices, so the input rows are
//! never copied or mutated. [`derive`] runs the whole chain.

mod filter;
mod paginate;
mod sort;

pub use filter::*;
pub use paginate::*;
pub use sort::*;

use log::trace;

use crate::model::GridRow;
use crate::state::ViewState;

/// Output of one pipeline run, as indices into the input rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// Indices of the rows on the current page, in display order.
    pub visible: Vec<usize>,
    /// Number of rows matching the query.
    pub total_filtered_count: usize,
    /// The page that was sliced.
    pub window: PageWindow,
}

/// Runs filter, sort and pagination for `state` over `rows`.
///
/// The page index in `state` is used as is (clamped to the last page); see
/// [`revalidate_page_index`] for the policy applied when the result shrinks.
pub fn derive<R: GridRow>(rows: &[R], state: &ViewState) -> Derivation {
    let mut indices = filter_indices(rows, &state.query);
    let total_filtered_count = indices.len();
    sort_indices(rows, &mut indices, state.sort.as_ref());

    let window = paginate(total_filtered_count, state.page_index, state.page_size);
    trace!(
        "derived {} of {} rows, page {}/{}",
        total_filtered_count,
        rows.len(),
        window.page_index + 1,
        window.page_count
    );

    let visible = indices[window.range.clone()].to_vec();
    Derivation {
        visible,
        total_filtered_count,
        window,
    }
}
