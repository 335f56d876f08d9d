//! Free-text search over every field of a row.

use crate::model::GridRow;

/// Returns `true` if any field's text form contains `query`, ignoring case.
///
/// An empty query matches every row. Matching lower-cases both sides and
/// looks for a plain substring; there is no locale-aware collation and no
/// `field:value` syntax.
///
/// `Null` values have an empty text form, so a query such as `"null"` does
/// not match a missing value. Strings loaded from JSON are searched as they
/// appeared in the source, including timestamps with an offset.
pub fn matches_query<R: GridRow + ?Sized>(row: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_lowered(row, &query.to_lowercase())
}

/// Indices of the rows matching `query`, in input order.
pub fn filter_indices<R: GridRow>(rows: &[R], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matches_lowered(*row, &needle))
        .map(|(index, _)| index)
        .collect()
}

fn matches_lowered<R: GridRow + ?Sized>(row: &R, needle: &str) -> bool {
    row.values()
        .iter()
        .any(|value| value.to_string().to_lowercase().contains(needle))
}
