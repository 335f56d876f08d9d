//! Page slicing and page index bookkeeping.

use std::ops::Range;

/// One page of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based index of this page.
    pub page_index: usize,
    /// Number of displayable pages, never below 1.
    pub page_count: usize,
    /// Positions of this page's rows within the sorted result.
    pub range: Range<usize>,
    /// Whether a previous page exists.
    pub can_go_prev: bool,
    /// Whether a next page exists.
    pub can_go_next: bool,
}

/// Number of pages needed for `total` rows: `max(1, ceil(total / page_size))`.
///
/// An empty result still has one (empty) page. A zero page size is treated
/// as 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Page index to keep after the result set changed size.
///
/// An index that still points at an existing page is kept; otherwise the
/// view goes back to the first page.
pub fn revalidate_page_index(page_index: usize, total: usize, page_size: usize) -> usize {
    if page_index < page_count(total, page_size) {
        page_index
    } else {
        0
    }
}

/// Slices page `page_index` out of `total` sorted rows.
///
/// An index past the last page is clamped to the last page.
pub fn paginate(total: usize, page_index: usize, page_size: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let page_count = page_count(total, page_size);
    let page_index = page_index.min(page_count - 1);

    let start = (page_index * page_size).min(total);
    let end = (start + page_size).min(total);

    PageWindow {
        page_index,
        page_count,
        range: start..end,
        can_go_prev: page_index > 0,
        can_go_next: page_index + 1 < page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(12, 10), 2);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_last_page_is_partial() {
        let window = paginate(12, 1, 10);
        assert_eq!(window.range, 10..12);
        assert!(window.can_go_prev);
        assert!(!window.can_go_next);
    }

    #[test]
    fn test_empty_result() {
        let window = paginate(0, 0, 10);
        assert_eq!(window.page_count, 1);
        assert_eq!(window.range, 0..0);
        assert!(!window.can_go_prev);
        assert!(!window.can_go_next);
    }

    #[test]
    fn test_index_past_end_is_clamped() {
        let window = paginate(25, 9, 10);
        assert_eq!(window.page_index, 2);
        assert_eq!(window.range, 20..25);
    }

    #[test]
    fn test_revalidate_keeps_valid_index() {
        assert_eq!(revalidate_page_index(1, 25, 10), 1);
        assert_eq!(revalidate_page_index(2, 25, 10), 2);
    }

    #[test]
    fn test_revalidate_resets_invalid_index() {
        assert_eq!(revalidate_page_index(2, 8, 10), 0);
        assert_eq!(revalidate_page_index(4, 35, 10), 0);
        assert_eq!(revalidate_page_index(0, 0, 10), 0);
    }

    #[test]
    fn test_pages_cover_result_exactly() {
        let total = 23;
        let count = page_count(total, 5);
        let covered: Vec<usize> = (0..count)
            .flat_map(|page| paginate(total, page, 5).range)
            .collect();
        assert_eq!(covered, (0..total).collect::<Vec<_>>());
    }
}
