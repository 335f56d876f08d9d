//! User-controlled view state: search query, active sort, current page.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    Ascending,
    /// Descending order (Z-A, 9-0, newest first).
    Descending,
}

impl Direction {
    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Direction::Ascending => "↑",
            Direction::Descending => "↓",
        }
    }
}

/// The active single-key sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: Direction,
}

impl SortState {
    /// Ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    /// Descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }

    /// Next step of the header toggle cycle for `field`:
    /// unsorted → ascending → descending → unsorted.
    ///
    /// Toggling a field other than the current one starts over at ascending.
    pub fn toggled(current: Option<&SortState>, field: &str) -> Option<SortState> {
        match current {
            Some(sort) if sort.field == field => match sort.direction {
                Direction::Ascending => Some(SortState::desc(field)),
                Direction::Descending => None,
            },
            _ => Some(SortState::asc(field)),
        }
    }
}

/// Mutable view state of one grid instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Free-text search query. Empty matches every row.
    pub query: String,
    /// Active sort, if any.
    pub sort: Option<SortState>,
    /// Zero-based index of the current page.
    pub page_index: usize,
    /// Rows per page, always at least 1.
    pub page_size: usize,
}

impl ViewState {
    /// Default rows per page.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Creates a default state with the given page size (clamped to at least 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Direction `field` is sorted in, if it is the active sort key.
    pub fn sorted_direction(&self, field: &str) -> Option<Direction> {
        self.sort
            .as_ref()
            .filter(|sort| sort.field == field)
            .map(|sort| sort.direction)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page_index: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}
