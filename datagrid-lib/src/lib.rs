//! In-memory data grid engine
//!
//! Takes a collection of rows and a column registry and derives a filtered,
//! sorted, paginated view from user-driven [`ViewState`]. The three stages
//! always run in the same order (filter → sort → paginate) and are recomputed
//! from scratch after every command.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use datagrid_lib::DataGrid;
//! use datagrid_lib::customers::{customer_columns, sample_customers};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let mut grid = DataGrid::new(customer_columns(), sample_customers(15, today));
//!
//! assert_eq!(grid.view().page_label(), "Page 1 of 2");
//!
//! let view = grid.set_query("enterprise");
//! assert_eq!(view.row_count_label(), "3 rows");
//! ```

pub mod column;
pub mod config;
pub mod customers;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod view;

mod grid;

pub use column::CellStyle;
pub use column::Column;
pub use column::DisplayValue;
pub use config::GridConfig;
pub use error::FieldError;
pub use error::GridError;
pub use grid::*;
pub use state::Direction;
pub use state::SortState;
pub use state::ViewState;
pub use view::DerivedView;
pub use view::HeaderView;
