//! Row and value model

mod record;
mod record_serde;
mod row;
pub mod types;
mod value;

pub use record::*;
pub use record_serde::*;
pub use row::*;
pub use value::*;
