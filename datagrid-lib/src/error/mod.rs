//! Error types

mod field;
mod grid;

pub use field::*;
pub use grid::*;
