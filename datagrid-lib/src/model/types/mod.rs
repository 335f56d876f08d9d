//! Field value types

mod money;

pub use money::*;
