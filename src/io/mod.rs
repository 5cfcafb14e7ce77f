//! Input/output helpers.
//!
//! - run JSON read/write (`curve`)
//! - curve grid CSV export (`export`)

pub mod curve;
pub mod export;

pub use curve::*;
pub use export::*;
