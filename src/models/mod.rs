//! Polynomial model evaluation.
//!
//! Models are implemented as small, pure functions so that fitting, scoring and
//! plotting code can share them.

pub mod model;

pub use model::*;
