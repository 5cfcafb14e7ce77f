//! Mathematical utilities: the monomial design matrix and the normal-equation solver.

pub mod basis;
pub mod ols;

pub use basis::*;
pub use ols::*;
