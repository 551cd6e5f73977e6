//! Gap-acceptance capacity analysis of a priority-controlled T-intersection.

pub mod error;
pub mod formulas;
pub mod intersection;
pub mod los;
pub mod tables;

pub use error::*;
pub use formulas::*;
pub use intersection::*;
pub use los::*;
