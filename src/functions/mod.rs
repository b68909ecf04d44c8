//! Async helper functions
//!
//! Cooperative streams over synchronous data and executor wrappers for
//! blocking calls.

pub mod aiter;
pub mod arange;
pub mod executor;

// Re-export stream types
pub use aiter::{AsyncIter, aiter};
pub use arange::{ARange, RangeArgs, RangeBuilder, RangeInt, arange};

// Re-export executor helpers
pub use executor::{run_in_executor, wrapper_run_in_executor};
