//! Runtime module
//!
//! Provides async task execution and cooperative suspension primitives.

pub mod async_task;
pub(crate) mod yield_point;

// Re-export async task types
pub use async_task::AsyncTask;
pub(crate) use yield_point::YieldPoint;
