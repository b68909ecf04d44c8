//! `ripix` - cooperative async helpers
//!
//! This library adapts synchronous sequences into async streams, provides an
//! async integer range, and offloads blocking calls to tokio's blocking pool.
//! Every stream suspends once per pull so long iterations share the
//! scheduler with other tasks. The `pixels` module builds terminal pixel
//! art on top of these helpers.

// Module declarations
pub mod error;
pub mod functions;
pub mod pixels;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export error types
pub use error::{RipixError, RipixResult};

// Re-export helper functions and stream types
pub use functions::{
    ARange, AsyncIter, RangeArgs, RangeBuilder, RangeInt, aiter, arange, run_in_executor,
    wrapper_run_in_executor,
};

// Re-export pixel art types
pub use pixels::{Pixels, Rgb, Segment, Style};
