//! Blocking work offloaded to the runtime's executor.

use crate::runtime::AsyncTask;
use std::sync::Arc;

/// Run a blocking closure on the blocking thread pool.
///
/// Must be called from within a tokio runtime. Await the returned task for
/// the closure's value, or use [`AsyncTask::join`] to get a
/// [`RipixResult`](crate::RipixResult).
#[inline]
pub fn run_in_executor<T, F>(f: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    AsyncTask::spawn(f)
}

/// Wrap a blocking single-argument function so each call runs in the executor.
///
/// The wrapped function is shared between calls, so tasks from several
/// calls may run concurrently. Pass a tuple for functions of more arguments.
///
/// ```rust
/// # #[tokio::main]
/// # async fn main() -> ripix::RipixResult<()> {
/// let square = ripix::wrapper_run_in_executor(|n: u64| n * n);
/// assert_eq!(square(12).join().await?, 144);
/// # Ok(())
/// # }
/// ```
pub fn wrapper_run_in_executor<A, R, F>(f: F) -> impl Fn(A) -> AsyncTask<R> + Clone + Send + Sync
where
    A: Send + 'static,
    R: Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    let f = Arc::new(f);
    move |arg: A| {
        let f = Arc::clone(&f);
        AsyncTask::spawn(move || f(arg))
    }
}
