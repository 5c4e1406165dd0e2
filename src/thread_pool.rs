//! Request-scoped thread pools for parallel scoring.
//!
//! The worker count travels with each call instead of living in a
//! process-wide setting, so concurrent callers with different worker
//! counts never interfere. A pool of exactly the requested size is built
//! per call and dropped when the call returns.

/// Run `op` inside a rayon pool with exactly `workers` threads.
///
/// All rayon parallel iterators executed inside `op` use this pool,
/// including nested ones. The caller must have validated `workers >= 1`.
#[cfg(feature = "parallel")]
pub(crate) fn run_with_workers<OP, R>(workers: usize, op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .expect("failed to build worker thread pool");
    pool.install(op)
}

/// No parallel feature - just execute directly on the calling thread.
#[cfg(not(feature = "parallel"))]
pub(crate) fn run_with_workers<OP, R>(workers: usize, op: OP) -> R
where
    OP: FnOnce() -> R,
{
    let _ = workers;
    op()
}
