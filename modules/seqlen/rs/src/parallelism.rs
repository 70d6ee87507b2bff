use std::thread::available_parallelism;

use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};

// Negative requests count back from the machine limit: -1 is all cores, -2 is all but one, etc.
fn normalize(requested: isize, max: usize) -> usize {
    if requested > 0 {
        requested.unsigned_abs().min(max)
    } else if requested == 0 {
        1
    } else {
        max.saturating_sub(requested.unsigned_abs() - 1).max(1)
    }
}

/// Number of worker threads for the requested amount, capped by the available parallelism.
/// Zero means a single thread, negative values count back from the machine limit.
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()?.get();
    Ok(normalize(requested, max))
}

/// Dedicated thread pool with the requested number of workers.
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    log::debug!("Building a thread pool with {threads} worker(s)");
    Ok(ThreadPoolBuilder::new().num_threads(threads).build()?)
}
