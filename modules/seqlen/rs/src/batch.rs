use super::config::Config;
use super::parallelism;
use super::summary::Summary;
use eyre::Result;
use rayon::prelude::*;

fn report(summaries: &[Summary]) {
    let failed = summaries.iter().filter(|x| !x.is_valid()).count();
    if failed > 0 {
        log::debug!(
            "{failed} out of {} sequence(s) failed the line-length check",
            summaries.len()
        );
    }
}

/// Validate independent sequence bodies on the current rayon thread pool.
/// Summaries are returned in the same order as the input records.
pub fn run(records: &[(&[u8], Config)]) -> Vec<Summary> {
    let summaries: Vec<_> = records
        .par_iter()
        .map(|(body, config)| crate::seqlen(body, config.firstlen))
        .collect();
    report(&summaries);
    summaries
}

/// Same as [run], but on a dedicated pool with the given number of threads.
pub fn run_with_threads(records: &[(&[u8], Config)], threads: isize) -> Result<Vec<Summary>> {
    let pool = parallelism::pool(threads)?;
    Ok(pool.install(|| run(records)))
}
