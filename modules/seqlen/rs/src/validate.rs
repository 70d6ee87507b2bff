use super::config::Config;
use super::summary::Summary;
use super::validator::Validator;
use eyre::{ensure, Result};

pub fn firstlen(firstlen: usize) -> Result<()> {
    ensure!(
        firstlen >= 2,
        "Expected line width must include at least one symbol and the newline, got {firstlen}"
    );
    Ok(())
}

pub fn line_lengths(body: &[u8], config: Config) -> Result<Summary> {
    let mut validator = Validator::new(config);
    validator.consume(body);
    let summary = validator.finish();
    ensure!(
        summary.is_valid(),
        "Line length mismatch in the FASTA sequence: {} irregular line(s), expected width {}",
        summary.errcnt(),
        config.firstlen
    );
    Ok(summary)
}
