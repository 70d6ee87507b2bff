pub use config::Config;
pub use summary::Summary;
pub use validator::{BlankState, Validator};

pub mod batch;
mod config;
pub mod parallelism;
mod summary;
pub mod validate;
mod validator;

/// Count residues and line-length irregularities in a single FASTA sequence body.
///
/// `body` holds all lines after the header with their original terminators, `firstlen` is the
/// expected width of a wrapped line including the LF and excluding CR.
pub fn seqlen(body: &[u8], firstlen: usize) -> Summary {
    let mut validator = Validator::new(Config::new(firstlen));
    validator.consume(body);
    validator.finish()
}
