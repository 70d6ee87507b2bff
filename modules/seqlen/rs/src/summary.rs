#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use derive_more::{Constructor, Into};

/// Result of scanning a single FASTA sequence body:
/// - `seqlen` is the number of residue bytes, i.e. bytes strictly greater than the ASCII space.
/// - `errcnt` is the number of line-length irregularities. Any value above zero means that the
///   body failed the line-length check.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(
    Debug, Clone, Copy, Default, Ord, PartialOrd, Eq, PartialEq, Hash, Constructor, Dissolve, Into,
)]
pub struct Summary {
    seqlen: usize,
    errcnt: usize,
}

impl Summary {
    pub fn seqlen(&self) -> usize {
        self.seqlen
    }

    pub fn errcnt(&self) -> usize {
        self.errcnt
    }

    /// True if no line-length irregularities were detected.
    pub fn is_valid(&self) -> bool {
        self.errcnt == 0
    }
}

impl From<Summary> for [usize; 2] {
    fn from(value: Summary) -> Self {
        [value.seqlen, value.errcnt]
    }
}
