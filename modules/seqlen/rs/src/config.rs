#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use derive_more::Constructor;

#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Constructor, Dissolve)]
pub struct Config {
    // Expected width of every wrapped line, counting the LF but not the CR
    pub firstlen: usize,
}

impl Config {
    /// Derive the expected line width from the first terminated line of the body. The width is
    /// measured the same way the validator measures it: the LF is counted, CR bytes are not.
    /// Returns `None` if the body doesn't contain a single LF.
    pub fn infer(body: &[u8]) -> Option<Self> {
        let pos = memchr::memchr(b'\n', body)?;
        let crs = memchr::memchr_iter(b'\r', &body[..pos]).count();
        Some(Self::new(pos - crs + 1))
    }
}
