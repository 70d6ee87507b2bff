use super::config::Config;
use super::summary::Summary;

/// Whether a blank line was seen among the lines evaluated so far.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum BlankState {
    #[default]
    Normal,
    SeenBlank,
}

/// An incremental line-length validator for a single FASTA sequence body.
///
/// Every line terminated by LF is checked against the expected width, which includes the LF
/// itself and excludes any CR bytes. The following deviations are tolerated:
/// - Blank lines at the very end of the body
/// - A single mismatching line, if it's the last evaluated line (i.e. the record is shorter than
///   a full wrapped line on its tail)
///
/// Any non-blank line after a blank one is always an error.
///
/// The body can be fed in arbitrary chunks, the result doesn't depend on how it was split. Note
/// that a trailing line without the final LF is counted towards `seqlen` but never evaluated for
/// its width.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Validator {
    firstlen: usize,
    // Bytes in the current line, excluding CR
    linelen: usize,
    seqlen: usize,
    errcnt: usize,
    blank: BlankState,
    // The last evaluated line had a width mismatch that may be forgiven
    trailing_mismatch: bool,
}

impl Validator {
    pub fn new(config: Config) -> Self {
        Self {
            firstlen: config.firstlen,
            ..Default::default()
        }
    }

    pub fn firstlen(&self) -> usize {
        self.firstlen
    }

    pub fn blank(&self) -> BlankState {
        self.blank
    }

    /// True if the consumed bytes end with an unterminated line.
    pub fn has_pending_line(&self) -> bool {
        self.linelen > 0
    }

    /// Scan the next chunk of the body.
    pub fn consume(&mut self, chunk: &[u8]) {
        let mut rest = chunk;
        while let Some(pos) = memchr::memchr(b'\n', rest) {
            self.scan(&rest[..pos]);
            self.linelen += 1;
            self.end_line();
            rest = &rest[pos + 1..];
        }
        self.scan(rest);
    }

    /// Apply the trailing-line forgiveness and return the final counts.
    pub fn finish(self) -> Summary {
        if self.has_pending_line() {
            log::trace!(
                "Unterminated trailing line ({} bytes) excluded from line-length checks",
                self.linelen
            );
        }

        let mut errcnt = self.errcnt;
        if self.trailing_mismatch && errcnt == 1 {
            log::debug!(
                "Forgiving a single trailing line-length mismatch (expected width {})",
                self.firstlen
            );
            errcnt = 0;
        }
        Summary::new(self.seqlen, errcnt)
    }

    // The segment never contains LF
    #[inline(always)]
    fn scan(&mut self, segment: &[u8]) {
        for &b in segment {
            if b > b' ' {
                self.seqlen += 1;
                self.linelen += 1;
            } else if b != b'\r' {
                self.linelen += 1;
            }
        }
    }

    #[inline(always)]
    fn end_line(&mut self) {
        match (self.linelen, self.blank) {
            (1, _) => self.blank = BlankState::SeenBlank,
            (_, BlankState::SeenBlank) => self.errcnt += 1,
            (linelen, BlankState::Normal) if linelen != self.firstlen => {
                self.errcnt += 1;
                self.trailing_mismatch = true;
            }
            _ => self.trailing_mismatch = false,
        }
        self.linelen = 0;
    }
}
