//! Line-oriented output for scripts.
//!
//! Help text, verbose messages and `!! ` error lines all go to one writer,
//! standard output unless a caller supplies another.

use std::fmt::{self, Display};
use std::io::{self, Write};

/// Prefix of error lines; printed regardless of verbosity.
pub const ERROR_PREFIX: &str = "!! ";
/// Prefix of informational lines.
pub const INFO_PREFIX: &str = "** ";

/// Destination for everything a script prints.
pub struct Console {
    out: Box<dyn Write>,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    /// Console writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Console writing to `out`.
    #[must_use]
    pub fn new(out: impl Write + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Writes pre-formatted text verbatim.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Writes an `!! ` error line.
    ///
    /// Error lines are reported on paths that are already failing, so a write
    /// failure here is logged rather than returned.
    pub fn error(&mut self, text: impl Display) {
        self.report(format_args!("{ERROR_PREFIX}{text}"));
    }

    /// Writes a line, logging instead of returning any write failure.
    pub fn report(&mut self, text: impl Display) {
        if let Err(err) = self.line(text) {
            tracing::warn!(error = %err, "failed to write to console");
        }
    }
}
