//! Cloneable in-memory writer for capturing console output.
//!
//! Every clone shares one buffer, so a test can hand one clone to the code
//! under test and read the captured bytes through another.
//!
//! # Examples
//!
//! ```
//! use std::io::Write;
//! use script_opts_test_helpers::output::SharedBuffer;
//!
//! let buffer = SharedBuffer::default();
//! let mut writer = buffer.clone();
//! writeln!(writer, "hello").expect("write to buffer");
//! assert_eq!(buffer.contents(), "hello\n");
//! ```

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writer backed by a shared byte buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Returns everything written so far, decoding lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Returns the captured output split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
