//! Errors raised while building or purging a file list.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures of the purge utility.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PurgeError {
    /// A negative retention period was supplied.
    #[error("--keep-n-days must not be negative, got {days}")]
    NegativeRetention {
        /// The rejected value.
        days: i64,
    },

    /// The retention period reaches back before the clock's epoch.
    #[error("--keep-n-days {days} reaches too far into the past")]
    RetentionOverflow {
        /// The rejected value.
        days: i64,
    },

    /// The purge directory could not be listed.
    #[error("failed to list '{path}'")]
    List {
        /// Directory being listed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be inspected.
    #[error("failed to inspect '{path}'")]
    Inspect {
        /// Entry being inspected.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be deleted.
    #[error("failed to delete '{path}'")]
    Delete {
        /// File being deleted.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
