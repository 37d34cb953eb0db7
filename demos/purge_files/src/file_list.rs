//! Files in a directory old enough to purge.

use std::io::ErrorKind;
use std::time::{Duration, SystemTime};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};

use crate::error::PurgeError;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Regular files directly inside a directory whose modification time is at
/// or before the retention cutoff.
///
/// Sub-directories, symlinks and other non-files are never listed.
#[derive(Debug)]
pub struct PurgeableFileList {
    root: Utf8PathBuf,
    dir: Dir,
    names: Vec<String>,
}

/// Opens `root` as a directory, returning `None` when it does not exist or is
/// not a directory.
///
/// # Errors
///
/// Returns [`PurgeError::List`] for any other failure to open `root`.
pub fn open_directory(root: &Utf8Path) -> Result<Option<Dir>, PurgeError> {
    match Dir::open_ambient_dir(root, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            tracing::debug!(%root, error = %err, "purge directory not found");
            Ok(None)
        }
        Err(source) => Err(PurgeError::List {
            path: root.to_owned(),
            source,
        }),
    }
}

impl PurgeableFileList {
    /// Lists the files in `dir`, opened from `root`, last modified more than
    /// `keep_n_days` days before `now`.
    ///
    /// # Errors
    ///
    /// Returns [`PurgeError`] when the retention period is negative or out of
    /// range, or when the directory or one of its entries cannot be read.
    pub fn scan(
        dir: Dir,
        root: &Utf8Path,
        keep_n_days: i64,
        now: SystemTime,
    ) -> Result<Self, PurgeError> {
        let cutoff = cutoff(now, keep_n_days)?;
        let list_error = |source| PurgeError::List {
            path: root.to_owned(),
            source,
        };

        let mut names = Vec::new();
        for entry in dir.entries().map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            let name = entry.file_name().map_err(list_error)?;
            let inspect_error = |source| PurgeError::Inspect {
                path: root.join(&name),
                source,
            };
            let metadata = entry.metadata().map_err(inspect_error)?;
            if !metadata.is_file() {
                tracing::debug!(entry = %name, "skipping non-file");
                continue;
            }
            let modified = metadata.modified().map_err(inspect_error)?.into_std();
            if modified > cutoff {
                tracing::debug!(entry = %name, "too young to purge");
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(Self {
            root: root.to_owned(),
            dir,
            names,
        })
    }

    /// Number of purgeable files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is old enough to purge.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// File names relative to the scanned directory, sorted.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Full path of a listed file.
    #[must_use]
    pub fn path_of(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Deletes the listed file `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PurgeError::Delete`] when the file cannot be removed.
    pub fn remove(&self, name: &str) -> Result<(), PurgeError> {
        self.dir
            .remove_file(name)
            .map_err(|source| PurgeError::Delete {
                path: self.path_of(name),
                source,
            })
    }
}

fn cutoff(now: SystemTime, keep_n_days: i64) -> Result<SystemTime, PurgeError> {
    let days = u64::try_from(keep_n_days)
        .map_err(|_| PurgeError::NegativeRetention { days: keep_n_days })?;
    days.checked_mul(SECONDS_PER_DAY)
        .and_then(|seconds| now.checked_sub(Duration::from_secs(seconds)))
        .ok_or(PurgeError::RetentionOverflow { days: keep_n_days })
}
