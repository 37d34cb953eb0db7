//! Example tools built on `script_opts`.
//!
//! [`purge_script`] backs the `purge_files` binary, which deletes files older
//! than a retention period from one directory. [`showcase_script`] backs the
//! `option_showcase` binary and exercises each declaration form.

mod error;
mod file_list;
mod logging;
mod purge;
mod showcase;

pub use error::PurgeError;
pub use file_list::{PurgeableFileList, open_directory};
pub use logging::init_logging;
pub use purge::{DEFAULT_DAYS_TO_KEEP, PURGE_ACCESSORS, PurgeAccessors, purge_script};
pub use showcase::showcase_script;
