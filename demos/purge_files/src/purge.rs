//! The `purge_files` script: deletes files older than a retention period.

use std::time::SystemTime;

use anyhow::Context;
use camino::Utf8PathBuf;
use script_opts::{DeclarationError, Instance, OptionSpec, Script, option_accessors};

use crate::file_list::{PurgeableFileList, open_directory};

/// Retention period used when `--keep-n-days` is not given.
pub const DEFAULT_DAYS_TO_KEEP: i64 = 30;

option_accessors! {
    /// Typed access to the purge options.
    pub trait PurgeAccessors (PURGE_ACCESSORS) {
        keep_n_days / set_keep_n_days: i64,
        path_to_purge / set_path_to_purge: String,
    }
}

/// Declares the purge script.
///
/// # Errors
///
/// Returns [`DeclarationError`] if an option declaration is malformed.
pub fn purge_script() -> Result<Script, DeclarationError> {
    let keep = OptionSpec::new(["-k", "--keep-n-days DAYS", "Keep N days of files."])?
        .help(format!("\tDefault: --keep-n-days {DEFAULT_DAYS_TO_KEEP}"))
        .integer();
    let path = OptionSpec::new(["-p", "--path-to-purge PATH", "Purge files from PATH", "Required"])?;

    Ok(Script::new("purge_files")
        .banner("Usage: purge_files [options]")
        .description(
            "Deletes files older than the retention period from a directory.\n\
             Sub-directories are left alone.",
        )
        .option(keep)
        .option(path)
        .require(["path_to_purge"])
        .accessor(PURGE_ACCESSORS.iter().copied())
        .post_initialize(|instance| {
            if instance.keep_n_days().is_none() {
                instance.set_keep_n_days(DEFAULT_DAYS_TO_KEEP);
            }
            Ok(())
        })
        .run(purge))
}

fn purge(instance: &mut Instance<'_>) -> anyhow::Result<()> {
    let root = Utf8PathBuf::from(instance.path_to_purge().unwrap_or_default());
    let keep_n_days = instance.keep_n_days().unwrap_or(DEFAULT_DAYS_TO_KEEP);

    instance.message(format_args!("Checking for directory {root}."))?;
    let Some(dir) = open_directory(&root)? else {
        instance.error_message(format_args!("Directory '{root}' not found."));
        return Ok(());
    };
    instance.message(format_args!("Directory {root} found."))?;
    instance.message("Getting list of files.")?;
    let files = PurgeableFileList::scan(dir, &root, keep_n_days, SystemTime::now())
        .with_context(|| format!("could not list files in '{root}'"))?;
    instance.message(format_args!("{} files found.", files.len()))?;

    let dry_run = instance.is_dry_run();
    for name in files.names() {
        instance.message(format_args!("Deleting '{}'.", files.path_of(name)))?;
        if !dry_run {
            files.remove(name)?;
        }
    }
    tracing::info!(%root, purged = files.len(), dry_run, "purge complete");
    instance.message("Fin!")?;
    Ok(())
}
