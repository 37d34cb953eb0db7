//! Purges files older than a retention period from a directory.

use std::process::ExitCode;

use purge_files::{init_logging, purge_script};

fn main() -> ExitCode {
    init_logging();
    match purge_script() {
        Ok(script) => script.execute(std::env::args_os().skip(1)).into(),
        Err(err) => {
            tracing::error!(error = %err, "invalid option declarations");
            ExitCode::FAILURE
        }
    }
}
