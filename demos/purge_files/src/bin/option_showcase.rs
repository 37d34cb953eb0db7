//! Prints the options it was given; run with `--help` to see every
//! declaration form rendered.

use std::process::ExitCode;

use purge_files::{init_logging, showcase_script};

fn main() -> ExitCode {
    init_logging();
    match showcase_script() {
        Ok(script) => script.execute(std::env::args_os().skip(1)).into(),
        Err(err) => {
            tracing::error!(error = %err, "invalid option declarations");
            ExitCode::FAILURE
        }
    }
}
