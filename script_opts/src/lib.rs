//! Declarative option parsing and lifecycle for small command-line scripts.
//!
//! A [`Script`] is declared once: a help banner, description paragraphs,
//! options with optional handlers, required option names and accessor names.
//! Each invocation parses its argument list against those declarations,
//! honours the built-in `--dry-run`, `--[no-]verbose` and `--help` switches,
//! runs an optional `post_initialize` hook and then the script body, and
//! reduces the result to an [`ExitStatus`].
//!
//! ```no_run
//! use std::process::ExitCode;
//! use script_opts::{OptionSpec, Script};
//!
//! fn main() -> ExitCode {
//!     let Ok(path) = OptionSpec::new(["-p", "--path PATH", "Directory to clean"]) else {
//!         return ExitCode::FAILURE;
//!     };
//!     Script::new("clean")
//!         .option(path)
//!         .require(["path"])
//!         .run(|instance| {
//!             let summary = format!("cleaning with {}", instance.options());
//!             instance.message(summary)?;
//!             Ok(())
//!         })
//!         .execute(std::env::args_os().skip(1))
//!         .into()
//! }
//! ```

mod accessor;
mod builtin;
mod console;
mod declaration;
mod error;
mod help;
mod option;
mod parser;
mod script;
mod value;

pub use console::{Console, ERROR_PREFIX, INFO_PREFIX};
pub use declaration::Declarations;
pub use error::{DeclarationError, ParseError, ParseErrorKind, ScriptError};
pub use help::render_help;
pub use option::{Arity, Handler, OptionSpec, Placeholder};
pub use parser::{ParseOutcome, Parsed, parse};
pub use script::{Body, ExitStatus, Instance, Launch, Script};
pub use value::{DRY_RUN, OptionType, OptionValue, Options, VERBOSE};
