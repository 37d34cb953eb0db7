//! Error types produced while declaring, parsing and running scripts.

mod clap_error;
mod types;

pub use types::{DeclarationError, ParseError, ParseErrorKind, ScriptError};

pub(crate) use clap_error::{from_clap, is_display_request};
pub(crate) use types::optionize;
