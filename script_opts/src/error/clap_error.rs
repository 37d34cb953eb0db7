//! Translation of `clap` rejections into [`ParseError`] values.
//!
//! Only the message is carried over. The usage tail `clap` appends to its
//! rendered errors is dropped because scripts print their own help.

use clap::error::{ContextKind, ContextValue, Error as ClapError, ErrorKind};

use super::{ParseError, ParseErrorKind};

/// Returns `true` when a [`clap::Error`] is a help or version request rather
/// than a genuine failure.
#[must_use]
pub(crate) fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Maps a `clap` error onto the optparse-style categories.
pub(crate) fn from_clap(err: &ClapError) -> ParseError {
    let switch = context_text(err, ContextKind::InvalidArg).map(|arg| switch_of(&arg).to_owned());
    let value = context_text(err, ContextKind::InvalidValue);
    match (err.kind(), switch) {
        (ErrorKind::UnknownArgument, Some(arg)) => {
            ParseError::new(ParseErrorKind::InvalidOption, arg)
        }
        (ErrorKind::InvalidValue, Some(arg)) if value.as_deref().is_none_or(str::is_empty) => {
            ParseError::new(ParseErrorKind::MissingArgument, arg)
        }
        (ErrorKind::InvalidValue | ErrorKind::ValueValidation, Some(arg)) => ParseError::new(
            ParseErrorKind::InvalidArgument,
            value.map_or_else(|| arg.clone(), |text| format!("{arg} {text}")),
        ),
        (ErrorKind::TooManyValues, Some(arg)) => ParseError::new(
            ParseErrorKind::NeedlessArgument,
            value.map_or_else(|| arg.clone(), |text| format!("{arg}={text}")),
        ),
        _ => ParseError::new(ParseErrorKind::Other, first_line(err)),
    }
}

fn context_text(err: &ClapError, kind: ContextKind) -> Option<String> {
    match err.get(kind)? {
        ContextValue::String(text) => Some(text.clone()),
        ContextValue::Strings(texts) => texts.first().cloned(),
        ContextValue::StyledStr(text) => Some(text.to_string()),
        _ => None,
    }
}

/// `clap` reports options as `--path <PATH>`; keep the switch only.
fn switch_of(arg: &str) -> &str {
    arg.split_whitespace().next().unwrap_or(arg)
}

fn first_line(err: &ClapError) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_owned()
}
