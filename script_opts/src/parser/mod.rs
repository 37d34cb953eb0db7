//! Argument parsing against a declaration set.
//!
//! Parsing is a single left-to-right pass performed by `clap`. Matched
//! switches are then replayed through their handlers in command-line order,
//! after which required options are checked. `-h`/`--help` stops the scan at
//! the help token, so nothing after it is examined and no handler fires.

mod command;
mod replay;

use std::ffi::OsString;

use crate::declaration::Declarations;
use crate::error::{ParseError, from_clap, is_display_request};
use crate::help::render_help;
use crate::value::Options;

/// Successful parse: the populated mapping and any non-option arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Options mapping after every handler has fired.
    pub options: Options,
    /// Arguments that were not switches or switch values, in order.
    pub remaining: Vec<OsString>,
}

/// Result of parsing an argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every switch was accepted and every required option is present.
    Success(Parsed),
    /// The help switch was given; carries the formatted help text.
    HelpRequested(String),
    /// The arguments were rejected.
    Error(ParseError),
}

/// Parses `args` (without the program name) against `declarations`.
///
/// `program` names the default banner in the help text.
///
/// # Examples
///
/// ```
/// use script_opts::{Declarations, OptionSpec, ParseOutcome, parse};
///
/// # fn main() -> Result<(), script_opts::DeclarationError> {
/// let mut declarations = Declarations::new();
/// declarations.add_option(
///     OptionSpec::new(["-f", "--flag"])?.on(|options, value| options.assign("flag", value)),
/// );
/// let ParseOutcome::Success(parsed) = parse("demo", &declarations, ["--flag"]) else {
///     panic!("expected the flag to parse");
/// };
/// assert!(parsed.options.flag("flag"));
/// # Ok(())
/// # }
/// ```
pub fn parse<I, T>(program: &str, declarations: &Declarations, args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    if let Err(err) = command::check_switches(declarations) {
        return ParseOutcome::Error(err);
    }
    tracing::debug!(
        program,
        options = declarations.options().len(),
        "parsing arguments"
    );

    let matches = match command::build(program, declarations).try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) if is_display_request(&err) => {
            tracing::debug!(program, "help requested");
            return ParseOutcome::HelpRequested(render_help(program, declarations));
        }
        Err(err) => return ParseOutcome::Error(from_clap(&err)),
    };

    let found = match replay::occurrences(&matches, declarations) {
        Ok(found) => found,
        Err(err) => return ParseOutcome::Error(err),
    };
    let mut options = Options::new();
    replay::apply(found, &mut options);

    if let Some(missing) = declarations
        .required()
        .iter()
        .find(|name| !options.contains(name))
    {
        tracing::debug!(option = %missing, "required option missing");
        return ParseOutcome::Error(ParseError::missing_required(missing));
    }

    let remaining = matches
        .get_many::<OsString>(command::REMAINING_ID)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    ParseOutcome::Success(Parsed { options, remaining })
}

#[cfg(test)]
mod tests;
