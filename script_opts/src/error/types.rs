//! Primary error enums for script declaration, parsing and access.

use std::fmt;

use thiserror::Error;

/// Category of a [`ParseError`].
///
/// The display form doubles as the message prefix, so a missing required
/// option renders as `missing argument: --path - Run with --help for help.`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// A switch that no declaration recognises.
    InvalidOption,
    /// A required value or a required option is absent.
    MissingArgument,
    /// A value was supplied but could not be accepted.
    InvalidArgument,
    /// A value was attached to a switch that takes none.
    NeedlessArgument,
    /// Two declarations claim the same switch.
    DuplicateSwitch,
    /// Any other rejection reported by the underlying parser.
    Other,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidOption => "invalid option",
            Self::MissingArgument => "missing argument",
            Self::InvalidArgument => "invalid argument",
            Self::NeedlessArgument => "needless argument",
            Self::DuplicateSwitch => "duplicate switch",
            Self::Other => "parse error",
        })
    }
}

/// Failure to turn an argument list into [`Options`](crate::Options).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct ParseError {
    kind: ParseErrorKind,
    detail: String,
}

impl ParseError {
    /// Builds an error of `kind` with the offending switch or message.
    #[must_use]
    pub fn new(kind: ParseErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Error raised when a required option has no value after parsing.
    ///
    /// # Examples
    ///
    /// ```
    /// use script_opts::ParseError;
    ///
    /// let err = ParseError::missing_required("path_to_purge");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "missing argument: --path-to-purge - Run with --help for help."
    /// );
    /// ```
    #[must_use]
    pub fn missing_required(name: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingArgument,
            format!("{} - Run with --help for help.", optionize(name)),
        )
    }

    /// Category of the failure.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Offending switch, value or message.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Renders an option name as its long switch: `keep_n_days` -> `--keep-n-days`.
#[must_use]
pub(crate) fn optionize(name: &str) -> String {
    format!("--{}", name.replace('_', "-"))
}

/// Malformed option declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DeclarationError {
    /// No token in the declaration starts with `-`.
    #[error("option declaration has no switch: {tokens:?}")]
    NoSwitch {
        /// Tokens supplied to the declaration.
        tokens: Vec<String>,
    },
    /// A switch token names nothing, such as `-` or `--`.
    #[error("empty switch in option declaration: '{0}'")]
    EmptySwitch(String),
    /// A short switch spells more than one character.
    #[error("short switches take a single character: '{0}'")]
    LongShortSwitch(String),
}

/// Errors surfaced by the [`Instance`](crate::Instance) API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScriptError {
    /// The argument list was rejected.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An option declaration is malformed.
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    /// The option was not declared accessible.
    #[error("no accessor declared for option '{name}'")]
    UndeclaredAccessor {
        /// Option name that was requested.
        name: String,
    },
}
