//! Declared options: switches, help text and handlers.
//!
//! An [`OptionSpec`] is built from the same token list an optparse user would
//! write. Tokens starting with `-` are switches; anything else is a help line.
//!
//! ```
//! use script_opts::{OptionSpec, OptionValue};
//!
//! # fn main() -> Result<(), script_opts::DeclarationError> {
//! let spec = OptionSpec::new(["-p", "--pass-param PARAM", "Pass a param"])?
//!     .on(|options, value| options.assign("param", value));
//! assert_eq!(spec.name(), "pass_param");
//! assert_eq!(spec.help_lines(), ["Pass a param"]);
//! # Ok(())
//! # }
//! ```

mod switch;

use std::fmt;

pub use switch::Placeholder;

use crate::error::DeclarationError;
use crate::value::{OptionValue, Options};
use switch::Token;

/// Callback run when an option is matched.
///
/// Receives the live options mapping and the matched value: `Some(Bool(true))`
/// for a switch, `Some(Bool(false))` for its `--no-` form, the supplied text or
/// integer for valued options, and `None` when an optional value is omitted.
pub type Handler = Box<dyn Fn(&mut Options, Option<OptionValue>)>;

/// How many values an option consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Boolean switch; takes no value.
    Flag,
    /// A value must follow the switch.
    Required,
    /// A value may follow the switch.
    Optional,
}

/// A user-declared option.
pub struct OptionSpec {
    shorts: Vec<char>,
    longs: Vec<String>,
    negatable: bool,
    placeholder: Option<Placeholder>,
    help: Vec<String>,
    integer: bool,
    handler: Option<Handler>,
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("shorts", &self.shorts)
            .field("longs", &self.longs)
            .field("negatable", &self.negatable)
            .field("placeholder", &self.placeholder)
            .field("help", &self.help)
            .field("integer", &self.integer)
            .field("handler", &self.handler.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

impl OptionSpec {
    /// Classifies `tokens` into switches and help lines.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] when a switch token is malformed or no
    /// token is a switch at all.
    pub fn new<I, S>(tokens: I) -> Result<Self, DeclarationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = Self {
            shorts: Vec::new(),
            longs: Vec::new(),
            negatable: false,
            placeholder: None,
            help: Vec::new(),
            integer: false,
            handler: None,
        };
        let mut seen = Vec::new();
        for token in tokens {
            let text = token.as_ref();
            seen.push(text.to_owned());
            match switch::classify(text)? {
                Token::Short { flag, placeholder } => {
                    spec.shorts.push(flag);
                    spec.placeholder = spec.placeholder.or(placeholder);
                }
                Token::Long {
                    name,
                    negatable,
                    placeholder,
                } => {
                    spec.longs.push(name);
                    spec.negatable |= negatable;
                    spec.placeholder = spec.placeholder.or(placeholder);
                }
                Token::Help(line) => spec.help.push(line),
            }
        }
        if spec.shorts.is_empty() && spec.longs.is_empty() {
            return Err(DeclarationError::NoSwitch { tokens: seen });
        }
        Ok(spec)
    }

    /// Appends a help line.
    #[must_use]
    pub fn help(mut self, line: impl Into<String>) -> Self {
        self.help.push(line.into());
        self
    }

    /// Coerces the option's value to an integer.
    #[must_use]
    pub const fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Attaches the handler run when the option is matched.
    ///
    /// Without a handler the value is stored under [`Self::name`].
    #[must_use]
    pub fn on<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Options, Option<OptionValue>) + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Mapping key for this option: the first long switch with dashes turned
    /// into underscores, else the first short switch.
    #[must_use]
    pub fn name(&self) -> String {
        self.longs.first().map_or_else(
            || self.shorts.iter().take(1).collect(),
            |long| long.replace('-', "_"),
        )
    }

    /// Short switches in declaration order.
    #[must_use]
    pub fn shorts(&self) -> &[char] {
        &self.shorts
    }

    /// Long switch names (without dashes) in declaration order.
    #[must_use]
    pub fn longs(&self) -> &[String] {
        &self.longs
    }

    /// Whether `--no-<long>` is accepted.
    #[must_use]
    pub const fn is_negatable(&self) -> bool {
        self.negatable
    }

    /// Whether values are coerced to integers.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.integer
    }

    /// Declared value placeholder, if any.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// Value expectation derived from the placeholder.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self.placeholder {
            None => Arity::Flag,
            Some(Placeholder::Required(_)) => Arity::Required,
            Some(Placeholder::Optional(_)) => Arity::Optional,
        }
    }

    /// Help lines in declaration order.
    #[must_use]
    pub fn help_lines(&self) -> &[String] {
        &self.help
    }

    /// Left help column: `-p, --pass-param PARAM`.
    pub(crate) fn summary(&self) -> String {
        let shorts = self
            .shorts
            .iter()
            .map(|flag| format!("-{flag}"))
            .collect::<Vec<_>>()
            .join(", ");
        let negation = if self.negatable { "[no-]" } else { "" };
        let longs = self
            .longs
            .iter()
            .map(|long| format!("--{negation}{long}"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut summary = match (shorts.is_empty(), longs.is_empty()) {
            (false, false) => format!("{shorts}, {longs}"),
            (true, _) => format!("    {longs}"),
            (false, true) => shorts,
        };
        if let Some(placeholder) = &self.placeholder {
            summary.push_str(&placeholder.summary());
        }
        summary
    }

    /// Runs the handler, or stores the value under [`Self::name`] when none
    /// was attached.
    pub(crate) fn fire(&self, options: &mut Options, value: Option<OptionValue>) {
        match &self.handler {
            Some(handler) => handler(options, value),
            None => options.assign(&self.name(), value),
        }
    }
}
