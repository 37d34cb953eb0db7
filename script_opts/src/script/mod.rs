//! Script definitions and their single run-and-exit lifecycle.
//!
//! A [`Script`] owns the declaration set plus the optional `post_initialize`
//! hook and the run body. [`Script::start`] parses an argument list into an
//! [`Instance`] (or finishes early for help and errors) and
//! [`Instance::run`] dispatches to the body.
//!
//! ```
//! use script_opts::{Console, ExitStatus, OptionSpec, Script};
//!
//! # fn main() -> Result<(), script_opts::DeclarationError> {
//! let script = Script::new("greet")
//!     .banner("Usage: greet [options]")
//!     .option(OptionSpec::new(["-n", "--name NAME", "Who to greet"])?)
//!     .require(["name"])
//!     .run(|instance| {
//!         let name = instance.options().get("name").and_then(|v| v.as_str()).unwrap_or_default();
//!         let greeting = format!("Hello, {name}!");
//!         instance.say(greeting)?;
//!         Ok(())
//!     });
//!
//! assert_eq!(script.execute_with(["--name", "Ada"], Console::new(std::io::sink())), ExitStatus::Success);
//! assert_eq!(script.execute_with(Vec::<String>::new(), Console::new(std::io::sink())), ExitStatus::Failure);
//! # Ok(())
//! # }
//! ```

mod instance;

use std::ffi::OsString;
use std::fmt;
use std::process::ExitCode;

pub use instance::Instance;

use crate::console::Console;
use crate::declaration::Declarations;
use crate::option::OptionSpec;
use crate::parser::{ParseOutcome, parse};

/// Hook or run body evaluated against a parsed instance.
pub type Body = Box<dyn Fn(&mut Instance<'_>) -> anyhow::Result<()>>;

/// Process outcome of a script invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The body completed or help was shown; exit code 0.
    Success,
    /// Parsing, a hook or the body failed; exit code 1.
    Failure,
}

impl ExitStatus {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }

    /// Whether this is [`ExitStatus::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// Result of [`Script::start`].
#[derive(Debug)]
pub enum Launch<'s> {
    /// Arguments parsed and `post_initialize` succeeded.
    Ready(Instance<'s>),
    /// The invocation already ended: help was printed or start-up failed.
    Finished(ExitStatus),
}

/// A command-line script: declarations, lifecycle hook and run body.
pub struct Script {
    program: String,
    declarations: Declarations,
    post_initialize: Option<Body>,
    body: Option<Body>,
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("program", &self.program)
            .field("declarations", &self.declarations)
            .field("post_initialize", &self.post_initialize.is_some())
            .field("body", &self.body.is_some())
            .finish()
    }
}

impl Script {
    /// Creates a script named `program` with no declarations.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            declarations: Declarations::new(),
            post_initialize: None,
            body: None,
        }
    }

    /// Sets the help banner; see [`Declarations::set_banner`].
    #[must_use]
    pub fn banner(mut self, text: impl Into<String>) -> Self {
        self.declarations.set_banner(text);
        self
    }

    /// Adds a description paragraph; see [`Declarations::add_description`].
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.declarations.add_description(text);
        self
    }

    /// Adds a user option; see [`Declarations::add_option`].
    #[must_use]
    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.declarations.add_option(spec);
        self
    }

    /// Marks option names as required; see [`Declarations::require_option`].
    #[must_use]
    pub fn require<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declarations.require_option(names);
        self
    }

    /// Exposes option names as accessors; see [`Declarations::add_accessor`].
    #[must_use]
    pub fn accessor<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declarations.add_accessor(names);
        self
    }

    /// Sets the hook run once after parsing, before the body.
    #[must_use]
    pub fn post_initialize<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Instance<'_>) -> anyhow::Result<()> + 'static,
    {
        self.post_initialize = Some(Box::new(hook));
        self
    }

    /// Sets the body dispatched by [`Instance::run`].
    #[must_use]
    pub fn run<F>(mut self, body: F) -> Self
    where
        F: Fn(&mut Instance<'_>) -> anyhow::Result<()> + 'static,
    {
        self.body = Some(Box::new(body));
        self
    }

    /// Program name used in the default banner and failure messages.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The declaration set.
    #[must_use]
    pub const fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Mutable access to the declaration set.
    pub const fn declarations_mut(&mut self) -> &mut Declarations {
        &mut self.declarations
    }

    /// Parses `args` (without the program name) and runs `post_initialize`.
    ///
    /// Help text and `!! ` error lines are written to `console`; the
    /// returned [`Launch`] says whether the caller should go on to
    /// [`Instance::run`].
    pub fn start<I, T>(&self, args: I, mut console: Console) -> Launch<'_>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let parsed = match parse(&self.program, &self.declarations, raw.iter().cloned()) {
            ParseOutcome::Success(parsed) => parsed,
            ParseOutcome::HelpRequested(help) => {
                if let Err(err) = console.text(&help) {
                    tracing::warn!(error = %err, "failed to print help");
                }
                return Launch::Finished(ExitStatus::Success);
            }
            ParseOutcome::Error(err) => {
                console.error(&err);
                return Launch::Finished(ExitStatus::Failure);
            }
        };

        let mut instance = Instance::new(self, raw, parsed, console);
        if let Some(hook) = &self.post_initialize {
            tracing::debug!(program = %self.program, "running post_initialize");
            if let Err(err) = hook(&mut instance) {
                instance.error_message(&err);
                return Launch::Finished(ExitStatus::Failure);
            }
        }
        Launch::Ready(instance)
    }

    /// Starts and runs the script against `console`.
    pub fn execute_with<I, T>(&self, args: I, console: Console) -> ExitStatus
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        match self.start(args, console) {
            Launch::Ready(mut instance) => instance.run(),
            Launch::Finished(status) => status,
        }
    }

    /// Starts and runs the script on standard output.
    ///
    /// ```no_run
    /// use std::process::ExitCode;
    /// use script_opts::Script;
    ///
    /// fn main() -> ExitCode {
    ///     let script = Script::new("noop").run(|_| Ok(()));
    ///     script.execute(std::env::args_os().skip(1)).into()
    /// }
    /// ```
    pub fn execute<I, T>(&self, args: I) -> ExitStatus
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.execute_with(args, Console::stdout())
    }
}
