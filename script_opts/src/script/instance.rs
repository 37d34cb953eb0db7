//! A parsed invocation of a [`Script`].

use std::backtrace::BacktraceStatus;
use std::ffi::OsString;
use std::fmt::{self, Display};
use std::io;

use super::{ExitStatus, Script};
use crate::console::{Console, INFO_PREFIX};
use crate::error::ScriptError;
use crate::parser::Parsed;
use crate::value::{OptionValue, Options};

/// One parsed invocation: the options mapping, the raw arguments and the
/// console the script prints to.
///
/// `verbose` and `dry_run` are snapshots taken after parsing. The
/// `post_initialize` hook may still change the mapping; [`Instance::is_dry_run`]
/// reads it live.
pub struct Instance<'s> {
    script: &'s Script,
    args: Vec<OsString>,
    remaining: Vec<OsString>,
    options: Options,
    verbose: bool,
    dry_run: bool,
    console: Console,
}

impl fmt::Debug for Instance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("program", &self.script.program())
            .field("args", &self.args)
            .field("remaining", &self.remaining)
            .field("options", &self.options)
            .field("verbose", &self.verbose)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl<'s> Instance<'s> {
    pub(super) fn new(
        script: &'s Script,
        args: Vec<OsString>,
        parsed: Parsed,
        console: Console,
    ) -> Self {
        let Parsed { options, remaining } = parsed;
        Self {
            script,
            args,
            remaining,
            verbose: options.verbose(),
            dry_run: options.dry_run(),
            options,
            console,
        }
    }

    /// The script this instance was started from.
    #[must_use]
    pub const fn script(&self) -> &'s Script {
        self.script
    }

    /// The argument list as given, help and switches included.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Arguments left over after parsing.
    #[must_use]
    pub fn remaining(&self) -> &[OsString] {
        &self.remaining
    }

    /// The options mapping.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable options mapping, for hooks that fill in defaults.
    pub const fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Verbosity as parsed.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Dry-run mode as parsed.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Current dry-run value of the mapping.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.options.dry_run()
    }

    /// Prints `text` when running verbosely.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to the console.
    pub fn message(&mut self, text: impl Display) -> io::Result<()> {
        if self.verbose {
            self.console.line(text)?;
        }
        Ok(())
    }

    /// Prints `text` with the `** ` prefix when running verbosely.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to the console.
    pub fn info_message(&mut self, text: impl Display) -> io::Result<()> {
        self.message(format_args!("{INFO_PREFIX}{text}"))
    }

    /// Prints `text` with the `!! ` prefix, whatever the verbosity.
    pub fn error_message(&mut self, text: impl Display) {
        self.console.error(text);
    }

    /// Prints `text` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to the console.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        self.console.line(text)
    }

    /// Reads an option exposed with [`Script::accessor`].
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::UndeclaredAccessor`] when `name` was not
    /// exposed.
    pub fn accessor(&self, name: &str) -> Result<Option<&OptionValue>, ScriptError> {
        self.check_accessible(name)?;
        Ok(self.options.get(name))
    }

    /// Writes an option exposed with [`Script::accessor`].
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::UndeclaredAccessor`] when `name` was not
    /// exposed.
    pub fn set_accessor(
        &mut self,
        name: &str,
        value: impl Into<OptionValue>,
    ) -> Result<(), ScriptError> {
        self.check_accessible(name)?;
        self.options.set(name, value);
        Ok(())
    }

    fn check_accessible(&self, name: &str) -> Result<(), ScriptError> {
        if self.script.declarations().is_accessible(name) {
            Ok(())
        } else {
            Err(ScriptError::UndeclaredAccessor {
                name: name.to_owned(),
            })
        }
    }

    /// Runs the script body and reports how it ended.
    ///
    /// Prints `DRY RUN` first when dry-run mode is on. A failing body is
    /// reported as `!! FAILED: <message>` followed by its causes.
    pub fn run(&mut self) -> ExitStatus {
        let script = self.script;
        let Some(body) = script.body.as_ref() else {
            self.console.error(format_args!(
                "FAILED: {} does not implement run",
                script.program()
            ));
            return ExitStatus::Failure;
        };

        if self.is_dry_run() {
            self.console.report("DRY RUN");
        }
        tracing::debug!(program = %script.program(), options = %self.options, "running script");
        match body(self) {
            Ok(()) => ExitStatus::Success,
            Err(err) => {
                tracing::debug!(program = %script.program(), error = %err, "script failed");
                self.report_failure(&err);
                ExitStatus::Failure
            }
        }
    }

    fn report_failure(&mut self, err: &anyhow::Error) {
        self.console.error(format_args!("FAILED: {err}"));
        for cause in err.chain().skip(1) {
            self.console.report(format_args!("    caused by: {cause}"));
        }
        let backtrace = err.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            self.console.report(backtrace);
        }
    }
}
