//! Construction of the `clap` command backing a declaration set.
//!
//! Argument ids are positional (`option:<n>`) rather than derived from switch
//! names, so user declarations can never collide with the built-ins at the id
//! level. Switch collisions are detected separately before `clap` sees them.

use std::collections::HashSet;
use std::ffi::OsString;

use clap::{Arg, ArgAction, ColorChoice, Command};

use crate::builtin;
use crate::declaration::Declarations;
use crate::error::{ParseError, ParseErrorKind};
use crate::option::{Arity, OptionSpec};

pub(super) const DRY_RUN_ID: &str = "builtin:dry-run";
pub(super) const VERBOSE_ID: &str = "builtin:verbose";
pub(super) const NO_VERBOSE_ID: &str = "builtin:no-verbose";
pub(super) const HELP_ID: &str = "builtin:help";
pub(super) const REMAINING_ID: &str = "remaining";

/// Stand-in value for an omitted optional value. Process arguments cannot
/// contain NUL, so it never clashes with real input.
pub(super) const OMITTED: &str = "\u{0}";

pub(super) fn option_id(index: usize) -> String {
    format!("option:{index}")
}

pub(super) fn negated_id(index: usize) -> String {
    format!("option:{index}:no")
}

/// Rejects declarations that claim a switch twice, built-ins included.
pub(super) fn check_switches(declarations: &Declarations) -> Result<(), ParseError> {
    let mut shorts: HashSet<char> = builtin::ALL.iter().map(|switch| switch.short).collect();
    let mut longs: HashSet<String> = builtin::ALL
        .iter()
        .map(|switch| switch.long.to_owned())
        .collect();
    longs.insert(format!("no-{}", builtin::VERBOSE.long));

    for spec in declarations.options() {
        for short in spec.shorts() {
            if !shorts.insert(*short) {
                return Err(duplicate(format!("-{short}")));
            }
        }
        for long in spec.longs() {
            if !longs.insert(long.clone()) {
                return Err(duplicate(format!("--{long}")));
            }
            if spec.is_negatable() && !longs.insert(format!("no-{long}")) {
                return Err(duplicate(format!("--no-{long}")));
            }
        }
    }
    Ok(())
}

fn duplicate(switch: String) -> ParseError {
    ParseError::new(ParseErrorKind::DuplicateSwitch, switch)
}

/// Builds the command in registration order: built-ins, user options, help.
pub(super) fn build(program: &str, declarations: &Declarations) -> Command {
    let mut command = Command::new(program.to_owned())
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .color(ColorChoice::Never)
        .arg(
            Arg::new(DRY_RUN_ID)
                .short(builtin::DRY_RUN.short)
                .long(builtin::DRY_RUN.long)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(VERBOSE_ID)
                .short(builtin::VERBOSE.short)
                .long(builtin::VERBOSE.long)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(NO_VERBOSE_ID)
                .long(format!("no-{}", builtin::VERBOSE.long))
                .action(ArgAction::SetTrue),
        );

    for (index, spec) in declarations.options().iter().enumerate() {
        command = command.arg(user_arg(option_id(index), spec));
        if spec.is_negatable() {
            command = command.arg(negated_arg(negated_id(index), spec));
        }
    }

    command
        .arg(
            Arg::new(HELP_ID)
                .short(builtin::HELP.short)
                .long(builtin::HELP.long)
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new(REMAINING_ID)
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(OsString)),
        )
}

fn user_arg(id: String, spec: &OptionSpec) -> Arg {
    let mut arg = Arg::new(id);
    for (position, short) in spec.shorts().iter().enumerate() {
        arg = if position == 0 {
            arg.short(*short)
        } else {
            arg.short_alias(*short)
        };
    }
    for (position, long) in spec.longs().iter().enumerate() {
        arg = if position == 0 {
            arg.long(long.clone())
        } else {
            arg.alias(long.clone())
        };
    }
    let value_name = spec.placeholder().map(|placeholder| placeholder.name().to_owned());
    match (spec.arity(), value_name) {
        // A required value is the next argument, even one that looks like a switch.
        (Arity::Required, Some(name)) => arg
            .action(ArgAction::Append)
            .num_args(1)
            .allow_hyphen_values(true)
            .value_name(name),
        (Arity::Optional, Some(name)) => arg
            .action(ArgAction::Append)
            .num_args(0..=1)
            .default_missing_value(OMITTED)
            .value_name(name),
        _ => arg.action(ArgAction::SetTrue),
    }
}

fn negated_arg(id: String, spec: &OptionSpec) -> Arg {
    let mut arg = Arg::new(id).action(ArgAction::SetTrue);
    for (position, long) in spec.longs().iter().enumerate() {
        let negated = format!("no-{long}");
        arg = if position == 0 {
            arg.long(negated)
        } else {
            arg.alias(negated)
        };
    }
    arg
}
