//! Replays matched switches through their handlers in command-line order.

use clap::ArgMatches;
use clap::parser::ValueSource;

use super::command::{
    DRY_RUN_ID, NO_VERBOSE_ID, OMITTED, VERBOSE_ID, negated_id, option_id,
};
use crate::declaration::Declarations;
use crate::error::{ParseError, ParseErrorKind};
use crate::option::{Arity, OptionSpec};
use crate::value::{DRY_RUN, OptionValue, Options, VERBOSE};

/// What a matched switch does.
pub(super) enum Effect<'d> {
    DryRun,
    Verbose(bool),
    User(&'d OptionSpec, Option<OptionValue>),
}

/// A matched switch and its position on the command line.
pub(super) struct Occurrence<'d> {
    index: usize,
    effect: Effect<'d>,
}

/// Collects every matched switch, sorted by its position on the command line.
pub(super) fn occurrences<'d>(
    matches: &ArgMatches,
    declarations: &'d Declarations,
) -> Result<Vec<Occurrence<'d>>, ParseError> {
    let mut found = Vec::new();
    push_flag(&mut found, matches, DRY_RUN_ID, || Effect::DryRun);
    push_flag(&mut found, matches, VERBOSE_ID, || Effect::Verbose(true));
    push_flag(&mut found, matches, NO_VERBOSE_ID, || Effect::Verbose(false));

    for (index, spec) in declarations.options().iter().enumerate() {
        let id = option_id(index);
        match spec.arity() {
            Arity::Flag => push_flag(&mut found, matches, &id, || {
                Effect::User(spec, Some(OptionValue::Bool(true)))
            }),
            Arity::Required | Arity::Optional => {
                push_values(&mut found, matches, &id, spec)?;
            }
        }
        if spec.is_negatable() {
            push_flag(&mut found, matches, &negated_id(index), || {
                Effect::User(spec, Some(OptionValue::Bool(false)))
            });
        }
    }

    found.sort_by_key(|occurrence| occurrence.index);
    Ok(found)
}

/// Applies occurrences to `options` in order.
pub(super) fn apply(found: Vec<Occurrence<'_>>, options: &mut Options) {
    for Occurrence { index, effect } in found {
        match effect {
            Effect::DryRun => {
                tracing::debug!(index, "dry run requested");
                options.set(DRY_RUN, true);
                options.set(VERBOSE, true);
            }
            Effect::Verbose(flag) => {
                tracing::debug!(index, verbose = flag, "verbosity set");
                options.set(VERBOSE, flag);
            }
            Effect::User(spec, value) => {
                tracing::debug!(index, option = %spec.name(), "firing option handler");
                spec.fire(options, value);
            }
        }
    }
}

fn push_flag<'d>(
    found: &mut Vec<Occurrence<'d>>,
    matches: &ArgMatches,
    id: &str,
    effect: impl FnOnce() -> Effect<'d>,
) {
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return;
    }
    if let Some(index) = matches.index_of(id) {
        found.push(Occurrence {
            index,
            effect: effect(),
        });
    }
}

fn push_values<'d>(
    found: &mut Vec<Occurrence<'d>>,
    matches: &ArgMatches,
    id: &str,
    spec: &'d OptionSpec,
) -> Result<(), ParseError> {
    let (Some(indices), Some(values)) = (matches.indices_of(id), matches.get_many::<String>(id))
    else {
        return Ok(());
    };
    for (index, raw) in indices.zip(values) {
        found.push(Occurrence {
            index,
            effect: Effect::User(spec, coerce(spec, raw)?),
        });
    }
    Ok(())
}

fn coerce(spec: &OptionSpec, raw: &str) -> Result<Option<OptionValue>, ParseError> {
    if raw == OMITTED {
        return Ok(None);
    }
    if !spec.is_integer() {
        return Ok(Some(OptionValue::from(raw)));
    }
    raw.trim()
        .parse::<i64>()
        .map(|number| Some(OptionValue::Integer(number)))
        .map_err(|_| {
            ParseError::new(
                ParseErrorKind::InvalidArgument,
                format!("{} {raw}", switch_label(spec)),
            )
        })
}

fn switch_label(spec: &OptionSpec) -> String {
    spec.longs().first().map_or_else(
        || spec.shorts().iter().take(1).map(|short| format!("-{short}")).collect(),
        |long| format!("--{long}"),
    )
}
