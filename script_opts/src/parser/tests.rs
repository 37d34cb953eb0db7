//! Unit tests for the declaration-driven parser.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow, bail, ensure};
use rstest::{fixture, rstest};

use super::*;
use crate::error::ParseErrorKind;
use crate::option::OptionSpec;
use crate::value::OptionValue;

type Calls = Rc<RefCell<Vec<(String, Option<OptionValue>)>>>;

/// Declarations whose handlers record every call.
struct Recorded {
    declarations: Declarations,
    calls: Calls,
}

fn recording(calls: &Calls, key: &'static str) -> impl Fn(&mut Options, Option<OptionValue>) + 'static {
    let sink = Rc::clone(calls);
    move |options, value| {
        sink.borrow_mut().push((key.to_owned(), value.clone()));
        options.assign(key, value);
    }
}

#[fixture]
fn recorded() -> Recorded {
    let calls: Calls = Rc::default();
    let mut declarations = Declarations::new();
    let specs = [
        OptionSpec::new(["-p", "--pass-param PARAM", "Pass a param"])
            .map(|spec| spec.on(recording(&calls, "param"))),
        OptionSpec::new(["-r", "--run-fast", "Something"])
            .map(|spec| spec.on(recording(&calls, "fast"))),
        OptionSpec::new(["-l", "--level [LEVEL]"]).map(|spec| spec.on(recording(&calls, "level"))),
        OptionSpec::new(["-k", "--keep-n-days DAYS"]).map(OptionSpec::integer),
        OptionSpec::new(["--[no-]colour"]),
    ];
    for valid in specs.into_iter().flatten() {
        declarations.add_option(valid);
    }
    Recorded { declarations, calls }
}

fn success(outcome: ParseOutcome) -> Result<Parsed> {
    match outcome {
        ParseOutcome::Success(parsed) => Ok(parsed),
        other => Err(anyhow!("expected success, got {other:?}")),
    }
}

fn failure(outcome: ParseOutcome) -> Result<ParseError> {
    match outcome {
        ParseOutcome::Error(err) => Ok(err),
        other => Err(anyhow!("expected an error, got {other:?}")),
    }
}

#[rstest]
fn fixture_declares_every_option(recorded: Recorded) {
    assert_eq!(recorded.declarations.options().len(), 5);
}

#[rstest]
fn no_arguments_leave_the_seeded_defaults(recorded: Recorded) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, Vec::<String>::new()))?;
    ensure!(parsed.options == Options::new());
    ensure!(parsed.remaining.is_empty());
    Ok(())
}

#[rstest]
fn boolean_handler_receives_true(recorded: Recorded) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, ["--run-fast"]))?;
    ensure!(parsed.options.flag("fast"));
    ensure!(
        *recorded.calls.borrow() == [("fast".to_owned(), Some(OptionValue::Bool(true)))]
    );
    Ok(())
}

#[rstest]
#[case::separate(&["--pass-param", "some value"])]
#[case::equals(&["--pass-param=some value"])]
#[case::short(&["-p", "some value"])]
fn valued_handler_receives_the_exact_string(
    recorded: Recorded,
    #[case] args: &[&str],
) -> Result<()> {
    success(parse("t", &recorded.declarations, args))?;
    ensure!(
        *recorded.calls.borrow()
            == [("param".to_owned(), Some(OptionValue::from("some value")))]
    );
    Ok(())
}

#[rstest]
#[case::short_switch(&["-p", "-x"], "-x")]
#[case::long_switch(&["--pass-param", "--weird"], "--weird")]
#[case::help_switch(&["-p", "--help"], "--help")]
fn required_values_may_look_like_switches(
    recorded: Recorded,
    #[case] args: &[&str],
    #[case] expected: &str,
) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, args))?;
    ensure!(parsed.options.get("param") == Some(&OptionValue::from(expected)));
    ensure!(*recorded.calls.borrow() == [("param".to_owned(), Some(OptionValue::from(expected)))]);
    Ok(())
}

#[rstest]
fn negative_integer_values_are_accepted(recorded: Recorded) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, ["-k", "-5"]))?;
    ensure!(parsed.options.get("keep_n_days") == Some(&OptionValue::Integer(-5)));
    Ok(())
}

#[rstest]
fn omitted_optional_value_reaches_the_handler_as_none(recorded: Recorded) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, ["--level"]))?;
    ensure!(!parsed.options.contains("level"));
    ensure!(*recorded.calls.borrow() == [("level".to_owned(), None)]);
    Ok(())
}

#[rstest]
fn handlers_fire_in_command_line_order(recorded: Recorded) -> Result<()> {
    success(parse(
        "t",
        &recorded.declarations,
        ["--level", "3", "-r", "-p", "x"],
    ))?;
    let order: Vec<String> = recorded
        .calls
        .borrow()
        .iter()
        .map(|(key, _)| key.clone())
        .collect();
    ensure!(order == ["level", "fast", "param"], "order was {order:?}");
    Ok(())
}

#[rstest]
#[case::dry_run_alone(&["--dry-run"], true, true)]
#[case::short_dry_run(&["-d"], true, true)]
#[case::negated_before_dry_run(&["--no-verbose", "--dry-run"], true, true)]
#[case::negated_after_dry_run(&["--dry-run", "--no-verbose"], true, false)]
#[case::verbose_only(&["-v"], false, true)]
#[case::verbose_then_negated(&["--verbose", "--no-verbose"], false, false)]
fn dry_run_implies_verbose_until_overridden(
    recorded: Recorded,
    #[case] args: &[&str],
    #[case] dry_run: bool,
    #[case] verbose: bool,
) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, args))?;
    ensure!(parsed.options.dry_run() == dry_run);
    ensure!(parsed.options.verbose() == verbose);
    Ok(())
}

#[rstest]
fn short_and_long_help_are_identical(recorded: Recorded) -> Result<()> {
    let short = parse("t", &recorded.declarations, ["-h"]);
    let long = parse("t", &recorded.declarations, ["--help"]);
    let ParseOutcome::HelpRequested(text) = &short else {
        bail!("expected help, got {short:?}");
    };
    ensure!(text.starts_with("Usage: t [options]\n"));
    ensure!(short == long);
    Ok(())
}

#[rstest]
#[case::first(&["--help", "--run-fast", "-p", "x"])]
#[case::middle(&["--run-fast", "--help", "--bogus"])]
#[case::last(&["-p", "x", "--help"])]
fn help_fires_no_handlers(recorded: Recorded, #[case] args: &[&str]) -> Result<()> {
    let outcome = parse("t", &recorded.declarations, args);
    ensure!(matches!(outcome, ParseOutcome::HelpRequested(_)));
    ensure!(recorded.calls.borrow().is_empty());
    Ok(())
}

#[rstest]
fn unknown_switch_fails(recorded: Recorded) -> Result<()> {
    let err = failure(parse("t", &recorded.declarations, ["--bogus", "--help"]))?;
    ensure!(err.kind() == ParseErrorKind::InvalidOption);
    ensure!(err.to_string() == "invalid option: --bogus");
    Ok(())
}

#[rstest]
fn required_option_missing_is_reported_with_dashes(mut recorded: Recorded) -> Result<()> {
    recorded.declarations.require_option(["pass_param"]);
    let err = failure(parse("t", &recorded.declarations, ["-r"]))?;
    ensure!(err.to_string() == "missing argument: --pass-param - Run with --help for help.");
    Ok(())
}

#[rstest]
fn required_option_set_by_a_handler_passes(mut recorded: Recorded) -> Result<()> {
    recorded.declarations.require_option(["param"]);
    success(parse("t", &recorded.declarations, ["-p", "given"]))?;
    Ok(())
}

#[rstest]
fn integer_options_are_coerced(recorded: Recorded) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, ["-k", "14"]))?;
    ensure!(parsed.options.get("keep_n_days") == Some(&OptionValue::Integer(14)));
    Ok(())
}

#[rstest]
fn non_numeric_integer_is_an_invalid_argument(recorded: Recorded) -> Result<()> {
    let err = failure(parse("t", &recorded.declarations, ["--keep-n-days", "soon"]))?;
    ensure!(err.to_string() == "invalid argument: --keep-n-days soon");
    Ok(())
}

#[rstest]
#[case::positive(&["--colour"], true)]
#[case::negative(&["--no-colour"], false)]
#[case::last_wins(&["--colour", "--no-colour"], false)]
fn negatable_user_flags(
    recorded: Recorded,
    #[case] args: &[&str],
    #[case] expected: bool,
) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, args))?;
    ensure!(parsed.options.get("colour") == Some(&OptionValue::Bool(expected)));
    Ok(())
}

#[rstest]
fn non_option_arguments_are_kept(recorded: Recorded) -> Result<()> {
    let parsed = success(parse("t", &recorded.declarations, ["-r", "a.txt", "b.txt"]))?;
    ensure!(parsed.remaining == [OsString::from("a.txt"), OsString::from("b.txt")]);
    Ok(())
}

#[test]
fn switch_colliding_with_a_builtin_is_rejected() -> Result<()> {
    let mut declarations = Declarations::new();
    declarations.add_option(OptionSpec::new(["-v", "--version"])?);
    let err = failure(parse("t", &declarations, Vec::<String>::new()))?;
    ensure!(err.kind() == ParseErrorKind::DuplicateSwitch);
    ensure!(err.detail() == "-v");
    Ok(())
}
