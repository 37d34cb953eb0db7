//! End-to-end runs of declared scripts through `execute_with`.

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;
use script_opts::{Console, ExitStatus, INFO_PREFIX, OptionSpec, OptionValue, Script};
use test_helpers::output::SharedBuffer;
use test_helpers::text::{error_lines, lines_with_prefix};

fn run(script: &Script, args: &[&str]) -> (ExitStatus, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let status = script.execute_with(args.iter().copied(), Console::new(buffer.clone()));
    (status, buffer)
}

fn flag_script(seen: &Rc<Cell<Option<bool>>>) -> Script {
    let sink = Rc::clone(seen);
    Script::new("flagged")
        .option(OptionSpec::new(["-f", "--flag", "Set the flag"]).expect("valid switch"))
        .option(OptionSpec::new(["--path PATH"]).expect("valid switch"))
        .run(move |instance| {
            sink.set(instance.options().get("flag").and_then(OptionValue::as_bool));
            Ok(())
        })
}

#[test]
fn required_path_missing_exits_with_failure() {
    let seen = Rc::new(Cell::new(None));
    let script = flag_script(&seen).require(["path"]);
    let (status, buffer) = run(&script, &[]);
    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(status.code(), 1);
    assert_eq!(
        buffer.contents(),
        "!! missing argument: --path - Run with --help for help.\n"
    );
    assert_eq!(seen.get(), None, "the body must not run");
}

#[test]
fn flag_reaches_the_body() {
    let seen = Rc::new(Cell::new(None));
    let script = flag_script(&seen);
    let (status, buffer) = run(&script, &["--flag"]);
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(seen.get(), Some(true));
    assert!(buffer.contents().is_empty());
}

#[rstest]
#[case::short(&["-h"])]
#[case::long(&["--help"])]
#[case::after_other_switches(&["--flag", "--help", "--unknown"])]
fn help_exits_successfully_without_running(#[case] args: &[&str]) {
    let seen = Rc::new(Cell::new(None));
    let script = flag_script(&seen);
    let (status, buffer) = run(&script, args);
    assert_eq!(status, ExitStatus::Success);
    assert!(buffer.contents().starts_with("Usage: flagged [options]\n"));
    assert_eq!(seen.get(), None);
}

#[rstest]
#[case::unknown(&["--bogus"], "invalid option: --bogus")]
#[case::missing_value(&["--path"], "missing argument: --path")]
#[case::needless_value(&["--flag=yes"], "needless argument: --flag=yes")]
fn rejected_arguments_print_one_error_line(#[case] args: &[&str], #[case] expected: &str) {
    let seen = Rc::new(Cell::new(None));
    let script = flag_script(&seen);
    let (status, buffer) = run(&script, args);
    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(error_lines(&buffer.contents()), [expected]);
}

#[test]
fn verbose_dry_run_narrates_the_body() {
    let script = Script::new("narrate").run(|instance| {
        instance.message("working")?;
        if instance.is_dry_run() {
            instance.info_message("skipping changes")?;
        }
        Ok(())
    });
    let (status, buffer) = run(&script, &["-d"]);
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(buffer.lines(), ["DRY RUN", "working", "** skipping changes"]);
}

#[rstest]
#[case::quiet(&[], 0)]
#[case::verbose(&["-v"], 2)]
#[case::verbose_then_silenced(&["-v", "--no-verbose"], 0)]
fn info_lines_follow_verbosity(#[case] args: &[&str], #[case] expected: usize) {
    let script = Script::new("info").run(|instance| {
        instance.info_message("first")?;
        instance.say("plain")?;
        instance.info_message("second")?;
        Ok(())
    });
    let (status, buffer) = run(&script, args);
    assert_eq!(status, ExitStatus::Success);
    let contents = buffer.contents();
    let info = lines_with_prefix(&contents, INFO_PREFIX);
    assert_eq!(info.len(), expected, "unexpected output: {contents}");
    assert!(info.iter().all(|line| !line.contains("plain")));
}

#[test]
fn no_verbose_after_dry_run_silences_messages() {
    let script = Script::new("quiet").run(|instance| {
        instance.message("working")?;
        Ok(())
    });
    let (status, buffer) = run(&script, &["--dry-run", "--no-verbose"]);
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(buffer.lines(), ["DRY RUN"]);
}

#[test]
fn failing_body_exits_with_failure() {
    let script = Script::new("broken").run(|_| anyhow::bail!("nothing to do"));
    let (status, buffer) = run(&script, &[]);
    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(buffer.lines().first().map(String::as_str), Some("!! FAILED: nothing to do"));
}

#[test]
fn post_initialize_runs_before_the_body() {
    let script = Script::new("ordered")
        .option(
            OptionSpec::new(["-k", "--keep-n-days DAYS"])
                .expect("valid switch")
                .integer(),
        )
        .post_initialize(|instance| {
            if !instance.options().contains("keep_n_days") {
                instance.options_mut().set("keep_n_days", 30_i64);
            }
            Ok(())
        })
        .run(|instance| {
            let days = instance
                .options()
                .get("keep_n_days")
                .map_or_else(String::new, ToString::to_string);
            instance.say(days)?;
            Ok(())
        });
    assert_eq!(run(&script, &[]).1.lines(), ["30"]);
    assert_eq!(run(&script, &["-k", "5"]).1.lines(), ["5"]);
}
