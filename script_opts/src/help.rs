//! Help text in the fixed optparse layout.
//!
//! The order never changes: banner, blank line, description paragraphs
//! separated by blank lines, blank line, `Specific options:` with the
//! built-in dry-run and verbose rows, the user rows, then `Common options:`
//! with the help row.

use crate::builtin::{self, BuiltinSwitch};
use crate::declaration::Declarations;

/// Indent before every switch summary.
const INDENT: &str = "    ";
/// Width of the switch column.
const WIDTH: usize = 32;

/// Renders the help text for `declarations`.
///
/// `program` fills the default banner, `Usage: <program> [options]`, used
/// when no banner was declared.
///
/// # Examples
///
/// ```
/// use script_opts::{Declarations, render_help};
///
/// let mut declarations = Declarations::new();
/// declarations.set_banner("Usage: ./tool [options]");
/// let help = render_help("tool", &declarations);
/// assert!(help.starts_with("Usage: ./tool [options]\n\n\nSpecific options:\n"));
/// assert!(help.ends_with("    -h, --help                       Show this message\n"));
/// ```
#[must_use]
pub fn render_help(program: &str, declarations: &Declarations) -> String {
    let mut lines = vec![
        declarations
            .banner()
            .map_or_else(|| format!("Usage: {program} [options]"), str::to_owned),
        String::new(),
    ];
    for (index, description) in declarations.descriptions().iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(description.clone());
    }
    lines.push(String::new());

    lines.push("Specific options:".to_owned());
    lines.extend(builtin_row(&builtin::DRY_RUN));
    lines.extend(builtin_row(&builtin::VERBOSE));
    lines.push(String::new());
    for spec in declarations.options() {
        lines.extend(row(&spec.summary(), spec.help_lines()));
    }
    lines.push(String::new());

    lines.push("Common options:".to_owned());
    lines.extend(builtin_row(&builtin::HELP));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn builtin_row(switch: &BuiltinSwitch) -> Vec<String> {
    row(switch.summary, switch.help)
}

/// Lays out one switch: summary padded to [`WIDTH`], help lines aligned in
/// the second column. Summaries wider than the column push every help line
/// onto its own row.
fn row<S: AsRef<str>>(summary: &str, help: &[S]) -> Vec<String> {
    let continuation = " ".repeat(INDENT.len() + WIDTH + 1);
    let mut help_lines = help.iter().map(AsRef::as_ref);
    let mut rows = Vec::with_capacity(help.len().max(1));
    if summary.chars().count() > WIDTH {
        rows.push(format!("{INDENT}{summary}"));
    } else if let Some(first) = help_lines.next() {
        rows.push(format!("{INDENT}{summary:<WIDTH$} {first}"));
    } else {
        rows.push(format!("{INDENT}{summary}"));
    }
    rows.extend(help_lines.map(|line| format!("{continuation}{line}")));
    rows
}
