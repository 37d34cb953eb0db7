//! Text helpers for assertions on captured script output.

/// Returns the lines of `value` that start with `prefix`, prefix included.
#[must_use]
pub fn lines_with_prefix<'a>(value: &'a str, prefix: &str) -> Vec<&'a str> {
    value
        .lines()
        .filter(|line| line.starts_with(prefix))
        .collect()
}

/// Returns the `!! ` error lines of `value` with the prefix removed.
#[must_use]
pub fn error_lines(value: &str) -> Vec<&str> {
    value
        .lines()
        .filter_map(|line| line.strip_prefix("!! "))
        .collect()
}
