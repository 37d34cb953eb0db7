//! Parsed option values and the per-instance options mapping.
//!
//! [`Options`] is created fresh for every parse. It starts with `dry_run` and
//! `verbose` set to `false` and is then written by whichever option handlers
//! fire. Option names are plain strings; an absent entry plays the role of
//! "not set" for required-option checks.

use std::fmt;

use indexmap::IndexMap;

/// Key of the built-in dry-run entry.
pub const DRY_RUN: &str = "dry_run";
/// Key of the built-in verbosity entry.
pub const VERBOSE: &str = "verbose";

/// A single value stored in [`Options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Boolean switch state.
    Bool(bool),
    /// Raw text supplied on the command line.
    Text(String),
    /// Value coerced to an integer by an [`integer`](crate::OptionSpec::integer) option.
    Integer(i64),
}

impl OptionValue {
    /// Returns the boolean payload, if this is a [`OptionValue::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a [`OptionValue::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is a [`OptionValue::Integer`].
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Integer(number) => write!(f, "{number}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Conversion between Rust types and [`OptionValue`] used by typed accessors.
pub trait OptionType: Sized {
    /// Extracts `Self` from a stored value, returning `None` on a type mismatch.
    fn from_value(value: &OptionValue) -> Option<Self>;

    /// Wraps `self` for storage.
    fn into_value(self) -> OptionValue;
}

impl OptionType for bool {
    fn from_value(value: &OptionValue) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> OptionValue {
        OptionValue::Bool(self)
    }
}

impl OptionType for i64 {
    fn from_value(value: &OptionValue) -> Option<Self> {
        value.as_integer()
    }

    fn into_value(self) -> OptionValue {
        OptionValue::Integer(self)
    }
}

impl OptionType for String {
    fn from_value(value: &OptionValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn into_value(self) -> OptionValue {
        OptionValue::Text(self)
    }
}

/// Mutable name/value mapping populated while parsing.
///
/// Entries keep their insertion order so [`Display`](fmt::Display) output
/// follows the order in which options were first set.
///
/// # Examples
///
/// ```
/// use script_opts::{OptionValue, Options};
///
/// let mut options = Options::new();
/// assert!(!options.verbose());
/// options.set("path", "/tmp");
/// assert_eq!(options.get("path"), Some(&OptionValue::from("/tmp")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    values: IndexMap<String, OptionValue>,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Creates a mapping seeded with `dry_run = false` and `verbose = false`.
    #[must_use]
    pub fn new() -> Self {
        let mut values = IndexMap::new();
        values.insert(DRY_RUN.to_owned(), OptionValue::Bool(false));
        values.insert(VERBOSE.to_owned(), OptionValue::Bool(false));
        Self { values }
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Returns `true` when `name` has a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) {
        self.values.insert(name.to_owned(), value.into());
    }

    /// Stores `value` when present, otherwise clears `name`.
    pub fn assign(&mut self, name: &str, value: Option<OptionValue>) {
        match value {
            Some(present) => self.set(name, present),
            None => {
                self.remove(name);
            }
        }
    }

    /// Clears `name`, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.values.shift_remove(name)
    }

    /// Current dry-run state.
    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.flag(DRY_RUN)
    }

    /// Current verbosity.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.flag(VERBOSE)
    }

    /// Reads `name` as a boolean, treating absent or non-boolean values as `false`.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(OptionValue::as_bool).unwrap_or(false)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#<options")?;
        let mut separator = " ";
        for (name, value) in self.iter() {
            write!(f, "{separator}{name}={value}")?;
            separator = ", ";
        }
        f.write_str(">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_options_are_seeded_with_builtins() {
        let options = Options::new();
        assert!(!options.dry_run());
        assert!(!options.verbose());
        assert_eq!(options.iter().count(), 2);
    }

    #[test]
    fn assign_none_clears_the_entry() {
        let mut options = Options::new();
        options.set("path", "here");
        options.assign("path", None);
        assert!(!options.contains("path"));
    }

    #[test]
    fn display_follows_insertion_order() {
        let mut options = Options::new();
        options.set("param", "abc");
        options.set("fast", true);
        assert_eq!(
            options.to_string(),
            "#<options dry_run=false, verbose=false, param=\"abc\", fast=true>"
        );
    }

    #[rstest]
    #[case::boolean(OptionValue::Bool(true), Some(true), None, None)]
    #[case::text(OptionValue::from("x"), None, Some("x"), None)]
    #[case::integer(OptionValue::Integer(7), None, None, Some(7))]
    fn payload_accessors_match_variant(
        #[case] value: OptionValue,
        #[case] boolean: Option<bool>,
        #[case] text: Option<&str>,
        #[case] integer: Option<i64>,
    ) {
        assert_eq!(value.as_bool(), boolean);
        assert_eq!(value.as_str(), text);
        assert_eq!(value.as_integer(), integer);
    }

    #[test]
    fn option_type_rejects_mismatched_values() {
        assert_eq!(i64::from_value(&OptionValue::from("12")), None);
        assert_eq!(String::from_value(&OptionValue::from("12")), Some("12".to_owned()));
    }
}
