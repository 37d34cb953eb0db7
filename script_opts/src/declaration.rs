//! Declaration set describing a script's command-line surface.
//!
//! A [`Declarations`] value is assembled once, before any argument list is
//! parsed, and then shared by reference with the parser, the help formatter
//! and every [`Instance`](crate::Instance).

use crate::option::OptionSpec;

/// Banner, descriptions, options, required names and accessor names.
#[derive(Debug, Default)]
pub struct Declarations {
    banner: Option<String>,
    descriptions: Vec<String>,
    options: Vec<OptionSpec>,
    required: Vec<String>,
    accessible: Vec<String>,
}

impl Declarations {
    /// Creates an empty declaration set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the banner printed at the top of the help text.
    pub fn set_banner(&mut self, text: impl Into<String>) -> &mut Self {
        self.banner = Some(text.into());
        self
    }

    /// Appends a description paragraph.
    pub fn add_description(&mut self, text: impl Into<String>) -> &mut Self {
        self.descriptions.push(text.into());
        self
    }

    /// Appends a user option; options are registered in declaration order.
    pub fn add_option(&mut self, spec: OptionSpec) -> &mut Self {
        self.options.push(spec);
        self
    }

    /// Adds option names that must hold a value once parsing finishes.
    pub fn require_option<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        union_into(&mut self.required, names);
        self
    }

    /// Adds option names exposed through [`Instance::accessor`](crate::Instance::accessor).
    pub fn add_accessor<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        union_into(&mut self.accessible, names);
        self
    }

    /// Banner text, if one was declared.
    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Description paragraphs in declaration order.
    #[must_use]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// User options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Required option names.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Accessible option names.
    #[must_use]
    pub fn accessible(&self) -> &[String] {
        &self.accessible
    }

    /// Whether `name` was declared accessible.
    #[must_use]
    pub fn is_accessible(&self, name: &str) -> bool {
        self.accessible.iter().any(|declared| declared == name)
    }
}

fn union_into<I, S>(set: &mut Vec<String>, names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for name in names {
        let owned = name.into();
        if !set.contains(&owned) {
            set.push(owned);
        }
    }
}
