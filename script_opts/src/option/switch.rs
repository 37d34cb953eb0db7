//! Classification of optparse-style switch tokens.

use crate::error::DeclarationError;

/// Value expectation attached to a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `--path PATH`: the value must follow the switch.
    Required(String),
    /// `--path [PATH]`: the value may be omitted.
    Optional(String),
}

impl Placeholder {
    fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(
            trimmed
                .strip_prefix('[')
                .and_then(|inner| inner.strip_suffix(']'))
                .map_or_else(
                    || Self::Required(trimmed.to_owned()),
                    |inner| Self::Optional(inner.trim_start_matches('=').to_owned()),
                ),
        )
    }

    /// Name shown in help and error output.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Required(name) | Self::Optional(name) => name,
        }
    }

    /// Help-column rendering: ` PATH` or ` [PATH]`.
    pub(crate) fn summary(&self) -> String {
        match self {
            Self::Required(name) => format!(" {name}"),
            Self::Optional(name) => format!(" [{name}]"),
        }
    }
}

/// One declaration token after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Short {
        flag: char,
        placeholder: Option<Placeholder>,
    },
    Long {
        name: String,
        negatable: bool,
        placeholder: Option<Placeholder>,
    },
    Help(String),
}

pub(crate) fn classify(token: &str) -> Result<Token, DeclarationError> {
    if let Some(rest) = token.strip_prefix("--") {
        return classify_long(token, rest);
    }
    if let Some(rest) = token.strip_prefix('-') {
        return classify_short(token, rest);
    }
    Ok(Token::Help(token.to_owned()))
}

fn classify_long(token: &str, rest: &str) -> Result<Token, DeclarationError> {
    let (body, negatable) = rest
        .strip_prefix("[no-]")
        .map_or((rest, false), |stripped| (stripped, true));
    let (name, placeholder) = if let Some((name, tail)) = body.split_once("[=") {
        (name, Placeholder::parse(&format!("[{tail}")))
    } else if let Some((name, tail)) = body.split_once(|ch: char| ch == ' ' || ch == '=') {
        (name, Placeholder::parse(tail))
    } else {
        (body, None)
    };
    if name.is_empty() {
        return Err(DeclarationError::EmptySwitch(token.to_owned()));
    }
    Ok(Token::Long {
        name: name.to_owned(),
        negatable,
        placeholder,
    })
}

fn classify_short(token: &str, rest: &str) -> Result<Token, DeclarationError> {
    let mut chars = rest.chars();
    let Some(flag) = chars.next().filter(|ch| !ch.is_whitespace()) else {
        return Err(DeclarationError::EmptySwitch(token.to_owned()));
    };
    let tail = chars.as_str();
    if !tail.is_empty() && !tail.starts_with([' ', '[']) {
        return Err(DeclarationError::LongShortSwitch(token.to_owned()));
    }
    Ok(Token::Short {
        flag,
        placeholder: Placeholder::parse(tail),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn long(name: &str, negatable: bool, placeholder: Option<Placeholder>) -> Token {
        Token::Long {
            name: name.to_owned(),
            negatable,
            placeholder,
        }
    }

    #[rstest]
    #[case::flag("--run-fast", long("run-fast", false, None))]
    #[case::required("--pass-param PARAM", long("pass-param", false, Some(Placeholder::Required("PARAM".into()))))]
    #[case::equals("--path=PATH", long("path", false, Some(Placeholder::Required("PATH".into()))))]
    #[case::optional("--level [LEVEL]", long("level", false, Some(Placeholder::Optional("LEVEL".into()))))]
    #[case::optparse_optional("--level[=LEVEL]", long("level", false, Some(Placeholder::Optional("LEVEL".into()))))]
    #[case::negatable("--[no-]verbose", long("verbose", true, None))]
    #[case::short_flag("-x", Token::Short { flag: 'x', placeholder: None })]
    #[case::short_value("-p PATH", Token::Short { flag: 'p', placeholder: Some(Placeholder::Required("PATH".into())) })]
    #[case::help("marks the spot", Token::Help("marks the spot".into()))]
    fn classifies_tokens(#[case] token: &str, #[case] expected: Token) {
        assert_eq!(classify(token), Ok(expected));
    }

    #[rstest]
    #[case::bare_dash("-", DeclarationError::EmptySwitch("-".into()))]
    #[case::bare_double_dash("--", DeclarationError::EmptySwitch("--".into()))]
    #[case::clustered("-ab", DeclarationError::LongShortSwitch("-ab".into()))]
    fn rejects_malformed_switches(#[case] token: &str, #[case] expected: DeclarationError) {
        assert_eq!(classify(token), Err(expected));
    }

    #[test]
    fn placeholder_summary_brackets_optional_values() {
        assert_eq!(Placeholder::Optional("N".into()).summary(), " [N]");
        assert_eq!(Placeholder::Required("N".into()).summary(), " N");
    }
}
