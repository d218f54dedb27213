//! Relationship label grammar.
//!
//! An association label names the relation and optionally carries a
//! cardinality token in trailing parentheses:
//!
//! ```text
//! label       := name [ws] "(" token ")"
//!              | text
//! token       := word-char+
//! ```
//!
//! The token `1` (in any case) means a single instance; every other token
//! means many. Labels without the suffix are single.

use winnow::{
    Parser as _, combinator::delimited, error::ModalResult, token::take_while,
};

use draftsmith_core::model::Cardinality;

type Input<'a> = &'a str;

/// A parsed relationship label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationLabel {
    /// The relation name, possibly empty.
    pub name: String,
    /// The cardinality decided by the suffix token.
    pub cardinality: Cardinality,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse `(token)` and yield the token.
fn cardinality_suffix<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    delimited('(', take_while(1.., is_word_char), ')').parse_next(input)
}

/// Split `text` into its name and cardinality token, if it has a suffix.
///
/// At least one character must precede the opening parenthesis, so a bare
/// `(N)` is a name rather than a token.
fn split_suffix(text: &str) -> Option<(&str, &str)> {
    let open = text.rfind('(')?;
    let (head, tail) = text.split_at(open);
    if head.is_empty() {
        return None;
    }
    let token = cardinality_suffix.parse(tail).ok()?;
    Some((head.trim_end(), token))
}

/// Decide the cardinality a token stands for.
pub fn cardinality_of(token: &str) -> Cardinality {
    if token.to_uppercase() == "1" {
        Cardinality::Single
    } else {
        Cardinality::Many
    }
}

/// Parse a relationship label.
///
/// ```
/// # use draftsmith_core::model::Cardinality;
/// # use draftsmith_parser::parse_label;
/// let label = parse_label("has (N)");
/// assert_eq!(label.name, "has");
/// assert_eq!(label.cardinality, Cardinality::Many);
/// ```
pub fn parse_label(text: &str) -> RelationLabel {
    let text = text.trim();
    match split_suffix(text) {
        Some((name, token)) => RelationLabel {
            name: name.to_string(),
            cardinality: cardinality_of(token),
        },
        None => RelationLabel {
            name: text.to_string(),
            cardinality: Cardinality::Single,
        },
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn label(text: &str) -> (String, Cardinality) {
        let parsed = parse_label(text);
        (parsed.name, parsed.cardinality)
    }

    #[test]
    fn test_single_token() {
        assert_eq!(label("drives (1)"), ("drives".to_string(), Cardinality::Single));
    }

    #[test]
    fn test_many_token_any_case() {
        assert_eq!(label("has (N)"), ("has".to_string(), Cardinality::Many));
        assert_eq!(label("has (n)"), ("has".to_string(), Cardinality::Many));
    }

    #[test]
    fn test_other_tokens_are_many() {
        assert_eq!(label("seats (5)"), ("seats".to_string(), Cardinality::Many));
        assert_eq!(label("owns (many)"), ("owns".to_string(), Cardinality::Many));
        assert_eq!(label("owns (0)"), ("owns".to_string(), Cardinality::Many));
    }

    #[test]
    fn test_without_suffix() {
        assert_eq!(label("drives"), ("drives".to_string(), Cardinality::Single));
        assert_eq!(
            label("  enrolled in "),
            ("enrolled in".to_string(), Cardinality::Single)
        );
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(label(""), (String::new(), Cardinality::Single));
        assert_eq!(label("   "), (String::new(), Cardinality::Single));
    }

    #[test]
    fn test_whitespace_around_suffix() {
        assert_eq!(label("has(N)"), ("has".to_string(), Cardinality::Many));
        assert_eq!(label("has   (N)   "), ("has".to_string(), Cardinality::Many));
        assert_eq!(
            label("is taught by (1)"),
            ("is taught by".to_string(), Cardinality::Single)
        );
    }

    #[test]
    fn test_malformed_suffix_is_part_of_name() {
        assert_eq!(label("(N)"), ("(N)".to_string(), Cardinality::Single));
        assert_eq!(label("has (0..*)"), ("has (0..*)".to_string(), Cardinality::Single));
        assert_eq!(label("has (N"), ("has (N".to_string(), Cardinality::Single));
        assert_eq!(label("has ()"), ("has ()".to_string(), Cardinality::Single));
        assert_eq!(label("has (N) x"), ("has (N) x".to_string(), Cardinality::Single));
    }

    #[test]
    fn test_only_last_group_is_the_suffix() {
        assert_eq!(
            label("has (spare) (N)"),
            ("has (spare)".to_string(), Cardinality::Many)
        );
    }

    proptest! {
        #[test]
        fn prop_suffix_roundtrip(name in "[a-z][a-z ]{0,15}[a-z]", token in "[A-Za-z0-9_]{1,4}") {
            let parsed = parse_label(&format!("{name} ({token})"));
            prop_assert_eq!(parsed.name, name);
            prop_assert_eq!(parsed.cardinality, cardinality_of(&token));
        }

        #[test]
        fn prop_plain_text_is_single(text in "[a-zA-Z ]{0,30}") {
            let parsed = parse_label(&text);
            prop_assert_eq!(parsed.name, text.trim());
            prop_assert_eq!(parsed.cardinality, Cardinality::Single);
        }
    }
}
