//! Cleanup of cell text.
//!
//! draw.io stores labels as rich text whenever the "formatted text" option is
//! on, so a class called `Car` may arrive as `<div><b>Car</b></div>` or as
//! `Licence&nbsp;plate`. [`strip_markup`] reduces such text to its plain
//! content.

use winnow::{
    Parser as _,
    combinator::{alt, repeat},
    error::ModalResult,
    token::take_till,
};

type Input<'a> = &'a str;

/// Parse a complete `<...>` tag, yielding nothing.
fn tag<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    ('<', take_till(1.., '>'), '>').map(|_| "").parse_next(input)
}

/// Parse a run of text up to the next `<`.
fn plain<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_till(1.., '<').parse_next(input)
}

/// Parse a `<` that does not open a tag; it is kept as text.
fn stray_open<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    "<".parse_next(input)
}

fn segments<'a>(input: &mut Input<'a>) -> ModalResult<String> {
    repeat(0.., alt((tag, plain, stray_open)))
        .map(|parts: Vec<&str>| parts.concat())
        .parse_next(input)
}

/// Remove tags, decode HTML character references and trim whitespace.
///
/// A `<` without a closing `>` is not a tag and is kept.
///
/// ```
/// # use draftsmith_parser::strip_markup;
/// assert_eq!(strip_markup("<div><b>Car</b></div>"), "Car");
/// assert_eq!(strip_markup("  has (N)  "), "has (N)");
/// ```
pub fn strip_markup(raw: &str) -> String {
    let stripped = segments.parse(raw).unwrap_or_else(|_| raw.to_string());
    htmlize::unescape(stripped.as_str()).trim().to_string()
}
