//! Cursor primitives.
//!
//! Every function takes the remaining input as `&mut &str` and advances it past
//! whatever it recognised. Token-level matching is delegated to `nom`
//! combinators through [`run`].

use nom::{
    IResult,
    bytes::complete::take_while,
    error::{Error, ErrorKind},
};

use crate::error::ParseError;

const WHITE_SPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// Apply a `nom` parser at the cursor, advancing it only on success.
pub(crate) fn run<'a, O>(
    input: &mut &'a str,
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> Option<O> {
    match parser(*input) {
        Ok((rest, out)) => {
            *input = rest;
            Some(out)
        }
        Err(_) => None,
    }
}

pub fn consume_white_space(input: &mut &str) {
    *input = input.trim_start_matches(WHITE_SPACE);
}

/// Skip one `//` line comment or `/* */` block comment at the cursor, if any.
pub fn consume_comment(input: &mut &str) -> Result<(), ParseError> {
    if let Some(rest) = input.strip_prefix("//") {
        *input = match rest.find('\n') {
            Some(end) => &rest[end + 1..],
            None => "",
        };
    } else if let Some(rest) = input.strip_prefix("/*") {
        let end = rest.find("*/").ok_or(ParseError::UnterminatedComment)?;
        *input = &rest[end + 2..];
    }
    Ok(())
}

/// Alternate whitespace and comment skipping until neither consumes anything.
pub fn consume_white_space_and_comment(input: &mut &str) -> Result<(), ParseError> {
    loop {
        let before = input.len();
        consume_white_space(input);
        consume_comment(input)?;
        if input.len() == before {
            return Ok(());
        }
    }
}

pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub(crate) fn is_type_char(c: char) -> bool {
    is_name_char(c) || c == ':'
}

/// Consume the longest run of `[A-Za-z0-9_]`. Returns an empty name when none matches.
pub fn parse_name<'a>(input: &mut &'a str) -> &'a str {
    run(input, take_while(is_name_char)).unwrap_or_default()
}

/// Succeeds only when the next character cannot continue an identifier.
pub(crate) fn keyword_boundary(input: &str) -> IResult<&str, ()> {
    if input.chars().next().is_some_and(is_name_char) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((input, ()))
}

/// True when the cursor sits on `keyword` followed by a non-identifier character.
pub(crate) fn starts_with_keyword(input: &str, keyword: &str) -> bool {
    input
        .strip_prefix(keyword)
        .is_some_and(|rest| keyword_boundary(rest).is_ok())
}

/// Advance past `keyword`, failing when it is absent.
pub(crate) fn expect_keyword(input: &mut &str, keyword: &'static str) -> Result<(), ParseError> {
    if !starts_with_keyword(input, keyword) {
        return Err(ParseError::expected(keyword, input));
    }
    *input = &input[keyword.len()..];
    Ok(())
}

/// Advance past `token`, failing when it is absent.
pub(crate) fn expect_char(
    input: &mut &str,
    token: char,
    expected: &'static str,
) -> Result<(), ParseError> {
    match input.strip_prefix(token) {
        Some(rest) => {
            *input = rest;
            Ok(())
        }
        None => Err(ParseError::expected(expected, input)),
    }
}

/// Split a scoped name on `sep`, dropping empty segments.
pub(crate) fn split_qual(name: &str, sep: &str) -> Vec<String> {
    name.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
