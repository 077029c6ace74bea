//! Value literals: numbers, booleans, strings and lists.
//!
//! Two string dialects coexist. IDL constants and attribute arguments use
//! double quotes where only `\"` is unescaped; the Python-literal text carried
//! inside `@default(value="...")` for containers may also use single quotes,
//! whose content is kept verbatim. Adjacent quoted segments concatenate.

use nom::{
    character::complete::{i64 as signed, u64 as unsigned},
    number::complete::double,
};
use rosidl_core::Value;

use crate::{
    error::{ParseError, snippet},
    lex::{consume_white_space, consume_white_space_and_comment, is_name_char, run},
};

/// Parse one double-quoted segment.
pub fn parse_string_part(input: &mut &str) -> Result<String, ParseError> {
    let body = input
        .strip_prefix('"')
        .ok_or_else(|| ParseError::expected("'\"'", input))?;

    let mut out = String::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                *input = &body[i + 1..];
                consume_white_space_and_comment(input)?;
                return Ok(out);
            }
            '\\' => match chars.next() {
                Some((_, '"')) => out.push('"'),
                Some((_, other)) => {
                    out.push('\\');
                    out.push(other);
                }
                None => break,
            },
            _ => out.push(c),
        }
    }
    Err(ParseError::UnterminatedString)
}

/// Parse a double-quoted string, joining adjacent segments.
pub fn parse_string(input: &mut &str) -> Result<String, ParseError> {
    if !input.starts_with('"') {
        return Err(ParseError::expected("string literal", input));
    }
    let mut out = String::new();
    while input.starts_with('"') {
        out.push_str(&parse_string_part(input)?);
    }
    Ok(out)
}

fn parse_string_part_python(input: &mut &str) -> Result<String, ParseError> {
    let body = input
        .strip_prefix('\'')
        .ok_or_else(|| ParseError::expected("\"'\"", input))?;

    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\'' => {
                let out = body[..i].to_string();
                *input = &body[i + 1..];
                consume_white_space_and_comment(input)?;
                return Ok(out);
            }
            '\\' => {
                chars.next();
            }
            _ => {}
        }
    }
    Err(ParseError::UnterminatedString)
}

/// Parse a Python-style string literal: single- or double-quoted segments, concatenated.
pub fn parse_string_python(input: &mut &str) -> Result<String, ParseError> {
    if !input.starts_with(['\'', '"']) {
        return Err(ParseError::expected("string literal", input));
    }
    let mut out = String::new();
    loop {
        if input.starts_with('"') {
            out.push_str(&parse_string_part(input)?);
        } else if input.starts_with('\'') {
            out.push_str(&parse_string_part_python(input)?);
        } else {
            return Ok(out);
        }
    }
}

/// Float when the leading digit run is followed by `.` or an exponent,
/// signed when it starts with `-`, unsigned otherwise.
fn parse_numeric(input: &mut &str) -> Result<Value, ParseError> {
    let run_len = input
        .find(|c: char| !(c.is_ascii_digit() || c == '-'))
        .unwrap_or(input.len());
    let is_float = matches!(input[run_len..].chars().next(), Some('.' | 'e' | 'E'));

    let start = *input;
    let value = if is_float {
        run(input, double).map(Value::Float)
    } else if input.starts_with('-') {
        run(input, signed).map(Value::Int)
    } else {
        run(input, unsigned).map(Value::UInt)
    };
    let value = value.ok_or_else(|| ParseError::InvalidNumber(snippet(start)))?;

    consume_white_space_and_comment(input)?;
    Ok(value)
}

fn parse_bool(input: &mut &str) -> Result<Option<bool>, ParseError> {
    // `TRUE` in IDL constants, `True` inside Python-literal defaults.
    for (word, value) in [("TRUE", true), ("True", true), ("FALSE", false), ("False", false)] {
        if let Some(rest) = input.strip_prefix(word) {
            if rest.starts_with(is_name_char) {
                continue;
            }
            *input = rest;
            consume_white_space_and_comment(input)?;
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn parse_value_list(input: &mut &str) -> Result<Value, ParseError> {
    *input = &input[1..];
    consume_white_space_and_comment(input)?;

    let mut items = Vec::new();
    while !input.starts_with(']') {
        if input.is_empty() {
            return Err(ParseError::expected("']'", input));
        }
        items.push(parse_value(input)?);
        consume_white_space(input);
        if let Some(rest) = input.strip_prefix(',') {
            *input = rest;
            consume_white_space_and_comment(input)?;
        } else if !input.starts_with(']') {
            return Err(ParseError::expected("',' or ']'", input));
        }
    }

    *input = &input[1..];
    consume_white_space_and_comment(input)?;
    Ok(Value::List(items))
}

/// Parse any literal at the cursor, consuming trailing whitespace and comments.
pub fn parse_value(input: &mut &str) -> Result<Value, ParseError> {
    match input.chars().next() {
        Some('[') => parse_value_list(input),
        Some('"') => parse_string(input).map(Value::String),
        Some('\'') => parse_string_python(input).map(Value::String),
        Some(c) if c.is_ascii_digit() || c == '-' => parse_numeric(input),
        _ => match parse_bool(input)? {
            Some(b) => Ok(Value::Bool(b)),
            None => Err(ParseError::MalformedValue(snippet(input))),
        },
    }
}

/// Parse the Python tuple text of a container default, e.g. `(1, 2, 3)` or `('a',)`.
pub fn parse_default_list(text: &str) -> Result<Value, ParseError> {
    let mut rest = text
        .trim()
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| ParseError::MalformedDefault(text.to_string()))?;
    consume_white_space(&mut rest);

    let mut items = Vec::new();
    while !rest.is_empty() {
        items.push(parse_value(&mut rest)?);
        consume_white_space(&mut rest);
        match rest.strip_prefix(',') {
            Some(tail) => {
                rest = tail;
                consume_white_space(&mut rest);
            }
            None if rest.is_empty() => {}
            None => return Err(ParseError::MalformedDefault(text.to_string())),
        }
    }
    Ok(Value::List(items))
}
