//! Type expressions.
//!
//! [`parse_type`] only delimits a type at the cursor and returns its text;
//! [`interpret_type`] turns such text into a [`TypeDescriptor`] against the
//! typedefs visible at that point.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::multispace1,
    combinator::value,
    sequence::{terminated, tuple},
};
use rosidl_core::{StringKind, TypeDescriptor};

use crate::{
    error::{ParseError, snippet},
    lex::{consume_white_space_and_comment, is_type_char, keyword_boundary, run, split_qual},
    typedef::TypedefScope,
};

/// Multi-word builtin type names, longest first, normalized to single spaces.
fn multi_word_type(input: &str) -> IResult<&str, &'static str> {
    alt((
        value(
            "unsigned long long",
            terminated(
                tuple((
                    tag("unsigned"),
                    multispace1,
                    tag("long"),
                    multispace1,
                    tag("long"),
                )),
                keyword_boundary,
            ),
        ),
        value(
            "unsigned short",
            terminated(
                tuple((tag("unsigned"), multispace1, tag("short"))),
                keyword_boundary,
            ),
        ),
        value(
            "unsigned long",
            terminated(
                tuple((tag("unsigned"), multispace1, tag("long"))),
                keyword_boundary,
            ),
        ),
        value(
            "long double",
            terminated(
                tuple((tag("long"), multispace1, tag("double"))),
                keyword_boundary,
            ),
        ),
        value(
            "long long",
            terminated(
                tuple((tag("long"), multispace1, tag("long"))),
                keyword_boundary,
            ),
        ),
    ))(input)
}

/// Byte offset just past the `>` closing the `<` that starts `input`.
fn matching_angle(input: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Consume one type expression and return its text.
///
/// Template arguments are kept as written (`sequence<  string< 6 > >`);
/// whitespace between the base name and `<` is dropped. Multi-word builtins
/// come back as e.g. `unsigned long long`.
pub fn parse_type(input: &mut &str) -> Result<String, ParseError> {
    if let Some(name) = run(input, multi_word_type) {
        return Ok(name.to_string());
    }

    let mut text = run(input, take_while1(is_type_char))
        .ok_or_else(|| ParseError::MalformedType(snippet(input)))?
        .to_string();
    consume_white_space_and_comment(input)?;

    if input.starts_with('<') {
        let end = matching_angle(input).ok_or_else(|| ParseError::expected("'>'", input))?;
        text.push_str(&input[..end]);
        *input = &input[end..];
    }
    Ok(text)
}

/// Build a descriptor from type text such as `sequence<string<6>, 10>`,
/// `uint8[3]`, `pkg::msg::Foo` or a typedef alias.
pub fn interpret_type(text: &str, typedefs: &TypedefScope<'_>) -> Result<TypeDescriptor, ParseError> {
    Interpreter {
        typedefs,
        expanding: Vec::new(),
    }
    .interpret(text)
}

struct Interpreter<'s, 'p> {
    typedefs: &'s TypedefScope<'p>,
    /// Aliases currently being expanded, to reject self-referencing typedefs.
    expanding: Vec<String>,
}

impl Interpreter<'_, '_> {
    fn interpret(&mut self, text: &str) -> Result<TypeDescriptor, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::MalformedType(text.to_string()));
        }

        // Only typedef text carries an array suffix, e.g. `uint8[3]`.
        if let Some(base) = text.strip_suffix(']') {
            let open = base
                .rfind('[')
                .ok_or_else(|| ParseError::MalformedType(text.to_string()))?;
            let size = parse_bound(&base[open + 1..], text)?;
            return Ok(TypeDescriptor::array(self.interpret(&base[..open])?, size));
        }

        if let Some(inner) = template_args(text, "string") {
            return Ok(TypeDescriptor::bounded_string(
                StringKind::String,
                parse_bound(inner, text)?,
            ));
        }
        if let Some(inner) = template_args(text, "wstring") {
            return Ok(TypeDescriptor::bounded_string(
                StringKind::WString,
                parse_bound(inner, text)?,
            ));
        }
        if let Some(inner) = template_args(text, "sequence") {
            let (element, bound) = match top_level_comma(inner) {
                Some(comma) => (&inner[..comma], Some(parse_bound(&inner[comma + 1..], text)?)),
                None => (inner, None),
            };
            return Ok(TypeDescriptor::sequence(self.interpret(element)?, bound));
        }

        if let Some(aliased) = self.typedefs.get(text) {
            if self.expanding.iter().any(|alias| alias == text) {
                return Err(ParseError::TypedefCycle(text.to_string()));
            }
            self.expanding.push(text.to_string());
            let resolved = self.interpret(aliased);
            self.expanding.pop();
            return resolved;
        }

        if text.contains("::") {
            let mut segments = split_qual(text, "::");
            if let Some(name) = segments.pop() {
                if !segments.is_empty() {
                    return Ok(TypeDescriptor::Namespaced {
                        name,
                        namespaces: segments,
                    });
                }
                return Ok(TypeDescriptor::scalar(name));
            }
            return Err(ParseError::MalformedType(text.to_string()));
        }

        Ok(TypeDescriptor::scalar(text))
    }
}

/// Text between the outer `<` and `>` of `keyword<...>`.
fn template_args<'t>(text: &'t str, keyword: &str) -> Option<&'t str> {
    text.strip_prefix(keyword)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Position of the first `,` not nested inside another `<...>`.
fn top_level_comma(inner: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

fn parse_bound(bound: &str, text: &str) -> Result<usize, ParseError> {
    bound
        .trim()
        .parse()
        .map_err(|_| ParseError::MalformedType(text.to_string()))
}
