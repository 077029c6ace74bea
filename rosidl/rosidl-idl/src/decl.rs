//! Single declarations: typedefs, constants, members and attributes.

use rosidl_core::{Attribute, AttributeContent, Constant, Member, TypeDescriptor};

use crate::{
    error::{ParseError, snippet},
    lex::{consume_white_space_and_comment, expect_char, expect_keyword, parse_name},
    literal::parse_value,
    typedef::TypedefScope,
    types::{interpret_type, parse_type},
};

/// Read a required identifier.
fn required_name<'a>(input: &mut &'a str, what: &'static str) -> Result<&'a str, ParseError> {
    match parse_name(input) {
        "" => Err(ParseError::MissingName(what)),
        name => Ok(name),
    }
}

/// Consume `[N]` when present and return the raw bracket text, brackets included.
fn array_suffix<'a>(input: &mut &'a str) -> Result<Option<&'a str>, ParseError> {
    if !input.starts_with('[') {
        return Ok(None);
    }
    let end = input.find(']').ok_or_else(|| ParseError::expected("']'", input))?;
    let suffix = &input[..=end];
    *input = &input[end + 1..];
    Ok(Some(suffix))
}

/// `typedef TYPE NAME ([SIZE])? ;`, returning `(alias, type text)`.
///
/// An array suffix is appended to the type text, so `typedef uint8 Bytes[4];`
/// yields `("Bytes", "uint8[4]")`.
pub fn parse_typedef(input: &mut &str) -> Result<(String, String), ParseError> {
    expect_keyword(input, "typedef")?;
    consume_white_space_and_comment(input)?;

    let mut ty = parse_type(input)?;
    consume_white_space_and_comment(input)?;

    let alias = required_name(input, "typedef")?.to_string();
    consume_white_space_and_comment(input)?;
    if let Some(suffix) = array_suffix(input)? {
        ty.push_str(suffix);
    }

    consume_white_space_and_comment(input)?;
    expect_char(input, ';', "';' after typedef")?;
    consume_white_space_and_comment(input)?;
    Ok((alias, ty))
}

/// `const TYPE NAME = VALUE ;`
pub fn parse_constant(input: &mut &str, typedefs: &TypedefScope<'_>) -> Result<Constant, ParseError> {
    expect_keyword(input, "const")?;
    consume_white_space_and_comment(input)?;

    let ty = interpret_type(&parse_type(input)?, typedefs)?;
    consume_white_space_and_comment(input)?;

    let name = required_name(input, "const")?.to_string();
    consume_white_space_and_comment(input)?;

    expect_char(input, '=', "'=' in const declaration")?;
    consume_white_space_and_comment(input)?;

    let value = parse_value(input)?;
    consume_white_space_and_comment(input)?;

    expect_char(input, ';', "';' after const declaration")?;
    consume_white_space_and_comment(input)?;

    Ok(Constant {
        ty,
        name,
        value,
        comments: Vec::new(),
    })
}

/// `TYPE NAME ([SIZE])? ;`
///
/// Attributes are merged by the enclosing struct parser. The cursor is left
/// right after the `;`.
pub fn parse_member(input: &mut &str, typedefs: &TypedefScope<'_>) -> Result<Member, ParseError> {
    let mut ty = interpret_type(&parse_type(input)?, typedefs)?;
    consume_white_space_and_comment(input)?;

    let name = required_name(input, "member")?.to_string();
    consume_white_space_and_comment(input)?;

    if let Some(suffix) = array_suffix(input)? {
        let size = suffix[1..suffix.len() - 1]
            .trim()
            .parse()
            .map_err(|_| ParseError::MalformedType(format!("{ty}{suffix}")))?;
        ty = TypeDescriptor::array(ty, size);
    }

    consume_white_space_and_comment(input)?;
    expect_char(input, ';', "';' after member")?;
    Ok(Member::new(name, ty))
}

/// `@NAME` or `@NAME(KEY=VALUE, ...)`.
///
/// An empty argument list, `@name()`, is stored like a bare attribute.
pub fn parse_attribute(input: &mut &str) -> Result<Attribute, ParseError> {
    expect_char(input, '@', "'@'")?;
    let name = required_name(input, "attribute")?.to_string();
    consume_white_space_and_comment(input)?;

    let Some(rest) = input.strip_prefix('(') else {
        return Ok(Attribute::bare(name));
    };
    *input = rest;
    consume_white_space_and_comment(input)?;

    let mut content = AttributeContent::new();
    while !input.starts_with(')') {
        let key = parse_name(input);
        if key.is_empty() {
            return Err(ParseError::MalformedAttribute(format!("{name}({})", snippet(input))));
        }
        consume_white_space_and_comment(input)?;
        expect_char(input, '=', "'=' in attribute argument")?;
        consume_white_space_and_comment(input)?;
        content.insert(key.to_string(), parse_value(input)?);

        if let Some(rest) = input.strip_prefix(',') {
            *input = rest;
            consume_white_space_and_comment(input)?;
        } else if !input.starts_with(')') {
            return Err(ParseError::expected("',' or ')' in attribute", input));
        }
    }
    *input = &input[1..];
    consume_white_space_and_comment(input)?;

    Ok(Attribute {
        name,
        content: (!content.is_empty()).then_some(content),
    })
}
