use std::collections::HashMap;

use rosidl_core::{Attribute, Member, Structure};
use tracing::trace;

use crate::{
    decl::{parse_attribute, parse_constant, parse_member},
    error::{ParseError, snippet},
    lex::{consume_white_space_and_comment, expect_char, expect_keyword, parse_name, starts_with_keyword},
    literal::parse_default_list,
    typedef::TypedefScope,
};

const VERBATIM_LINE_BREAK: &str = "\\n";

/// Attributes read ahead of the next declaration, grouped by attribute name.
#[derive(Debug, Default)]
pub(crate) struct PendingAttributes {
    by_name: HashMap<String, Vec<Attribute>>,
}

impl PendingAttributes {
    pub(crate) fn push(&mut self, attribute: Attribute) {
        self.by_name
            .entry(attribute.name.clone())
            .or_default()
            .push(attribute);
    }

    fn first(&self, name: &str) -> Option<&Attribute> {
        self.by_name.get(name).and_then(|all| all.first())
    }

    fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub(crate) fn clear(&mut self) {
        self.by_name.clear();
    }

    /// Comment lines carried by every `@verbatim(language="comment", text=...)`,
    /// with `text` split on the two-character sequence `\n`.
    pub(crate) fn verbatim_comments(&self) -> Result<Vec<String>, ParseError> {
        let mut lines = Vec::new();
        for verbatim in self.by_name.get("verbatim").into_iter().flatten() {
            let is_comment = verbatim
                .arg("language")
                .and_then(|language| language.try_str().ok())
                == Some("comment");
            if !is_comment {
                continue;
            }
            let text = verbatim
                .arg("text")
                .ok_or_else(|| ParseError::MalformedAttribute("verbatim".to_string()))?
                .try_str()?;
            lines.extend(text.split(VERBATIM_LINE_BREAK).map(ToString::to_string));
        }
        Ok(lines)
    }

    /// Merge `@default`, `@verbatim` and `@key` into a freshly parsed member.
    ///
    /// Only the first `@default` counts. Container members take their default
    /// as Python tuple text, e.g. `@default(value="(1, 2)")`.
    fn apply_to_member(&self, member: &mut Member) -> Result<(), ParseError> {
        if let Some(default) = self.first("default") {
            let value = default
                .arg("value")
                .ok_or_else(|| ParseError::MalformedAttribute("default".to_string()))?;
            member.default = Some(if member.ty.is_container() {
                parse_default_list(value.try_str()?)?
            } else {
                value.clone()
            });
        }
        member.comments.extend(self.verbatim_comments()?);
        if self.contains("key") {
            member.key = true;
        }
        Ok(())
    }
}

/// `struct NAME { (attribute | const | member)* } ;`
///
/// Attributes apply to the member that follows them. A `const` drops any
/// attributes read before it.
pub fn parse_structure(input: &mut &str, typedefs: &TypedefScope<'_>) -> Result<Structure, ParseError> {
    expect_keyword(input, "struct")?;
    consume_white_space_and_comment(input)?;

    let name = parse_name(input);
    if name.is_empty() {
        return Err(ParseError::MissingName("struct"));
    }
    trace!(name, "parsing struct");
    let mut structure = Structure::new(name);

    consume_white_space_and_comment(input)?;
    expect_char(input, '{', "'{' after struct name")?;
    consume_white_space_and_comment(input)?;

    let mut pending = PendingAttributes::default();
    while !input.starts_with('}') {
        if input.is_empty() {
            return Err(ParseError::expected("'}' closing struct", input));
        }
        let before = input.len();

        if input.starts_with('@') {
            pending.push(parse_attribute(input)?);
        } else if starts_with_keyword(input, "const") {
            structure.constants.push(parse_constant(input, typedefs)?);
            pending.clear();
        } else {
            let mut member = parse_member(input, typedefs)?;
            pending.apply_to_member(&mut member)?;
            structure.members.push(member);
            pending.clear();
        }
        consume_white_space_and_comment(input)?;

        if input.len() == before {
            return Err(ParseError::MalformedStructure(format!(
                "{}: {}",
                structure.name,
                snippet(input)
            )));
        }
    }

    *input = &input[1..];
    consume_white_space_and_comment(input)?;
    expect_char(input, ';', "';' after struct")?;
    consume_white_space_and_comment(input)?;

    Ok(structure)
}
