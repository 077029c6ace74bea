use rosidl_core::Module;
use tracing::trace;

use crate::{
    decl::{parse_attribute, parse_constant, parse_typedef},
    error::{ParseError, snippet},
    lex::{consume_white_space_and_comment, expect_char, expect_keyword, parse_name, starts_with_keyword},
    structure::{PendingAttributes, parse_structure},
    typedef::TypedefScope,
};

/// `module NAME { (module | struct | const | typedef | attribute)* } ;`
///
/// Typedefs declared here go into a scope layered over `typedefs`; they are
/// visible to later declarations of this module and to its nested modules,
/// never to the caller. `@verbatim` comments attach to the next struct, const
/// or nested module.
pub fn parse_module(input: &mut &str, typedefs: &TypedefScope<'_>) -> Result<Module, ParseError> {
    expect_keyword(input, "module")?;
    consume_white_space_and_comment(input)?;

    let name = parse_name(input);
    if name.is_empty() {
        return Err(ParseError::MissingName("module"));
    }
    trace!(name, "parsing module");
    let mut module = Module::new(name);

    consume_white_space_and_comment(input)?;
    expect_char(input, '{', "'{' after module name")?;
    consume_white_space_and_comment(input)?;

    let mut scope = typedefs.child();
    let mut pending = PendingAttributes::default();
    while !input.starts_with('}') {
        if input.is_empty() {
            return Err(ParseError::expected("'}' closing module", input));
        }
        let before = input.len();

        if starts_with_keyword(input, "module") {
            let mut nested = parse_module(input, &scope)?;
            nested.comments.extend(pending.verbatim_comments()?);
            module.modules.push(nested);
            pending.clear();
        } else if starts_with_keyword(input, "struct") {
            let mut structure = parse_structure(input, &scope)?;
            structure.comments.extend(pending.verbatim_comments()?);
            module.structures.push(structure);
            pending.clear();
        } else if input.starts_with('@') {
            pending.push(parse_attribute(input)?);
        } else if starts_with_keyword(input, "const") {
            let mut constant = parse_constant(input, &scope)?;
            constant.comments.extend(pending.verbatim_comments()?);
            module.constants.push(constant);
            pending.clear();
        } else if starts_with_keyword(input, "typedef") {
            let (alias, ty) = parse_typedef(input)?;
            scope.insert(alias, ty);
        }
        consume_white_space_and_comment(input)?;

        if input.len() == before {
            return Err(ParseError::MalformedModule(format!(
                "{}: {}",
                module.name,
                snippet(input)
            )));
        }
    }

    *input = &input[1..];
    consume_white_space_and_comment(input)?;
    expect_char(input, ';', "';' after module")?;
    consume_white_space_and_comment(input)?;

    Ok(module)
}
