//! Whole-document parsing with the partial-result policy.

use rosidl_core::IdlFile;
use tracing::{debug, error};

use crate::{
    error::{ParseError, snippet},
    lex::{consume_white_space, consume_white_space_and_comment, starts_with_keyword},
    literal::parse_string_part,
    module::parse_module,
    typedef::TypedefScope,
};

const INCLUDE: &str = "#include";

/// `#include "path"` or `#include <path>`.
pub fn parse_include(input: &mut &str) -> Result<String, ParseError> {
    let rest = input
        .strip_prefix(INCLUDE)
        .ok_or_else(|| ParseError::expected(INCLUDE, input))?;
    *input = rest;
    consume_white_space(input);

    if let Some(rest) = input.strip_prefix('<') {
        let end = rest
            .find(['>', '\n'])
            .filter(|&end| rest[end..].starts_with('>'))
            .ok_or_else(|| ParseError::expected("'>' closing include", input))?;
        let path = rest[..end].to_string();
        *input = &rest[end + 1..];
        consume_white_space_and_comment(input)?;
        return Ok(path);
    }
    parse_string_part(input)
}

/// Why a document stopped parsing early.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{error}")]
pub struct ParseFailure {
    pub error: ParseError,
    /// Input left unconsumed at the point of failure.
    pub remaining: String,
}

/// Result of parsing one document: everything read before any failure,
/// plus the failure itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutcome {
    pub file: IdlFile,
    pub failure: Option<ParseFailure>,
}

impl ParseOutcome {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Discard the partial tree when parsing failed.
    pub fn into_result(self) -> Result<IdlFile, ParseFailure> {
        match self.failure {
            None => Ok(self.file),
            Some(failure) => Err(failure),
        }
    }
}

/// Parse a full document against a root typedef scope.
///
/// A malformed declaration ends the parse. The includes and modules read up
/// to that point are returned together with the error and the unconsumed
/// input, which are also logged.
pub fn parse_idl(content: &str, typedefs: &TypedefScope<'_>) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut input = content;

    if let Err(error) = parse_top_level(&mut input, typedefs, &mut outcome.file) {
        error!(%error, remaining = input, "failed to parse IDL document");
        outcome.failure = Some(ParseFailure {
            error,
            remaining: input.to_string(),
        });
    }

    debug!(
        includes = outcome.file.includes.len(),
        modules = outcome.file.modules.len(),
        complete = outcome.is_complete(),
        "parsed IDL document"
    );
    outcome
}

/// [`parse_idl`] with the builtin integer aliases as root scope.
pub fn parse_idl_str(content: &str) -> ParseOutcome {
    parse_idl(content, &TypedefScope::builtin())
}

fn parse_top_level(
    input: &mut &str,
    typedefs: &TypedefScope<'_>,
    file: &mut IdlFile,
) -> Result<(), ParseError> {
    consume_white_space_and_comment(input)?;
    while !input.is_empty() {
        if input.starts_with(INCLUDE) {
            file.includes.push(parse_include(input)?);
        } else if starts_with_keyword(input, "module") {
            file.modules.push(parse_module(input, typedefs)?);
        } else {
            return Err(ParseError::UnexpectedTopLevel(snippet(input)));
        }
        consume_white_space_and_comment(input)?;
    }
    Ok(())
}
