//! Errors raised while parsing IDL text.

use rosidl_core::ValueTypeError;

/// Fatal parse error for the current document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unterminated comment")]
    UnterminatedComment,

    #[error("unterminated string literal")]
    UnterminatedString,

    /// A required token was not found at the cursor.
    #[error("expected {expected}, found '{found}'")]
    Expected {
        expected: &'static str,
        found: String,
    },

    #[error("missing name in {0} declaration")]
    MissingName(&'static str),

    #[error("malformed type '{0}'")]
    MalformedType(String),

    #[error("malformed value '{0}'")]
    MalformedValue(String),

    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(String),

    #[error("malformed attribute '@{0}'")]
    MalformedAttribute(String),

    #[error("malformed default list '{0}'")]
    MalformedDefault(String),

    #[error("typedef '{0}' refers to itself")]
    TypedefCycle(String),

    /// A struct body iteration consumed nothing.
    #[error("malformed struct '{0}'")]
    MalformedStructure(String),

    /// A module body iteration consumed nothing.
    #[error("failed to parse module '{0}'")]
    MalformedModule(String),

    #[error("unexpected top-level declaration '{0}'")]
    UnexpectedTopLevel(String),

    #[error(transparent)]
    ValueType(#[from] ValueTypeError),
}

impl ParseError {
    pub(crate) fn expected(expected: &'static str, input: &str) -> Self {
        Self::Expected {
            expected,
            found: snippet(input),
        }
    }
}

/// First line of the remaining input, shortened for messages.
pub(crate) fn snippet(input: &str) -> String {
    let line = input.lines().next().unwrap_or_default().trim();
    if line.is_empty() {
        return "<end of input>".to_string();
    }
    line.chars().take(40).collect()
}
