//! Error types for the model layer.

/// Returned by [`Value`](crate::Value) accessors when the literal has another variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} literal, found {found}")]
pub struct ValueTypeError {
    pub expected: String,
    pub found: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, found: &'static str) -> Self {
        Self {
            expected: expected.into(),
            found,
        }
    }
}
