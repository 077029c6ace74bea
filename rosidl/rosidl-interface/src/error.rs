//! Errors raised while lifting a parsed IDL tree.

/// The parsed tree does not have the shape of a message, service or action file.
#[derive(Debug, thiserror::Error)]
pub enum LiftError {
    /// The file lacks the `<package>::<kind>` module nesting.
    #[error("expected a module at depth {depth}, found none")]
    MissingModule { depth: usize },

    #[error("unsupported number of structures: {0} (expected 1, 2 or 3)")]
    StructureCount(usize),

    /// A service or action file is missing one of its payload structures.
    #[error("no structure named '*{suffix}' in '{module}'")]
    MissingStructure {
        suffix: &'static str,
        module: String,
    },

    #[error("failed to serialize interface model: {0}")]
    Serialize(#[from] serde_json::Error),
}
