//! Error types for the IDL loader.

use std::path::PathBuf;

use rosidl_idl::ParseFailure;
use rosidl_interface::LiftError;

/// Errors produced by [`IdlLoader`](crate::IdlLoader).
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The IDL file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An interface argument is not of the form `<base_dir>:<relative_path>`.
    #[error("invalid IDL tuple '{0}', expected '<base_dir>:<relative_path>'")]
    InvalidTuple(String),

    /// Strict mode only: the file did not parse to the end.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },

    /// The parsed tree is not a message, service or action file.
    #[error("failed to lift {}: {source}", path.display())]
    Lift {
        path: PathBuf,
        #[source]
        source: LiftError,
    },
}
