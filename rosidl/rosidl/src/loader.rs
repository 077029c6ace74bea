//! IDL file loading with configurable typedefs and failure policy.

use std::{fs, path::Path};

use rayon::prelude::*;
use rosidl_core::IdlFile;
use rosidl_idl::{ParseOutcome, TypedefScope, parse_idl};
use rosidl_interface::{InterfaceModel, convert_idl_to_interface};
use tracing::debug;

use crate::{error::LoaderError, tuple::IdlTuple};

/// Parses IDL files and lifts them into [`InterfaceModel`]s.
///
/// Every file is parsed against its own root typedef scope, so loading is
/// independent per file and [`load_all`](Self::load_all) runs files in parallel.
#[derive(Debug, Clone, Default)]
pub struct IdlLoader {
    typedefs: Vec<(String, String)>,
    strict: bool,
}

/// Builder for configuring [`IdlLoader`].
#[derive(Debug, Clone, Default)]
pub struct IdlLoaderBuilder {
    typedefs: Vec<(String, String)>,
    strict: bool,
}

impl IdlLoader {
    /// Create a builder for [`IdlLoader`].
    pub fn builder() -> IdlLoaderBuilder {
        IdlLoaderBuilder::default()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Builtin integer aliases plus the configured typedefs.
    fn root_scope(&self) -> TypedefScope<'static> {
        let mut scope = TypedefScope::builtin();
        for (alias, ty) in &self.typedefs {
            scope.insert(alias.as_str(), ty.as_str());
        }
        scope
    }

    /// Parse IDL text. The outcome carries the partial tree on failure.
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        parse_idl(content, &self.root_scope())
    }

    /// Read and parse one IDL file.
    ///
    /// A parse failure is logged and the partial tree returned, unless the
    /// loader is strict, in which case it becomes [`LoaderError::Parse`].
    pub fn parse_file(&self, path: &Path) -> Result<IdlFile, LoaderError> {
        let content = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let outcome = self.parse_str(&content);
        match outcome.failure {
            Some(failure) if self.strict => Err(LoaderError::Parse {
                path: path.to_path_buf(),
                source: failure,
            }),
            _ => Ok(outcome.file),
        }
    }

    /// Parse the file named by `tuple` and lift it.
    pub fn load_interface(&self, tuple: &IdlTuple) -> Result<InterfaceModel, LoaderError> {
        let path = tuple.path();
        let file = self.parse_file(&path)?;
        let model = convert_idl_to_interface(&file, &tuple.relative_path)
            .map_err(|source| LoaderError::Lift { path, source })?;
        debug!(interface = %tuple, "loaded interface");
        Ok(model)
    }

    /// Load many files in parallel. Results keep the order of `tuples`; one
    /// file failing does not affect the others.
    pub fn load_all(&self, tuples: &[IdlTuple]) -> Vec<Result<InterfaceModel, LoaderError>> {
        tuples
            .par_iter()
            .map(|tuple| self.load_interface(tuple))
            .collect()
    }
}

impl IdlLoaderBuilder {
    /// Add a root-level typedef, visible to every file. Later entries win.
    pub fn with_typedef(mut self, alias: impl Into<String>, ty: impl Into<String>) -> Self {
        self.typedefs.push((alias.into(), ty.into()));
        self
    }

    /// Treat a partial parse as an error (default: false).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> IdlLoader {
        IdlLoader {
            typedefs: self.typedefs,
            strict: self.strict,
        }
    }
}
