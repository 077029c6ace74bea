use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::LoaderError;

/// An interface file given as `<base_dir>:<relative_path>`, e.g.
/// `/ws/src/std_msgs:msg/Header.idl`.
///
/// The relative part is the package-relative path recorded in the interface
/// model; the base directory only locates the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlTuple {
    pub base_dir: PathBuf,
    pub relative_path: String,
}

impl IdlTuple {
    pub fn new(base_dir: impl Into<PathBuf>, relative_path: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Full path of the file on disk.
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(Path::new(&self.relative_path))
    }
}

impl FromStr for IdlTuple {
    type Err = LoaderError;

    /// Splits on the last `:` so base directories may contain one (`C:\ws`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(':') {
            Some((base, relative)) if !base.is_empty() && !relative.is_empty() => {
                Ok(Self::new(base, relative))
            }
            _ => Err(LoaderError::InvalidTuple(s.to_string())),
        }
    }
}

impl fmt::Display for IdlTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.base_dir.display(), self.relative_path)
    }
}
