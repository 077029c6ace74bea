//! Type descriptors and their canonical textual form.

mod descriptor;
mod format;

pub use descriptor::{StringKind, TypeDescriptor};
