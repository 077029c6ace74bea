use std::fmt::{Display, Formatter, Result};

use super::TypeDescriptor;

/// Canonical IDL spelling of a descriptor, e.g. `sequence<string<6>, 10>` or `uint8[3]`.
///
/// The output is accepted back by the parser's type interpreter.
impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TypeDescriptor::Scalar { name } => f.write_str(name),
            TypeDescriptor::Namespaced { name, namespaces } => {
                for namespace in namespaces {
                    write!(f, "{namespace}::")?;
                }
                f.write_str(name)
            }
            TypeDescriptor::BoundedString { kind, maximum_size } => {
                write!(f, "{}<{maximum_size}>", kind.type_name())
            }
            TypeDescriptor::Sequence {
                value_type,
                maximum_size: Some(n),
            } => write!(f, "sequence<{value_type}, {n}>"),
            TypeDescriptor::Sequence {
                value_type,
                maximum_size: None,
            } => write!(f, "sequence<{value_type}>"),
            TypeDescriptor::Array { value_type, size } => write!(f, "{value_type}[{size}]"),
        }
    }
}
