use serde::{Serialize, Serializer, ser::SerializeMap};

/// Which string flavour a bounded string uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    String,
    WString,
}

impl StringKind {
    pub fn type_name(self) -> &'static str {
        match self {
            StringKind::String => "string",
            StringKind::WString => "wstring",
        }
    }
}

/// Structured description of a member, constant or typedef type.
///
/// Serializes to the flat `{name, namespaces?, value_type?, maximum_size?, size?}`
/// mapping code emitters index into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A bare type name such as `uint8`, `boolean` or an unqualified user type.
    Scalar { name: String },
    /// A `::`-qualified reference; `namespaces` excludes the final segment.
    Namespaced {
        name: String,
        namespaces: Vec<String>,
    },
    /// `string<N>` / `wstring<N>`.
    BoundedString { kind: StringKind, maximum_size: usize },
    /// `sequence<T>` or `sequence<T, N>`.
    Sequence {
        value_type: Box<TypeDescriptor>,
        maximum_size: Option<usize>,
    },
    /// `T name[N]`.
    Array {
        value_type: Box<TypeDescriptor>,
        size: usize,
    },
}

impl TypeDescriptor {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar { name: name.into() }
    }

    pub fn namespaced<I, S>(namespaces: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Namespaced {
            name: name.into(),
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    pub fn bounded_string(kind: StringKind, maximum_size: usize) -> Self {
        Self::BoundedString { kind, maximum_size }
    }

    pub fn sequence(value_type: TypeDescriptor, maximum_size: Option<usize>) -> Self {
        Self::Sequence {
            value_type: Box::new(value_type),
            maximum_size,
        }
    }

    pub fn array(value_type: TypeDescriptor, size: usize) -> Self {
        Self::Array {
            value_type: Box::new(value_type),
            size,
        }
    }

    /// The `name` key: the scalar/type name, or `sequence`, `array`, `string`, `wstring`.
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Scalar { name } | TypeDescriptor::Namespaced { name, .. } => name,
            TypeDescriptor::BoundedString { kind, .. } => kind.type_name(),
            TypeDescriptor::Sequence { .. } => "sequence",
            TypeDescriptor::Array { .. } => "array",
        }
    }

    pub fn namespaces(&self) -> Option<&[String]> {
        match self {
            TypeDescriptor::Namespaced { namespaces, .. } => Some(namespaces),
            _ => None,
        }
    }

    pub fn value_type(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Sequence { value_type, .. } | TypeDescriptor::Array { value_type, .. } => {
                Some(value_type)
            }
            _ => None,
        }
    }

    pub fn maximum_size(&self) -> Option<usize> {
        match self {
            TypeDescriptor::BoundedString { maximum_size, .. } => Some(*maximum_size),
            TypeDescriptor::Sequence { maximum_size, .. } => *maximum_size,
            _ => None,
        }
    }

    pub fn size(&self) -> Option<usize> {
        match self {
            TypeDescriptor::Array { size, .. } => Some(*size),
            _ => None,
        }
    }

    /// True for arrays and sequences, i.e. whenever a `value_type` is present.
    pub fn is_container(&self) -> bool {
        self.value_type().is_some()
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.name())?;
        if let Some(namespaces) = self.namespaces() {
            map.serialize_entry("namespaces", namespaces)?;
        }
        if let Some(value_type) = self.value_type() {
            map.serialize_entry("value_type", value_type)?;
        }
        if let Some(maximum_size) = self.maximum_size() {
            map.serialize_entry("maximum_size", &maximum_size)?;
        }
        if let Some(size) = self.size() {
            map.serialize_entry("size", &size)?;
        }
        map.end()
    }
}
