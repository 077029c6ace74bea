//! Declarations produced by parsing one IDL document.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{types::TypeDescriptor, value::Value};

/// Argument list of an attribute, `@name(key=value, ...)`. A repeated key keeps the last value.
pub type AttributeContent = BTreeMap<String, Value>;

/// A bracketed annotation such as `@key`, `@default(value=0)` or `@verbatim(...)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<AttributeContent>,
}

impl Attribute {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
        }
    }

    /// Look up one argument of the attribute.
    pub fn arg(&self, key: &str) -> Option<&Value> {
        self.content.as_ref().and_then(|content| content.get(key))
    }
}

/// One member declaration inside a `struct`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub comments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub key: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            comments: Vec::new(),
            default: None,
            key: false,
        }
    }
}

/// `const TYPE NAME = VALUE;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constant {
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub name: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// A parsed `struct` body.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Structure {
    pub name: String,
    pub comments: Vec<String>,
    pub members: Vec<Member>,
    pub constants: Vec<Constant>,
}

impl Structure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A `module` and everything declared inside it. Typedefs are resolved during
/// parsing and are not kept in the tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Module {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<Module>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub structures: Vec<Structure>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constants: Vec<Constant>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Direct child module called `name`, if declared.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }
}

/// Top level of one IDL document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IdlFile {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    pub modules: Vec<Module>,
}
