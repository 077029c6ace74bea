//! Interface model handed to code emitters.
//!
//! Field names and nesting follow the layout the emitters' templates index
//! into; keys that only some entries carry are omitted when absent.

use std::path::Path;

use rosidl_core::{Constant, Member, TypeDescriptor};
use serde::Serialize;

/// Where the interface was declared, relative to its package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfacePath {
    /// Path as given, e.g. `msg/Header.idl`.
    pub filepath: String,
    /// File stem, e.g. `Header`.
    pub filename: String,
    /// Parent directory, e.g. `msg`.
    pub filedir: String,
}

impl InterfacePath {
    pub fn new(filepath: &str) -> Self {
        let path = Path::new(filepath);
        let text = |part: Option<&std::ffi::OsStr>| {
            part.map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default()
        };
        Self {
            filepath: filepath.to_string(),
            filename: text(path.file_stem()),
            filedir: text(path.parent().map(Path::as_os_str)),
        }
    }
}

/// A fully qualified interface type, e.g. `std_msgs::msg::Header`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualifiedType {
    pub name: String,
    pub namespaces: Vec<String>,
}

impl QualifiedType {
    pub fn new(namespaces: Vec<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespaces,
        }
    }

    /// Sibling type in the same namespaces, named `<name><suffix>`.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self::new(self.namespaces.clone(), format!("{}{suffix}", self.name))
    }

    /// Member type referring to this interface type.
    pub fn to_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::namespaced(self.namespaces.iter().cloned(), self.name.clone())
    }
}

/// One message type: a user structure or a synthesized one.
///
/// `name` is only set for messages lifted from a declared structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: QualifiedType,
    pub comments: Vec<String>,
    pub members: Vec<Member>,
    pub constants: Vec<Constant>,
}

impl MessageModel {
    /// Message with no declared structure behind it.
    pub fn synthesized(ty: QualifiedType, members: Vec<Member>) -> Self {
        Self {
            name: None,
            ty,
            comments: Vec::new(),
            members,
            constants: Vec::new(),
        }
    }
}

/// Entry of [`InterfaceModel::messages`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageInterface {
    pub interface_path: InterfacePath,
    pub message: MessageModel,
}

/// A service: declared in a `.srv`-derived file or synthesized for an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_path: Option<InterfacePath>,
    #[serde(rename = "type")]
    pub ty: QualifiedType,
    pub request_message: MessageModel,
    pub response_message: MessageModel,
    pub event_message: MessageModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionModel {
    pub interface_path: InterfacePath,
    #[serde(rename = "type")]
    pub ty: QualifiedType,
    pub goal: MessageModel,
    pub result: MessageModel,
    pub feedback: MessageModel,
    pub send_goal_service: ServiceModel,
    pub get_result_service: ServiceModel,
    pub feedback_message: MessageModel,
}

/// Everything declared by one interface file.
///
/// Exactly one of `messages`, `services` and `actions` holds an entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceModel {
    pub interface_path: InterfacePath,
    #[serde(rename = "type")]
    pub ty: QualifiedType,
    pub messages: Vec<MessageInterface>,
    pub services: Vec<ServiceModel>,
    pub actions: Vec<ActionModel>,
    /// Any string in the model contains a byte above 127.
    pub has_non_ascii: bool,
}
