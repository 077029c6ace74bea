//! Typed model shared by the IDL parser and the interface lifter.
//!
//! This crate holds the closed, explicit representations of everything the
//! parser produces ([`TypeDescriptor`], [`Value`], [`Member`], [`Structure`],
//! [`Module`], ...). Every type serializes with `serde` to the key layout the
//! code emitters consume.

mod error;
mod model;
mod types;
mod value;

pub use error::ValueTypeError;
pub use model::{Attribute, AttributeContent, Constant, IdlFile, Member, Module, Structure};
pub use types::{StringKind, TypeDescriptor};
pub use value::Value;
