//! Recursive-descent parser for ROS 2 `.idl` documents.
//!
//! Every parser takes the remaining input as a `&mut &str` cursor and advances
//! it past what it recognised. Declarations are built directly into the
//! [`rosidl_core`] model.
//!
//! # Pipeline
//!
//! ```text
//! IDL text
//!   └─ parse_idl            – includes and top-level modules, partial result on error
//!       └─ parse_module     – nested modules, structs, consts, typedefs, attributes
//!           └─ parse_structure  – members and consts with their attributes
//!               └─ parse_member / parse_constant / parse_attribute
//!                   └─ parse_type + interpret_type  – type text → TypeDescriptor
//! ```
//!
//! Typedefs are resolved while parsing through a [`TypedefScope`] chain and do
//! not appear in the resulting tree.

mod decl;
mod error;
mod file;
mod lex;
mod literal;
mod module;
mod structure;
mod typedef;
mod types;

pub use decl::{parse_attribute, parse_constant, parse_member, parse_typedef};
pub use error::ParseError;
pub use file::{ParseFailure, ParseOutcome, parse_idl, parse_idl_str, parse_include};
pub use lex::{consume_comment, consume_white_space, consume_white_space_and_comment, parse_name};
pub use literal::{parse_default_list, parse_string, parse_string_part, parse_string_python, parse_value};
pub use module::parse_module;
pub use structure::parse_structure;
pub use typedef::TypedefScope;
pub use types::{interpret_type, parse_type};
