use rosidl_core::TypeDescriptor;
use rosidl_idl::{ParseError, TypedefScope, parse_idl, parse_idl_str, parse_include};

const HEADER_IDL: &str = r#"// generated from rosidl_adapter/resource/msg.idl.em
// with input from std_msgs/msg/Header.msg
// generated code does not contain a copyright notice

#include "builtin_interfaces/msg/Time.idl"

module std_msgs {
  module msg {
    @verbatim (language="comment", text=
      "Standard metadata for higher-level stamped data types.")
    struct Header {
      @verbatim (language="comment", text=
        "Two-integer timestamp that is expressed as seconds and nanoseconds.")
      builtin_interfaces::msg::Time stamp;

      @verbatim (language="comment", text=
        "Transform frame with which this data is associated.")
      string frame_id;
    };
  };
};
"#;

#[test]
fn include_accepts_quoted_and_angle_paths() {
    let mut cursor = "#include \"pkg/msg/A.idl\"\nmodule";
    assert_eq!(parse_include(&mut cursor).unwrap(), "pkg/msg/A.idl");
    assert_eq!(cursor, "module");

    let mut cursor = "#include <pkg/msg/B.idl>\n";
    assert_eq!(parse_include(&mut cursor).unwrap(), "pkg/msg/B.idl");
    assert_eq!(cursor, "");
}

#[test]
fn full_document_parses_completely() {
    let outcome = parse_idl_str(HEADER_IDL);
    assert!(outcome.is_complete());

    let file = outcome.into_result().expect("complete parse");
    assert_eq!(file.includes, ["builtin_interfaces/msg/Time.idl"]);
    let header = &file.modules[0].modules[0].structures[0];
    assert_eq!(header.name, "Header");
    assert_eq!(
        header.comments,
        ["Standard metadata for higher-level stamped data types."]
    );
    assert_eq!(
        header.members[0].ty,
        TypeDescriptor::namespaced(["builtin_interfaces", "msg"], "Time")
    );
    assert_eq!(header.members[1].name, "frame_id");
    assert_eq!(
        header.members[1].comments,
        ["Transform frame with which this data is associated."]
    );
}

#[test]
fn failure_keeps_partial_tree_and_remaining_input() {
    let outcome = parse_idl_str(
        r#"#include "a.idl"
module good { struct A { uint8 x; }; };
module bad { struct B { uint8 y } };
module never { };
"#,
    );
    assert!(!outcome.is_complete());
    assert_eq!(outcome.file.includes, ["a.idl"]);
    assert_eq!(outcome.file.modules.len(), 1);
    assert_eq!(outcome.file.modules[0].name, "good");

    let failure = outcome.failure.expect("failure recorded");
    assert!(matches!(failure.error, ParseError::Expected { .. }));
    assert!(failure.remaining.starts_with("} };"));
    assert!(failure.remaining.contains("module never"));
}

#[test]
fn unexpected_top_level_declaration_fails() {
    let outcome = parse_idl_str("struct Loose { uint8 x; };");
    assert!(outcome.file.modules.is_empty());
    let failure = outcome.into_result().unwrap_err();
    assert!(matches!(failure.error, ParseError::UnexpectedTopLevel(_)));
    assert_eq!(failure.remaining, "struct Loose { uint8 x; };");
}

#[test]
fn unterminated_comment_fails_the_document() {
    let outcome = parse_idl_str("module a { /* open\n };");
    assert_eq!(
        outcome.failure.map(|f| f.error),
        Some(ParseError::UnterminatedComment)
    );
}

#[test]
fn root_scope_typedefs_apply_to_the_whole_document() {
    let mut scope = TypedefScope::builtin();
    scope.insert("Stamp", "builtin_interfaces::msg::Time");
    let outcome = parse_idl(
        "module a { module b { struct S { Stamp t; }; }; };",
        &scope,
    );
    let file = outcome.into_result().unwrap();
    assert_eq!(
        file.modules[0].modules[0].structures[0].members[0].ty,
        TypeDescriptor::namespaced(["builtin_interfaces", "msg"], "Time")
    );
}

#[test]
fn empty_document_is_complete() {
    let outcome = parse_idl_str("  // nothing here\n");
    assert!(outcome.is_complete());
    assert!(outcome.file.modules.is_empty());
}
