use rosidl_core::{TypeDescriptor, Value};
use rosidl_idl::{ParseError, TypedefScope, parse_module};

fn parse(input: &str) -> rosidl_core::Module {
    let mut cursor = input;
    let module = parse_module(&mut cursor, &TypedefScope::builtin()).expect("module should parse");
    assert_eq!(cursor, "", "module should consume its input");
    module
}

#[test]
fn nested_modules_structs_and_constants() {
    let module = parse(
        r#"module pkg {
          module msg {
            module Status_Constants {
              const uint8 OK = 0;
              const uint8 ERROR = 1;
            };
            struct Status {
              uint8 code;
            };
          };
        };"#,
    );
    assert_eq!(module.name, "pkg");
    let msg = module.module("msg").expect("msg module");
    assert_eq!(msg.structures.len(), 1);
    assert_eq!(msg.structures[0].name, "Status");
    let constants = msg.module("Status_Constants").expect("constants module");
    assert_eq!(constants.constants.len(), 2);
    assert_eq!(constants.constants[1].value, Value::UInt(1));
}

#[test]
fn typedef_is_visible_later_in_module_and_descendants() {
    let module = parse(
        r#"module outer {
          typedef uint8 Octets[4];
          struct Before { Octets a; };
          module inner {
            struct Deep { Octets b; };
          };
        };"#,
    );
    let expected = TypeDescriptor::array(TypeDescriptor::scalar("uint8"), 4);
    assert_eq!(module.structures[0].members[0].ty, expected);
    assert_eq!(module.modules[0].structures[0].members[0].ty, expected);
}

#[test]
fn typedef_does_not_leak_to_siblings_or_parents() {
    let module = parse(
        r#"module root {
          module first {
            typedef int64 Stamp;
            struct A { Stamp t; };
          };
          module second {
            struct B { Stamp t; };
          };
          struct C { Stamp t; };
        };"#,
    );
    assert_eq!(
        module.modules[0].structures[0].members[0].ty,
        TypeDescriptor::scalar("int64")
    );
    assert_eq!(
        module.modules[1].structures[0].members[0].ty,
        TypeDescriptor::scalar("Stamp")
    );
    assert_eq!(module.structures[0].members[0].ty, TypeDescriptor::scalar("Stamp"));
}

#[test]
fn nested_typedef_shadows_outer_one() {
    let module = parse(
        r#"module root {
          typedef uint8 Id;
          module inner {
            typedef string<8> Id;
            struct A { Id id; };
          };
          struct B { Id id; };
        };"#,
    );
    assert_eq!(
        module.modules[0].structures[0].members[0].ty,
        TypeDescriptor::bounded_string(rosidl_core::StringKind::String, 8)
    );
    assert_eq!(module.structures[0].members[0].ty, TypeDescriptor::scalar("uint8"));
}

#[test]
fn verbatim_comments_attach_to_next_declaration() {
    let module = parse(
        r#"module pkg {
          @verbatim (language="comment", text="A struct\nwith two lines")
          struct Documented { uint8 a; };
          @verbatim (language="comment", text="A constant")
          const uint8 LIMIT = 3;
          @verbatim (language="comment", text="A module")
          module nested { struct Plain { uint8 b; }; };
        };"#,
    );
    assert_eq!(module.structures[0].comments, ["A struct", "with two lines"]);
    assert_eq!(module.constants[0].comments, ["A constant"]);
    assert_eq!(module.modules[0].comments, ["A module"]);
    assert!(module.modules[0].structures[0].comments.is_empty());
}

#[test]
fn unknown_declaration_makes_no_progress() {
    let mut cursor = "module pkg { enum Color { RED }; };";
    assert!(matches!(
        parse_module(&mut cursor, &TypedefScope::builtin()),
        Err(ParseError::MalformedModule(_))
    ));
}

#[test]
fn missing_module_name_is_fatal() {
    let mut cursor = "module { };";
    assert_eq!(
        parse_module(&mut cursor, &TypedefScope::builtin()),
        Err(ParseError::MissingName("module"))
    );
}
