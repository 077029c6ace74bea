use rosidl_core::{TypeDescriptor, Value};
use rosidl_idl::{ParseError, TypedefScope, parse_structure};
use serde_json::json;

fn parse(input: &str) -> (rosidl_core::Structure, &str) {
    let mut cursor = input;
    let structure =
        parse_structure(&mut cursor, &TypedefScope::builtin()).expect("struct should parse");
    (structure, cursor)
}

#[test]
fn empty_struct_consumes_trailing_semicolon() {
    let (structure, rest) = parse("struct EmptyStruct {};// After struct");
    assert_eq!(
        serde_json::to_value(&structure).unwrap(),
        json!({"name": "EmptyStruct", "comments": [], "members": [], "constants": []})
    );
    assert_eq!(rest, "");

    let (structure, rest) = parse("struct EmptyStructWithSpace   \n\t  {\n\n\t   };// After struct");
    assert_eq!(structure.name, "EmptyStructWithSpace");
    assert_eq!(rest, "");
}

#[test]
fn members_and_constants_keep_declaration_order() {
    let (structure, _) = parse(
        r#"struct Point {
            const uint8 DIMENSIONS = 3;
            double x;
            double y; // comment between members
            /* block */ double z;
            const string FRAME = "map";
        };"#,
    );
    let names: Vec<_> = structure.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["x", "y", "z"]);
    let constants: Vec<_> = structure.constants.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(constants, ["DIMENSIONS", "FRAME"]);
    assert_eq!(structure.constants[1].value, Value::string("map"));
}

#[test]
fn default_applies_scalar_value_to_plain_member() {
    let (structure, _) = parse(
        r#"struct Defaults {
            @default (value=1.23)
            double ratio;
            @default (value=TRUE)
            boolean flag;
            @default (value="text")
            string label;
        };"#,
    );
    assert_eq!(structure.members[0].default, Some(Value::Float(1.23)));
    assert_eq!(structure.members[1].default, Some(Value::Bool(true)));
    assert_eq!(structure.members[2].default, Some(Value::string("text")));
}

#[test]
fn default_on_container_parses_tuple_text() {
    let (structure, _) = parse(
        r#"struct Defaults {
            @default (value="(1, 2, 3)")
            int32 values[3];
            @default (value="('a', 'b')")
            sequence<string> names;
            @default (value="()")
            sequence<uint8> empty;
        };"#,
    );
    assert_eq!(
        structure.members[0].default,
        Some(Value::List(vec![Value::UInt(1), Value::UInt(2), Value::UInt(3)]))
    );
    assert_eq!(
        structure.members[1].default,
        Some(Value::List(vec![Value::string("a"), Value::string("b")]))
    );
    assert_eq!(structure.members[2].default, Some(Value::List(vec![])));
}

#[test]
fn only_first_default_counts_while_verbatim_accumulates() {
    let (structure, _) = parse(
        r#"struct Annotated {
            @verbatim (language="comment", text="first line\nsecond line")
            @default (value=1)
            @verbatim (language="comment", text="third line")
            @default (value=2)
            @verbatim (language="rst", text="ignored")
            uint8 value;
        };"#,
    );
    let member = &structure.members[0];
    assert_eq!(member.default, Some(Value::UInt(1)));
    assert_eq!(member.comments, ["first line", "second line", "third line"]);
}

#[test]
fn key_attribute_marks_member() {
    let (structure, _) = parse("struct Keyed { @key long id; long other; };");
    assert!(structure.members[0].key);
    assert_eq!(structure.members[0].ty, TypeDescriptor::scalar("int32"));
    assert!(!structure.members[1].key);
    assert_eq!(
        serde_json::to_value(&structure.members[0]).unwrap(),
        json!({"name": "id", "type": {"name": "int32"}, "comments": [], "key": true})
    );
}

#[test]
fn attributes_apply_only_to_the_next_member() {
    let (structure, _) = parse(
        "struct S { @default (value=5) uint8 a; uint8 b; };",
    );
    assert_eq!(structure.members[0].default, Some(Value::UInt(5)));
    assert_eq!(structure.members[1].default, None);
}

#[test]
fn const_discards_buffered_attributes() {
    let (structure, _) = parse(
        r#"struct S {
            @verbatim (language="comment", text="for the const")
            @key
            const uint8 LIMIT = 10;
            uint8 value;
        };"#,
    );
    assert!(structure.constants[0].comments.is_empty());
    assert!(structure.members[0].comments.is_empty());
    assert!(!structure.members[0].key);
}

#[test]
fn type_named_like_keyword_prefix_is_a_member() {
    let (structure, _) = parse("struct S { constants::msg::Limit limit; };");
    assert!(structure.constants.is_empty());
    assert_eq!(
        structure.members[0].ty,
        TypeDescriptor::namespaced(["constants", "msg"], "Limit")
    );
}

#[test]
fn container_default_must_be_a_string() {
    let mut cursor = "struct S { @default (value=1) uint8 values[2]; };";
    assert!(matches!(
        parse_structure(&mut cursor, &TypedefScope::builtin()),
        Err(ParseError::ValueType(_))
    ));
}

#[test]
fn default_without_value_is_fatal() {
    let mut cursor = "struct S { @default uint8 a; };";
    assert_eq!(
        parse_structure(&mut cursor, &TypedefScope::builtin()),
        Err(ParseError::MalformedAttribute("default".to_string()))
    );
}

#[test]
fn unterminated_struct_is_fatal() {
    let mut cursor = "struct S { uint8 a;";
    assert!(matches!(
        parse_structure(&mut cursor, &TypedefScope::builtin()),
        Err(ParseError::Expected { .. })
    ));

    let mut cursor = "struct S { uint8 a; }";
    assert!(matches!(
        parse_structure(&mut cursor, &TypedefScope::builtin()),
        Err(ParseError::Expected { .. })
    ));
}
