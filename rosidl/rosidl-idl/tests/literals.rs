use rosidl_core::Value;
use rosidl_idl::{
    ParseError, parse_default_list, parse_string, parse_string_python, parse_value,
};

#[test]
fn double_quoted_string_unescapes_only_quotes() {
    let mut cursor = "\"This is a test string\"Unparsed data";
    assert_eq!(parse_string(&mut cursor).unwrap(), "This is a test string");
    assert_eq!(cursor, "Unparsed data");

    let mut cursor = "\"This is a test string\\\"with escaped elements\"Unparsed data";
    assert_eq!(
        parse_string(&mut cursor).unwrap(),
        "This is a test string\"with escaped elements"
    );

    let mut cursor = "\"This is a test string\\\"with multiple\\\" escaped elements\"Unparsed data";
    assert_eq!(
        parse_string(&mut cursor).unwrap(),
        "This is a test string\"with multiple\" escaped elements"
    );

    let mut cursor = r#""line\nbreak""#;
    assert_eq!(parse_string(&mut cursor).unwrap(), r"line\nbreak");
}

#[test]
fn adjacent_strings_concatenate() {
    let mut cursor = "\"first \" // split\n  \"second\";";
    assert_eq!(parse_string(&mut cursor).unwrap(), "first second");
    assert_eq!(cursor, ";");
}

#[test]
fn python_strings_mix_quote_styles() {
    let mut cursor = r#"'it' "works" rest"#;
    assert_eq!(parse_string_python(&mut cursor).unwrap(), "itworks");
    assert_eq!(cursor, "rest");
}

#[test]
fn unterminated_string_is_fatal() {
    let mut cursor = "\"open";
    assert_eq!(parse_string(&mut cursor), Err(ParseError::UnterminatedString));
}

#[test]
fn numbers_keep_their_written_kind() {
    for (input, expected) in [
        ("42;", Value::UInt(42)),
        ("-7;", Value::Int(-7)),
        ("1.23;", Value::Float(1.23)),
        ("-0.5;", Value::Float(-0.5)),
        ("1e3;", Value::Float(1000.0)),
        ("2E-2;", Value::Float(0.02)),
    ] {
        let mut cursor = input;
        assert_eq!(parse_value(&mut cursor).unwrap(), expected, "input {input:?}");
        assert_eq!(cursor, ";");
    }
}

#[test]
fn booleans_in_both_spellings() {
    for (input, expected) in [("TRUE", true), ("True", true), ("FALSE", false), ("False", false)] {
        let mut cursor = input;
        assert_eq!(parse_value(&mut cursor).unwrap(), Value::Bool(expected));
    }
}

#[test]
fn unknown_literal_start_is_fatal() {
    let mut cursor = "Truest;";
    assert!(matches!(parse_value(&mut cursor), Err(ParseError::MalformedValue(_))));

    let mut cursor = "?;";
    assert!(matches!(parse_value(&mut cursor), Err(ParseError::MalformedValue(_))));
}

#[test]
fn bare_minus_is_an_invalid_number() {
    let mut cursor = "-;";
    assert!(matches!(parse_value(&mut cursor), Err(ParseError::InvalidNumber(_))));
}

#[test]
fn list_literal_holds_mixed_values() {
    let mut cursor = "[1, -2, \"three\", [TRUE]] tail";
    assert_eq!(
        parse_value(&mut cursor).unwrap(),
        Value::List(vec![
            Value::UInt(1),
            Value::Int(-2),
            Value::string("three"),
            Value::List(vec![Value::Bool(true)]),
        ])
    );
    assert_eq!(cursor, "tail");

    let mut cursor = "[]";
    assert_eq!(parse_value(&mut cursor).unwrap(), Value::List(vec![]));
}

#[test]
fn list_literal_without_separator_is_fatal() {
    let mut cursor = "[1 2]";
    assert!(matches!(
        parse_value(&mut cursor),
        Err(ParseError::Expected { expected: "',' or ']'", .. })
    ));
}

#[test]
fn default_list_parses_python_tuples() {
    assert_eq!(
        parse_default_list("(1, 2, 3)").unwrap(),
        Value::List(vec![Value::UInt(1), Value::UInt(2), Value::UInt(3)])
    );
    assert_eq!(
        parse_default_list("('a', \"b\",)").unwrap(),
        Value::List(vec![Value::string("a"), Value::string("b")])
    );
    assert_eq!(
        parse_default_list("(False, True)").unwrap(),
        Value::List(vec![Value::Bool(false), Value::Bool(true)])
    );
    assert_eq!(parse_default_list("()").unwrap(), Value::List(vec![]));
}

#[test]
fn default_list_requires_parentheses() {
    assert!(matches!(
        parse_default_list("[1, 2]"),
        Err(ParseError::MalformedDefault(_))
    ));
    assert!(matches!(
        parse_default_list("(1 2)"),
        Err(ParseError::MalformedDefault(_))
    ));
}
