use nanojson::parse::{parse_slice, parse_value, parse_value_with, Parser, DEFAULT_MAX_DEPTH};
use nanojson::{Kind, ParseErrorKind, ParseOptions, Value};

fn kind_of(input: &str) -> ParseErrorKind {
    parse_value(input).unwrap_err().kind().clone()
}

#[test]
fn parse_scalar_matrix() {
    let cases: [(&str, Value); 14] = [
        ("null", Value::Null),
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("0", Value::Number(0.0)),
        ("-0", Value::Number(-0.0)),
        ("42", Value::Number(42.0)),
        ("-17.25", Value::Number(-17.25)),
        ("1e3", Value::Number(1000.0)),
        ("2.5E-1", Value::Number(0.25)),
        ("6e+2", Value::Number(600.0)),
        (r#""""#, Value::from("")),
        (r#""hello""#, Value::from("hello")),
        ("  \t\r\n 7 \n", Value::Number(7.0)),
        (r#""héllo wörld""#, Value::from("héllo wörld")),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_value(input).unwrap(), expected, "input: {input:?}");
    }
}

#[test]
fn parse_escape_matrix() {
    let cases = [
        (r#""\"""#, "\""),
        (r#""\\""#, "\\"),
        (r#""\/""#, "/"),
        (r#""\b\f\n\r\t""#, "\u{08}\u{0c}\n\r\t"),
        (r#""\u0041\u00e9""#, "Aé"),
        (r#""\u20AC""#, "€"),
        (r#""\ud83d\ude00""#, "😀"),
        (r#""a\u0000b""#, "a\0b"),
        (r#""mixed \"run\" of text""#, "mixed \"run\" of text"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            parse_value(input).unwrap(),
            Value::from(expected),
            "input: {input}"
        );
    }
}

#[test]
fn parse_container_matrix() {
    let value = parse_value(r#"{"a": [1, {"b": null}], "c": {}, "d": []}"#).unwrap();
    assert_eq!(value.kind(), Kind::Object);
    assert_eq!(value.len(), Some(3));
    assert_eq!(value.get("a").and_then(|a| a.at(0)), Some(&Value::Number(1.0)));
    assert_eq!(
        value.get("a").and_then(|a| a.at(1)).and_then(|o| o.get("b")),
        Some(&Value::Null)
    );
    assert_eq!(value.get("c").and_then(Value::len), Some(0));
    assert_eq!(value.get("d").and_then(Value::len), Some(0));

    let nested = parse_value("[[[]], [[], [[]]]]").unwrap();
    assert_eq!(nested.to_string(), "[[[]],[[],[[]]]]");
}

#[test]
fn parse_object_order_and_duplicates() {
    let value = parse_value(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);

    let value = parse_value(r#"{"k": 1, "other": 0, "k": 2}"#).unwrap();
    assert_eq!(value.to_string(), r#"{"k":2,"other":0}"#);
}

#[test]
fn parse_error_kind_matrix() {
    use ParseErrorKind::*;
    let cases = [
        ("", UnexpectedEnd),
        ("   ", UnexpectedEnd),
        ("[1, 2", UnexpectedEnd),
        (r#"{"a": 1"#, UnexpectedEnd),
        (r#""abc"#, UnexpectedEnd),
        ("nul", UnexpectedEnd),
        ("nulx", UnexpectedCharacter('x')),
        ("not json", UnexpectedCharacter('o')),
        ("undefined", UnexpectedCharacter('u')),
        ("[1,]", UnexpectedCharacter(']')),
        ("[1 2]", UnexpectedCharacter('2')),
        ("{,}", UnexpectedCharacter(',')),
        (r#"{"a" 1}"#, UnexpectedCharacter('1')),
        ("{a: 1}", UnexpectedCharacter('a')),
        (r#"{"a": 1,}"#, UnexpectedCharacter('}')),
        ("[01]", UnexpectedCharacter('1')),
        (".5", UnexpectedCharacter('.')),
        ("+1", UnexpectedCharacter('+')),
        ("'x'", UnexpectedCharacter('\'')),
        ("-", InvalidNumber),
        ("-a", InvalidNumber),
        ("1.", InvalidNumber),
        ("1.e5", InvalidNumber),
        ("1e", InvalidNumber),
        ("1e+", InvalidNumber),
        ("1e400", NumberOutOfRange),
        ("-1e400", NumberOutOfRange),
        (r#""\x""#, InvalidEscape),
        (r#""\u12G4""#, InvalidEscape),
        (r#""\ud800""#, InvalidUnicode),
        (r#""\ud800A""#, InvalidUnicode),
        (r#""\udc00""#, InvalidUnicode),
        ("\"a\nb\"", ControlCharacter),
        ("\"tab\there\"", ControlCharacter),
        ("1 2", TrailingCharacters),
        ("{} []", TrailingCharacters),
        ("01", TrailingCharacters),
        ("null,", TrailingCharacters),
    ];
    for (input, expected) in cases {
        assert_eq!(kind_of(input), expected, "input: {input:?}");
    }
}

#[test]
fn parse_error_position_matrix() {
    let cases = [
        ("", 0, 1, 1),
        ("1 2", 2, 1, 3),
        ("[1,\n 2,\n x]", 9, 3, 2),
        (r#""\q""#, 1, 1, 2),
        ("1e400", 0, 1, 1),
        ("[\"ü\", ?]", 7, 1, 7),
    ];
    for (input, offset, line, column) in cases {
        let err = parse_value(input).unwrap_err();
        assert_eq!(
            (err.offset(), err.line(), err.column()),
            (offset, line, column),
            "input: {input:?}"
        );
    }
}

#[test]
fn parse_error_messages_name_the_location() {
    let err = parse_value("[1,\n  ?]").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected character '?' at line 2, column 3"
    );
}

#[test]
fn parse_depth_limit_matrix() {
    let at_limit = format!(
        "{}{}",
        "[".repeat(DEFAULT_MAX_DEPTH),
        "]".repeat(DEFAULT_MAX_DEPTH)
    );
    assert!(parse_value(&at_limit).is_ok());

    let over = format!("[{at_limit}]");
    assert_eq!(
        kind_of(&over),
        ParseErrorKind::DepthLimit(DEFAULT_MAX_DEPTH)
    );

    let objects = r#"{"a":{"b":{"c":{}}}}"#;
    let options = ParseOptions::new().max_depth(3);
    assert_eq!(
        parse_value_with(objects, options).unwrap_err().kind(),
        &ParseErrorKind::DepthLimit(3)
    );
    let options = ParseOptions::new().max_depth(4);
    assert!(parse_value_with(objects, options).is_ok());

    // Scalars do not count toward depth.
    let options = ParseOptions::new().max_depth(0);
    assert_eq!(parse_value_with("12", options).unwrap(), Value::Number(12.0));
    assert!(parse_value_with("[]", options).is_err());
}

#[test]
fn parse_deep_input_does_not_overflow() {
    let hostile = "[".repeat(1_000_000);
    assert_eq!(
        kind_of(&hostile),
        ParseErrorKind::DepthLimit(DEFAULT_MAX_DEPTH)
    );
}

#[test]
fn parse_slice_matrix() {
    assert_eq!(
        parse_slice(br#"{"x": [true]}"#).unwrap().to_string(),
        r#"{"x":[true]}"#
    );
    let err = parse_slice(b"[\"\xff\"]").unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::InvalidUtf8);
    assert_eq!(err.offset(), 2);
}

#[test]
fn parser_struct_matches_free_functions() {
    let text = r#"[1, "two", {"three": 3}]"#;
    let via_struct = Parser::new(text).parse().unwrap();
    assert_eq!(via_struct, parse_value(text).unwrap());

    let limited = Parser::new(text)
        .with_options(ParseOptions::new().max_depth(1))
        .parse()
        .unwrap_err();
    assert_eq!(limited.kind(), &ParseErrorKind::DepthLimit(1));
}

#[test]
fn parse_large_numbers() {
    let cases = [
        ("9007199254740993", 9_007_199_254_740_992.0),
        ("18446744073709551616", 18_446_744_073_709_551_616.0),
        ("1.7976931348623157e308", f64::MAX),
        ("5e-324", 5e-324),
        ("1e-400", 0.0),
    ];
    for (input, expected) in cases {
        assert_eq!(
            parse_value(input).unwrap(),
            Value::Number(expected),
            "input: {input}"
        );
    }
}
