use smalljson_core::{parse, Value, ValueType};

/// Helper: compare against serde_json's reading of the same document.
fn assert_same_as_serde(input: &str) {
    let ours = parse(input).expect("parse failed");
    let theirs: serde_json::Value = serde_json::from_str(input).unwrap();
    let converted = serde_json::Value::try_from(&ours).unwrap();
    assert_eq!(
        converted, theirs,
        "Tree mismatch:\n  input: {input}\n  ours:  {ours}"
    );
}

// ============================================================================
// Root Containers
// ============================================================================

#[test]
fn parse_empty_object() {
    let v = parse("{}").unwrap();
    assert!(v.is_object());
    assert!(v.to_object().unwrap().is_empty());
}

#[test]
fn parse_empty_array() {
    let v = parse("[]").unwrap();
    assert!(v.is_array());
    assert!(v.to_array().unwrap().is_empty());
}

#[test]
fn parse_empty_containers_with_inner_whitespace() {
    assert_eq!(parse("{ \n\t }").unwrap().to_string(), "{}");
    assert_eq!(parse("[\r\n]").unwrap().to_string(), "[]");
}

#[test]
fn parse_surrounding_whitespace() {
    let v = parse(" \t\r\n[1] \n\t\r ").unwrap();
    assert_eq!(v.to_string(), "[1]");
}

#[test]
fn parse_from_str() {
    let v: Value = r#"{"k":"v"}"#.parse().unwrap();
    assert_eq!(v.at("k").unwrap().as_str(), Some("v"));
}

// ============================================================================
// Scalars Inside Containers
// ============================================================================

#[test]
fn parse_booleans_and_null() {
    let v = parse("[true,false,null]").unwrap();
    assert_eq!(v.at(0).unwrap().as_bool(), Some(true));
    assert_eq!(v.at(1).unwrap().as_bool(), Some(false));
    assert!(v.at(2).unwrap().is_null());
}

#[test]
fn parse_integer_keeps_literal() {
    let v = parse("[0,-0,42,-7]").unwrap();
    let texts: Vec<&str> = v
        .to_array()
        .unwrap()
        .iter()
        .map(|n| n.as_number().unwrap().as_str())
        .collect();
    assert_eq!(texts, ["0", "-0", "42", "-7"]);
}

#[test]
fn parse_fraction_and_exponent_keep_literal() {
    let v = parse("[0.5,3.140,1e10,1E+2,-2.5e-3]").unwrap();
    assert_eq!(v.to_string(), "[0.5,3.140,1e10,1E+2,-2.5e-3]");
}

#[test]
fn parse_huge_number_is_not_evaluated() {
    let big = "123456789012345678901234567890.000000000000000000001e999";
    let v = parse(&format!("[{big}]")).unwrap();
    assert_eq!(v[0].as_number().unwrap().as_str(), big);
}

#[test]
fn parse_string_decodes_escapes() {
    let v = parse(r#"["line1\nline2","tab\there","q\"uote","back\\slash","\b\f\r"]"#).unwrap();
    assert_eq!(v[0].as_str(), Some("line1\nline2"));
    assert_eq!(v[1].as_str(), Some("tab\there"));
    assert_eq!(v[2].as_str(), Some("q\"uote"));
    assert_eq!(v[3].as_str(), Some("back\\slash"));
    assert_eq!(v[4].as_str(), Some("\u{8}\u{c}\r"));
}

#[test]
fn parse_unicode_escape_is_kept_verbatim() {
    let v = parse(r#"["caf\u00e9"]"#).unwrap();
    assert_eq!(v[0].as_str(), Some(r"caf\u00e9"));
}

#[test]
fn parse_unicode_escape_hex_digits_not_checked() {
    let v = parse(r#"["\uZZ"]"#).unwrap();
    assert_eq!(v[0].as_str(), Some(r"\uZZ"));
}

#[test]
fn parse_solidus_escape_is_kept_verbatim() {
    let v = parse(r#"["a\/b"]"#).unwrap();
    assert_eq!(v[0].as_str(), Some(r"a\/b"));
}

#[test]
fn parse_raw_utf8_text() {
    let v = parse("{\"gr\u{fc}\u{df}e\":\"\u{4f60}\u{597d}\"}").unwrap();
    assert_eq!(v.at("gr\u{fc}\u{df}e").unwrap().as_str(), Some("\u{4f60}\u{597d}"));
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn parse_flat_object() {
    let v = parse(r#"{"name":"Alice","age":30,"active":true}"#).unwrap();
    assert_eq!(v.at("name").unwrap().as_str(), Some("Alice"));
    assert_eq!(v.at("age").unwrap().as_number().unwrap().as_str(), "30");
    assert_eq!(v.at("active").unwrap().as_bool(), Some(true));
}

#[test]
fn parse_object_whitespace_everywhere() {
    let v = parse("{ \"a\" \n:\t1 ,\r\n \"b\" : [ 2 , 3 ] }").unwrap();
    assert_eq!(v.to_string(), r#"{"a":1,"b":[2,3]}"#);
}

#[test]
fn parse_duplicate_keys_last_wins() {
    let v = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(v.at("a").unwrap().to_string(), "2");
    assert_eq!(v.to_object().unwrap().len(), 1);
}

#[test]
fn parse_escaped_key_is_unescaped() {
    let v = parse(r#"{"a\tb":1}"#).unwrap();
    assert!(v.to_object().unwrap().contains_key("a\tb"));
}

#[test]
fn parse_empty_key() {
    let v = parse(r#"{"":0}"#).unwrap();
    assert_eq!(v.at("").unwrap().to_string(), "0");
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn parse_nested_structures() {
    let v = parse(r#"{"user":{"tags":["a",{"deep":[[],{}]}]}}"#).unwrap();
    let deep = v.at("user").unwrap().at("tags").unwrap().at(1).unwrap().at("deep").unwrap();
    assert_eq!(deep.value_type(), ValueType::Array);
    assert!(deep[0].is_array());
    assert!(deep[1].is_object());
}

#[test]
fn parse_array_of_mixed_values() {
    assert_same_as_serde(r#"[1,"two",3.5,true,null,{"k":[false]},[]]"#);
}

#[test]
fn parse_realistic_document() {
    assert_same_as_serde(
        r#"{
            "id": "evt_123",
            "summary": "Standup",
            "attendees": [
                {"email": "a@example.com", "optional": false},
                {"email": "b@example.com", "optional": true}
            ],
            "reminders": {"useDefault": false, "overrides": [{"minutes": 10}]},
            "sequence": 0
        }"#,
    );
}

#[test]
fn parse_many_siblings() {
    let input = format!(
        "[{}]",
        (0..1000).map(|i| i.to_string()).collect::<Vec<_>>().join(",")
    );
    let v = parse(&input).unwrap();
    assert_eq!(v.to_array().unwrap().len(), 1000);
    assert_eq!(v[999].to_string(), "999");
}
