use smalljson_core::{parse, Array, Number, Object, Value};

/// Assert that `parse(s).to_string()` is a fixed point after one normalization.
fn assert_idempotent(input: &str) {
    let first = parse(input).expect("parse failed").to_string();
    let second = parse(&first).expect("reparse failed").to_string();
    assert_eq!(
        first, second,
        "Not a fixed point:\n  input:  {input}\n  first:  {first}\n  second: {second}"
    );
}

/// Assert that a programmatically built tree survives serialize → parse.
fn assert_roundtrip(value: &Value) {
    let text = value.to_string();
    let back = parse(&text).expect("parse of serialized tree failed");
    assert_eq!(&back, value, "Roundtrip failed:\n  text: {text}");
}

// ============================================================================
// Built Trees
// ============================================================================

#[test]
fn roundtrip_empty_containers() {
    assert_roundtrip(&Value::from(Array::new()));
    assert_roundtrip(&Value::from(Object::new()));
}

#[test]
fn roundtrip_scalars_in_array() {
    let arr: Array = vec![
        Value::Null,
        Value::from(true),
        Value::from(false),
        Value::from(0),
        Value::from(-12345),
        Value::from(0.25),
        Value::from(Number::from_literal("6.02e23").unwrap()),
        Value::from(""),
        Value::from("plain"),
    ]
    .into();
    assert_roundtrip(&Value::from(arr));
}

#[test]
fn roundtrip_control_characters() {
    let obj: Object = [
        ("newline", "a\nb"),
        ("tab", "a\tb"),
        ("backslash", "a\\b"),
        ("backspace", "a\u{8}b"),
        ("carriage", "a\rb"),
        ("quote", "a\"b"),
        ("formfeed", "a\u{c}b"),
    ]
    .into_iter()
    .collect();
    assert_roundtrip(&Value::from(obj));
}

#[test]
fn roundtrip_escaped_keys() {
    let obj: Object = [("k\"e\\y\n", 1)].into_iter().collect();
    assert_roundtrip(&Value::from(obj));
}

#[test]
fn roundtrip_unicode_text() {
    let arr: Array = ["caf\u{e9}", "\u{4f60}\u{597d}", "\u{1f600}"].into_iter().collect();
    assert_roundtrip(&Value::from(arr));
}

#[test]
fn roundtrip_nested_tree() {
    let mut leaf = Object::new();
    leaf.insert("ok", true);
    let mut mid = Array::new();
    mid.push(leaf.clone());
    mid.push(Array::new());
    mid.push(Object::new());
    let mut root = Object::new();
    root.insert("mid", mid);
    root.insert("leaf", leaf);
    assert_roundtrip(&Value::from(root));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn idempotent_on_formatted_input() {
    assert_idempotent("{\n  \"b\": [1, 2.0, -3e2],\n  \"a\": {\"x\": null}\n}");
}

#[test]
fn idempotent_with_duplicate_keys() {
    assert_idempotent(r#"{"a":1,"b":2,"a":3}"#);
}

#[test]
fn idempotent_with_unicode_escapes() {
    // The first pass turns `\u0041` into an escaped backslash; from then on it is stable.
    assert_idempotent(r#"["\u0041","x\/y"]"#);
}

#[test]
fn idempotent_with_all_escapes() {
    assert_idempotent(r#"{"s":"\"\\\b\f\n\r\t"}"#);
}

#[test]
fn canonical_output_is_its_own_normal_form() {
    let canonical = r#"{"a":[true,false,null],"b":{"c":"d"},"e":1.5E-3}"#;
    assert_eq!(parse(canonical).unwrap().to_string(), canonical);
}

// ============================================================================
// Copy and Move
// ============================================================================

#[test]
fn clone_is_deep() {
    let original = parse(r#"{"list":[1,{"k":"v"}]}"#).unwrap();
    let mut copy = original.clone();
    *copy.at_mut("list").unwrap().at_mut(1).unwrap().at_mut("k").unwrap() = Value::from("changed");
    copy.at_mut("list").unwrap().to_array_mut().unwrap().push(3);

    assert_eq!(original.to_string(), r#"{"list":[1,{"k":"v"}]}"#);
    assert_eq!(copy.to_string(), r#"{"list":[1,{"k":"changed"},3]}"#);
}

#[test]
fn move_transfers_subtree() {
    let mut doc = parse(r#"{"big":[[1,2],[3,4]],"other":0}"#).unwrap();
    let big = doc.at_mut("big").unwrap().take();
    assert!(doc.at("big").unwrap().is_null());
    assert_eq!(big.to_string(), "[[1,2],[3,4]]");

    let mut target = Object::new();
    target.insert("moved", big);
    assert_eq!(Value::from(target).to_string(), r#"{"moved":[[1,2],[3,4]]}"#);
}
