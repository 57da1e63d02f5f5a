//! Integration tests for the write interpreter and auto-vivification.

use anyhow::{Result, ensure};
use ortho_locator::convert::to_integer;
use ortho_locator::{
    InvalidOperation, Locator, LocatorError, LocatorResult, LookupError, Mapping, NOT_PRESENT,
    Record, Value, convert, required, source, store, target,
};
use rstest::rstest;
use serde_json::json;

fn namespace() -> Record {
    Record::open("Namespace")
}

fn json_value(raw: serde_json::Value) -> Value {
    Value::from(raw)
}

fn field<'a>(data: &'a Value, name: &str) -> Option<&'a Value> {
    data.as_record().and_then(|record| record.field(name))
}

fn error_message(result: LocatorResult<()>) -> Option<String> {
    result.err().map(|err| err.to_string())
}

#[test]
fn root_is_rejected() {
    let mut data = json_value(json!(["foo"]));
    let result = store(&mut data, target(), "foo");
    assert!(matches!(
        result,
        Err(LocatorError::InvalidOperation(InvalidOperation::StoreAtRoot))
    ));
    assert_eq!(data, json_value(json!(["foo"])));
}

#[test]
fn item() -> Result<()> {
    let mut data = json_value(json!({"foo": "bar"}));
    store(&mut data, target().item("foo"), "baz")?;
    assert_eq!(data, json_value(json!({"foo": "baz"})));
    Ok(())
}

#[test]
fn item_not_present() -> Result<()> {
    let mut data = json_value(json!({"foo": "bar"}));
    store(&mut data, target().item("foo"), NOT_PRESENT)?;
    assert_eq!(data, json_value(json!({"foo": "bar"})));
    Ok(())
}

#[test]
fn index() -> Result<()> {
    let mut data = json_value(json!(["a", "b"]));
    store(&mut data, target().item(1), "c")?;
    assert_eq!(data, json_value(json!(["a", "c"])));
    Ok(())
}

#[test]
fn index_not_present() -> Result<()> {
    let mut data = json_value(json!(["a", "b"]));
    store(&mut data, target().item(1), NOT_PRESENT)?;
    assert_eq!(data, json_value(json!(["a", "b"])));
    Ok(())
}

#[test]
fn index_out_of_range_never_pads() {
    let mut data = json_value(json!(["a"]));
    let result = store(&mut data, target().item(3), "d");
    assert!(matches!(
        result,
        Err(LocatorError::Lookup(LookupError::IndexOutOfRange { index: 3, len: 1 }))
    ));
    assert_eq!(data, json_value(json!(["a"])));
}

#[test]
fn intermediate_index_out_of_range_never_pads() {
    let mut data = json_value(json!({"items": []}));
    let result = store(&mut data, target().item("items").item(0).item("x"), 1);
    assert!(matches!(
        result,
        Err(LocatorError::Lookup(LookupError::IndexOutOfRange { index: 0, len: 0 }))
    ));
    assert_eq!(data, json_value(json!({"items": []})));
}

#[test]
fn append() -> Result<()> {
    let mut data = json_value(json!(["a", "b"]));
    store(&mut data, target().append(), "c")?;
    assert_eq!(data, json_value(json!(["a", "b", "c"])));
    Ok(())
}

#[test]
fn append_nested() -> Result<()> {
    let mut data = Value::Sequence(Vec::new());
    store(&mut data, target().append().item("a"), "b")?;
    assert_eq!(data, json_value(json!([{"a": "b"}])));
    Ok(())
}

#[test]
fn append_not_present() -> Result<()> {
    let mut data = Value::Sequence(Vec::new());
    store(&mut data, target().append().item("a"), NOT_PRESENT)?;
    assert_eq!(data, json_value(json!([{}])));
    Ok(())
}

#[test]
fn append_terminal_not_present_leaves_placeholder() -> Result<()> {
    let mut data = json_value(json!(["a"]));
    store(&mut data, target().append(), NOT_PRESENT)?;
    assert_eq!(data, json_value(json!(["a", {}])));
    Ok(())
}

#[test]
fn insert() -> Result<()> {
    let mut data = json_value(json!(["a", "b"]));
    store(&mut data, target().insert(1), "c")?;
    assert_eq!(data, json_value(json!(["a", "c", "b"])));
    Ok(())
}

#[test]
fn insert_nested() -> Result<()> {
    let mut data = Value::Sequence(Vec::new());
    store(&mut data, target().insert(0).item("a"), "b")?;
    assert_eq!(data, json_value(json!([{"a": "b"}])));
    Ok(())
}

#[test]
fn insert_not_present() -> Result<()> {
    let mut data = Value::Sequence(Vec::new());
    store(&mut data, target().insert(0).item("a"), NOT_PRESENT)?;
    assert_eq!(data, json_value(json!([{}])));
    Ok(())
}

#[test]
fn insert_terminal_not_present_leaves_placeholder() -> Result<()> {
    let mut data = json_value(json!(["a"]));
    store(&mut data, target().insert(0), NOT_PRESENT)?;
    assert_eq!(data, json_value(json!([{}, "a"])));
    Ok(())
}

#[test]
fn insert_past_the_end_appends() -> Result<()> {
    let mut data = json_value(json!(["a"]));
    store(&mut data, target().insert(9), "b")?;
    assert_eq!(data, json_value(json!(["a", "b"])));
    Ok(())
}

#[rstest]
#[case::append(target().append())]
#[case::insert(target().insert(0))]
fn structural_steps_need_a_sequence(#[case] locator: ortho_locator::Target) {
    let mut data = Value::empty_mapping();
    let result = store(&mut data, locator, "x");
    assert!(matches!(
        result,
        Err(LocatorError::Lookup(LookupError::Unsupported { .. }))
    ));
}

#[test]
fn attr() -> Result<()> {
    let mut data = Value::from(namespace().with_field("x", 1));
    store(&mut data, target().attr("x"), 2)?;
    assert_eq!(field(&data, "x"), Some(&Value::from(2)));
    Ok(())
}

#[test]
fn attr_not_present() -> Result<()> {
    let mut data = Value::from(namespace().with_field("x", 1));
    store(&mut data, target().attr("x"), NOT_PRESENT)?;
    assert_eq!(field(&data, "x"), Some(&Value::from(1)));
    Ok(())
}

#[test]
fn attr_on_open_record_is_created() -> Result<()> {
    let mut data = Value::from(namespace().with_field("foo", "bar"));
    store(&mut data, target().attr("x"), 2)?;
    assert_eq!(field(&data, "x"), Some(&Value::from(2)));
    Ok(())
}

#[test]
fn attr_on_closed_record_must_exist() {
    let mut data = Value::from(Record::closed("Server").with_field("port", 1));
    let result = store(&mut data, target().attr("host"), "db");
    assert_eq!(
        error_message(result).as_deref(),
        Some("'Server' object has no attribute 'host'")
    );
    assert_eq!(field(&data, "host"), None);
}

#[test]
fn nested() -> Result<()> {
    let mut map = Mapping::new();
    map.insert(
        "foo".to_owned(),
        Value::Sequence(vec![
            Value::from("a"),
            Value::from("b"),
            Value::from(namespace().with_field("x", 1)),
        ]),
    );
    let mut data = Value::from(map);
    store(&mut data, target().item("foo").item(2).attr("x"), 2)?;
    let stored = data
        .as_mapping()
        .and_then(|m| m.get("foo"))
        .and_then(Value::as_sequence)
        .and_then(|items| items.get(2))
        .and_then(|item| field(item, "x"));
    assert_eq!(stored, Some(&Value::from(2)));
    Ok(())
}

#[test]
fn string_item() -> Result<()> {
    let mut data = json_value(json!({"foo": "bar"}));
    store(&mut data, "foo", "baz")?;
    assert_eq!(data, json_value(json!({"foo": "baz"})));
    Ok(())
}

#[test]
fn string_attr() -> Result<()> {
    let mut data = Value::from(namespace().with_field("foo", "bar"));
    store(&mut data, "foo", "baz")?;
    assert_eq!(field(&data, "foo"), Some(&Value::from("baz")));
    Ok(())
}

#[test]
fn string_dotted() -> Result<()> {
    let mut map = Mapping::new();
    map.insert("foo".to_owned(), Value::from(namespace().with_field("x", 1)));
    let mut data = Value::from(map);
    store(&mut data, "foo.x", 2)?;
    let stored = data
        .as_mapping()
        .and_then(|m| m.get("foo"))
        .and_then(|foo| field(foo, "x"));
    assert_eq!(stored, Some(&Value::from(2)));
    Ok(())
}

#[test]
fn creates_nested_mappings() -> Result<()> {
    let mut data = Value::empty_mapping();
    store(&mut data, target().item("x").item("y"), 2)?;
    assert_eq!(data, json_value(json!({"x": {"y": 2}})));
    Ok(())
}

#[test]
fn creates_nested_mappings_from_dotted_string() -> Result<()> {
    let mut data = Value::empty_mapping();
    store(&mut data, "x.y", 2)?;
    assert_eq!(data, json_value(json!({"x": {"y": 2}})));
    Ok(())
}

#[test]
fn never_creates_attributes_on_mappings() {
    let mut data = Value::empty_mapping();
    let result = store(&mut data, target().attr("x").attr("y"), 2);
    assert_eq!(
        error_message(result).as_deref(),
        Some("'mapping' object has no attribute 'x'")
    );
    assert_eq!(data, Value::empty_mapping());
}

#[test]
fn never_creates_attributes_from_dotted_string() {
    let mut data = Value::from(namespace());
    let result = store(&mut data, "x.y", 2);
    assert_eq!(
        error_message(result).as_deref(),
        Some("'Namespace' object has no attribute 'x'")
    );
}

#[test]
fn scalars_cannot_hold_items() {
    let mut data = json_value(json!({"x": 1}));
    let result = store(&mut data, target().item("x").item("y"), 2);
    assert!(matches!(
        result,
        Err(LocatorError::Lookup(LookupError::Unsupported { ref type_name, .. })) if type_name == "integer"
    ));
}

#[test]
fn dotted_string_on_a_scalar_falls_back_to_attributes() {
    let mut data = json_value(json!({"x": 1}));
    let result = store(&mut data, "x.y", 2);
    assert_eq!(
        error_message(result).as_deref(),
        Some("'integer' object has no attribute 'y'")
    );
    assert_eq!(data, json_value(json!({"x": 1})));
}

#[test]
fn not_present_leaves_missing_paths_uncreated() -> Result<()> {
    let mut data = Value::empty_mapping();
    store(&mut data, target().item("x").item("y"), NOT_PRESENT)?;
    ensure!(data == Value::empty_mapping(), "absent store created {data:?}");
    Ok(())
}

#[test]
fn side_effects_before_a_failure_remain() {
    let mut data = json_value(json!({"items": []}));
    let result = store(&mut data, target().item("items").append().attr("x"), 1);
    assert!(result.is_err());
    assert_eq!(data, json_value(json!({"items": [{}]})));
}

#[rstest]
#[case::convert(convert(Locator::TARGET, to_integer()), "Cannot use convert() as target")]
#[case::convert_then_attr(
    convert(Locator::TARGET, to_integer()).and_then(|l| l.attr("x")),
    "Cannot use convert() as target"
)]
#[case::required(required(Locator::TARGET), "Cannot use required() as target")]
#[case::required_then_attr(
    required(Locator::TARGET).and_then(|l| l.attr("x")),
    "Cannot use required() as target"
)]
fn read_only_steps_are_rejected_in_target(
    #[case] locator: LocatorResult<Locator>,
    #[case] message: &str,
) {
    let mut data = Value::from("1");
    let result = locator.and_then(|l| store(&mut data, l, "y"));
    assert_eq!(error_message(result).as_deref(), Some(message));
    assert_eq!(data, Value::from("1"));
}

#[test]
fn source_locators_cannot_be_stored_through() {
    let mut data = Value::empty_mapping();
    let result = store(&mut data, source().item("x"), 1);
    assert!(matches!(
        result,
        Err(LocatorError::InvalidOperation(InvalidOperation::StoreThroughSource))
    ));
}

#[test]
fn prototype_locators_are_reusable() -> Result<()> {
    let servers = target().item("servers");
    let mut data = Value::empty_mapping();
    store(&mut data, servers.item("primary").item("host"), "a")?;
    store(&mut data, servers.item("replica").item("host"), "b")?;
    assert_eq!(
        data,
        json_value(json!({"servers": {"primary": {"host": "a"}, "replica": {"host": "b"}}}))
    );
    assert_eq!(servers.to_string(), "target['servers']");
    Ok(())
}
