//! Integration tests for `merge()` terminals.

use anyhow::Result;
use ortho_locator::{
    InvalidOperation, Locator, LocatorError, MergeContext, NOT_PRESENT, SequenceStrategy, Value,
    store, store_with_context, target,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn ctx() -> MergeContext {
    MergeContext::new()
}

fn json_value(raw: serde_json::Value) -> Value {
    Value::from(raw)
}

#[rstest]
fn merge_root(ctx: MergeContext) -> Result<()> {
    let mut data = json_value(json!({"x": 1}));
    store_with_context(&mut data, target().merge(), json!({"y": 2}), &ctx)?;
    assert_eq!(data, json_value(json!({"x": 1, "y": 2})));
    Ok(())
}

#[rstest]
fn merge_nested(ctx: MergeContext) -> Result<()> {
    let mut data = json_value(json!({"x": {"y": 2}}));
    store_with_context(&mut data, target().item("x").merge(), json!({"z": 1}), &ctx)?;
    assert_eq!(data, json_value(json!({"x": {"y": 2, "z": 1}})));
    Ok(())
}

#[rstest]
fn merge_is_deep(ctx: MergeContext) -> Result<()> {
    let mut data = json_value(json!({"db": {"pool": {"min": 1, "max": 4}, "host": "a"}}));
    store_with_context(
        &mut data,
        target().merge(),
        json!({"db": {"pool": {"max": 8}}}),
        &ctx,
    )?;
    assert_eq!(
        data,
        json_value(json!({"db": {"pool": {"min": 1, "max": 8}, "host": "a"}}))
    );
    Ok(())
}

#[rstest]
fn merge_not_present(ctx: MergeContext) -> Result<()> {
    let mut data = json_value(json!({"x": 1}));
    store_with_context(&mut data, target().merge(), NOT_PRESENT, &ctx)?;
    assert_eq!(data, json_value(json!({"x": 1})));
    Ok(())
}

#[rstest]
fn merge_vivifies_a_missing_location(ctx: MergeContext) -> Result<()> {
    let mut data = Value::empty_mapping();
    store_with_context(
        &mut data,
        target().item("x").item("y").merge(),
        json!({"z": 1}),
        &ctx,
    )?;
    assert_eq!(data, json_value(json!({"x": {"y": {"z": 1}}})));
    Ok(())
}

#[rstest]
fn merge_after_append(ctx: MergeContext) -> Result<()> {
    let mut data = json_value(json!({"layers": []}));
    store_with_context(
        &mut data,
        target().item("layers").append().merge(),
        json!({"name": "defaults"}),
        &ctx,
    )?;
    assert_eq!(data, json_value(json!({"layers": [{"name": "defaults"}]})));
    Ok(())
}

#[test]
fn merge_must_be_final() {
    let result = Locator::TARGET.merge().and_then(|locator| locator.attr("x"));
    assert_eq!(
        result.err().map(|err| err.to_string()).as_deref(),
        Some("merge() must be final operation")
    );
}

#[test]
fn merge_needs_a_context() {
    let mut data = json_value(json!({"x": 1}));
    let result = store(&mut data, target().merge(), json!({"y": 2}));
    assert!(matches!(
        result,
        Err(LocatorError::InvalidOperation(InvalidOperation::MergeUnauthorised))
    ));
    assert_eq!(data, json_value(json!({"x": 1})));
}

#[rstest]
fn merge_rejects_a_non_mapping_value(ctx: MergeContext) {
    let mut data = json_value(json!({"x": 1}));
    let result = store_with_context(&mut data, target().merge(), json!([1, 2]), &ctx);
    assert_eq!(
        result.err().map(|err| err.to_string()).as_deref(),
        Some("merge() requires a mapping value, found 'sequence'")
    );
}

#[rstest]
fn merge_into_a_scalar_conflicts(ctx: MergeContext) {
    let mut data = json_value(json!({"x": "scalar"}));
    let result = store_with_context(&mut data, target().item("x").merge(), json!({"y": 1}), &ctx);
    assert!(matches!(
        result,
        Err(LocatorError::MergeConflict { ref type_name }) if type_name == "string"
    ));
    assert_eq!(data, json_value(json!({"x": "scalar"})));
}

#[rstest]
#[case::replace(SequenceStrategy::Replace, json!({"tags": ["b"]}))]
#[case::concatenate(SequenceStrategy::Concatenate, json!({"tags": ["a", "b"]}))]
fn sequence_strategy_is_honoured(
    #[case] strategy: SequenceStrategy,
    #[case] expected: serde_json::Value,
) -> Result<()> {
    let ctx = MergeContext::new().with_sequence_strategy(strategy);
    let mut data = json_value(json!({"tags": ["a"]}));
    store_with_context(&mut data, target().merge(), json!({"tags": ["b"]}), &ctx)?;
    assert_eq!(data, json_value(expected));
    Ok(())
}

#[rstest]
fn plain_stores_accept_a_context(ctx: MergeContext) -> Result<()> {
    let mut data = Value::empty_mapping();
    store_with_context(&mut data, "x.y", 1, &ctx)?;
    assert_eq!(data, json_value(json!({"x": {"y": 1}})));
    Ok(())
}
