//! The write interpreter.
//!
//! A store walks every step but the last to find the parent container,
//! creating missing intermediate mappings on the way (see [`vivify`]), then
//! applies the final step to it. Mappings are the only containers that are
//! ever created implicitly; sequences never grow except through `append()`
//! and `insert()`, and attributes are never invented on records.

mod vivify;

use crate::access::ITEM_ASSIGNMENT;
use crate::error::{InvalidOperation, LocatorResult, LookupError};
use crate::locator::{IntoLocator, Kind, Locator, Step};
use crate::merge::{MergeContext, merge_value};
use crate::presence::Presence;
use crate::value::{Key, Value};

use vivify::{Placement, descend, place};

/// Assign `value` at the location described by `locator`.
///
/// Storing [`crate::NOT_PRESENT`] skips the final assignment, but `append()`
/// and `insert()` steps still add their placeholder elements. Plain strings
/// are compiled as target paths.
///
/// Side effects performed before a failure are not rolled back.
///
/// # Errors
///
/// - [`InvalidOperation::StoreAtRoot`] for a locator with no steps.
/// - [`InvalidOperation::MergeUnauthorised`] for `merge()` locators; use
///   [`store_with_context`].
/// - [`crate::LocatorError::Lookup`] when the data cannot hold the requested
///   shape: an out-of-range sequence index, an attribute missing from a
///   record, or a scalar where a container is needed.
///
/// # Examples
///
/// ```
/// use ortho_locator::{NOT_PRESENT, Value, store, target};
/// use serde_json::json;
///
/// let mut data = Value::empty_mapping();
/// store(&mut data, "x.y", 2)?;
/// assert_eq!(data, Value::from(json!({"x": {"y": 2}})));
///
/// let mut items = Value::Sequence(Vec::new());
/// store(&mut items, target().append().item("a"), NOT_PRESENT)?;
/// assert_eq!(items, Value::from(json!([{}])));
/// # Ok::<_, ortho_locator::LocatorError>(())
/// ```
pub fn store(
    data: &mut Value,
    locator: impl IntoLocator,
    value: impl Into<Presence>,
) -> LocatorResult<()> {
    run(data, locator.into_locator(Kind::Target), value.into(), None)
}

/// Assign `value` like [`store`], authorising a `merge()` terminal.
///
/// # Errors
///
/// As for [`store`], plus the merge failures described on
/// [`merge_value`](crate::merge_value).
///
/// # Examples
///
/// ```
/// use ortho_locator::{MergeContext, Value, store_with_context, target};
/// use serde_json::json;
///
/// let mut data = Value::from(json!({"x": 1}));
/// store_with_context(&mut data, target().merge(), json!({"y": 2}), &MergeContext::new())?;
/// assert_eq!(data, Value::from(json!({"x": 1, "y": 2})));
/// # Ok::<_, ortho_locator::LocatorError>(())
/// ```
pub fn store_with_context(
    data: &mut Value,
    locator: impl IntoLocator,
    value: impl Into<Presence>,
    ctx: &MergeContext,
) -> LocatorResult<()> {
    run(
        data,
        locator.into_locator(Kind::Target),
        value.into(),
        Some(ctx),
    )
}

fn run(
    data: &mut Value,
    locator: Locator,
    value: Presence,
    ctx: Option<&MergeContext>,
) -> LocatorResult<()> {
    let locator = locator.expect_kind(Kind::Target)?;
    let steps = locator.steps();
    let Some((terminal, parents)) = steps.split_last() else {
        return Err(InvalidOperation::StoreAtRoot.into());
    };
    if matches!(terminal, Step::Merge) && ctx.is_none() {
        return Err(InvalidOperation::MergeUnauthorised.into());
    }
    if value.is_not_present() && !steps.iter().any(|step| step.is_structural()) {
        tracing::trace!(%locator, "skipping store of NOT_PRESENT");
        return Ok(());
    }

    let mut parent = data;
    for step in parents {
        parent = descend(parent, step)?;
    }
    assign(parent, terminal, value, ctx)
}

fn assign(
    parent: &mut Value,
    terminal: &Step,
    value: Presence,
    ctx: Option<&MergeContext>,
) -> LocatorResult<()> {
    match (terminal, value) {
        (Step::Append, value) => {
            place(parent, Placement::End, value.unwrap_or_else(Value::empty_mapping))?;
        }
        (Step::Insert(index), value) => {
            place(
                parent,
                Placement::At(*index),
                value.unwrap_or_else(Value::empty_mapping),
            )?;
        }
        (Step::Convert(_) | Step::Required, _) => {
            return Err(InvalidOperation::SourceOnly {
                operation: terminal.operation(),
            }
            .into());
        }
        (_, Presence::NotPresent) => {}
        (Step::Item(key), Presence::Present(value)) => set_item(parent, key, value)?,
        (Step::Attr(name), Presence::Present(value)) => set_attr(parent, name, value)?,
        (Step::ItemOrAttr(name), Presence::Present(value)) => {
            if parent.items().is_some() {
                set_item(parent, &Key::from(name.as_str()), value)?;
            } else {
                set_attr(parent, name, value)?;
            }
        }
        (Step::Merge, Presence::Present(value)) => {
            let ctx = ctx.ok_or(InvalidOperation::MergeUnauthorised)?;
            merge_value(parent, value, ctx)?;
        }
    }
    Ok(())
}

fn set_item(parent: &mut Value, key: &Key, value: Value) -> Result<(), LookupError> {
    match parent.items_mut() {
        Some(items) => items.set_item(key, value),
        None => Err(LookupError::unsupported(parent, ITEM_ASSIGNMENT)),
    }
}

fn set_attr(parent: &mut Value, name: &str, value: Value) -> Result<(), LookupError> {
    match parent.attrs_mut() {
        Some(attrs) => attrs.set_attr(name, value),
        None => Err(LookupError::attribute_not_found(parent, name)),
    }
}
