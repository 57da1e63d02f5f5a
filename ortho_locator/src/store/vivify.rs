//! Resolution of intermediate steps during a store.

use crate::access::{AttrAccess, ITEM_ACCESS, ItemAccess};
use crate::error::{InvalidOperation, LocatorResult, LookupError};
use crate::locator::Step;
use crate::value::{Key, Value};

/// Where `append()` and `insert()` put their new element.
#[derive(Clone, Copy, Debug)]
pub(super) enum Placement {
    End,
    At(usize),
}

/// Resolve one non-terminal step, creating missing mappings.
pub(super) fn descend<'a>(current: &'a mut Value, step: &Step) -> LocatorResult<&'a mut Value> {
    match step {
        Step::Item(key) => item_slot(current, key),
        Step::Attr(name) => attr_slot(current, name),
        Step::ItemOrAttr(name) => {
            if current.items().is_some() {
                item_slot(current, &Key::from(name.as_str()))
            } else {
                attr_slot(current, name)
            }
        }
        Step::Append => place(current, Placement::End, Value::empty_mapping()),
        Step::Insert(index) => place(current, Placement::At(*index), Value::empty_mapping()),
        Step::Convert(_) | Step::Required => Err(InvalidOperation::SourceOnly {
            operation: step.operation(),
        }
        .into()),
        Step::Merge => Err(InvalidOperation::MergeNotFinal.into()),
    }
}

/// Add `value` to the sequence at `current` and return its slot.
///
/// Indices past the end are clamped, so `insert(n)` on a shorter sequence
/// appends.
pub(super) fn place(
    current: &mut Value,
    placement: Placement,
    value: Value,
) -> LocatorResult<&mut Value> {
    let operation = match placement {
        Placement::End => "append()",
        Placement::At(_) => "insert()",
    };
    let Value::Sequence(items) = current else {
        return Err(LookupError::unsupported(current, operation).into());
    };
    let len = items.len();
    let index = match placement {
        Placement::End => len,
        Placement::At(index) => index.min(len),
    };
    tracing::trace!(index, len, operation, "placing sequence element");
    items.insert(index, value);
    items
        .get_mut(index)
        .ok_or_else(|| LookupError::IndexOutOfRange { index, len }.into())
}

fn item_slot<'a>(current: &'a mut Value, key: &Key) -> LocatorResult<&'a mut Value> {
    match current {
        Value::Mapping(map) => Ok(map.entry(key.to_mapping_key()).or_insert_with(|| {
            tracing::trace!(%key, "auto-vivifying mapping");
            Value::empty_mapping()
        })),
        Value::Sequence(items) => Ok(items.item_mut(key)?),
        other => Err(LookupError::unsupported(other, ITEM_ACCESS).into()),
    }
}

fn attr_slot<'a>(current: &'a mut Value, name: &str) -> LocatorResult<&'a mut Value> {
    match current {
        Value::Record(record) => Ok(record.attr_mut(name)?),
        other => Err(LookupError::attribute_not_found(other, name).into()),
    }
}
