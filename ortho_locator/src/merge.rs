//! Deep-merge mechanics behind `merge()` terminals.

use crate::error::{InvalidOperation, LocatorError, LocatorResult};
use crate::value::{Mapping, Value};

/// How two sequences meeting at the same key are combined.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SequenceStrategy {
    /// The incoming sequence replaces the existing one.
    #[default]
    Replace,
    /// The incoming elements are appended to the existing sequence.
    Concatenate,
}

/// Capability token authorising a `merge()` terminal.
///
/// A merge rewrites a whole subtree, so [`crate::store`] refuses merge
/// locators unless the caller passes a context through
/// [`crate::store_with_context`].
///
/// # Examples
///
/// ```rust
/// use ortho_locator::{MergeContext, SequenceStrategy, Value, store_with_context, target};
/// use serde_json::json;
///
/// let mut data = Value::from(json!({"x": {"tags": ["a"]}}));
/// let ctx = MergeContext::new().with_sequence_strategy(SequenceStrategy::Concatenate);
/// store_with_context(&mut data, target().item("x").merge(), json!({"tags": ["b"]}), &ctx)?;
/// assert_eq!(data, Value::from(json!({"x": {"tags": ["a", "b"]}})));
/// # Ok::<_, ortho_locator::LocatorError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct MergeContext {
    sequences: SequenceStrategy,
}

impl MergeContext {
    /// Create a context with the default strategies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequences: SequenceStrategy::Replace,
        }
    }

    /// Choose how sequences are combined.
    #[must_use]
    pub const fn with_sequence_strategy(mut self, strategy: SequenceStrategy) -> Self {
        self.sequences = strategy;
        self
    }

    /// The sequence strategy in force.
    #[must_use]
    pub const fn sequence_strategy(&self) -> SequenceStrategy {
        self.sequences
    }
}

/// Overlay the mapping `incoming` onto `existing`, updating it in place.
///
/// Behaviour:
/// - Mappings merge recursively (keys are added or overwritten, and nested
///   mappings are overlaid).
/// - Keys absent from `incoming` are left untouched.
/// - Sequences replace or concatenate according to the context.
/// - Every other combination takes the incoming value.
///
/// # Errors
///
/// - [`InvalidOperation::MergeValue`] when `incoming` is not a mapping.
/// - [`LocatorError::MergeConflict`] when `existing` is not a mapping.
pub fn merge_value(existing: &mut Value, incoming: Value, ctx: &MergeContext) -> LocatorResult<()> {
    let Value::Mapping(layer) = incoming else {
        return Err(InvalidOperation::merge_value(&incoming).into());
    };
    let Value::Mapping(target) = existing else {
        return Err(LocatorError::merge_conflict(existing));
    };
    tracing::debug!(keys = layer.len(), "deep-merging mapping");
    merge_mapping(target, layer, ctx);
    Ok(())
}

fn merge_mapping(target: &mut Mapping, layer: Mapping, ctx: &MergeContext) {
    for (key, value) in layer {
        match target.get_mut(&key) {
            Some(existing) => merge_entry(existing, value, ctx),
            None => {
                target.insert(key, value);
            }
        }
    }
}

fn merge_entry(existing: &mut Value, incoming: Value, ctx: &MergeContext) {
    match (existing, incoming) {
        (Value::Mapping(target), Value::Mapping(layer)) => merge_mapping(target, layer, ctx),
        (Value::Sequence(items), Value::Sequence(extra))
            if ctx.sequences == SequenceStrategy::Concatenate =>
        {
            items.extend(extra);
        }
        (slot, value) => *slot = value,
    }
}
