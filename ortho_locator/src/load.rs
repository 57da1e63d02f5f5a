//! The read interpreter.

use std::borrow::Cow;

use crate::access::{get_attr, get_item, get_item_or_attr};
use crate::error::{LocatorError, LocatorResult, LookupError};
use crate::locator::{IntoLocator, Kind, Step};
use crate::presence::Presence;
use crate::value::Value;

/// Resolve `locator` against `data`.
///
/// Lookups that fail resolve to [`crate::NOT_PRESENT`], and absence
/// propagates through the rest of the chain. `data` is never modified.
/// Plain strings are compiled as source paths.
///
/// # Errors
///
/// - [`LocatorError::Lookup`] when a `required()` step meets absence; the
///   error is the lookup failure that produced the absence.
/// - [`LocatorError::Conversion`] when a converter rejects its input.
/// - [`LocatorError::InvalidOperation`] for target locators.
///
/// # Examples
///
/// ```
/// use ortho_locator::{NOT_PRESENT, Record, Value, load, source};
/// use serde_json::json;
///
/// let data = Value::from(json!({"foo": ["a", "b"]}));
/// assert_eq!(load(&data, source().item("foo").item(1))?.into_option(), Some(Value::from("b")));
/// assert_eq!(load(&data, source().item("foo").item(5).attr("x"))?, NOT_PRESENT);
/// assert_eq!(load(&data, "foo.0")?.into_option(), Some(Value::from("a")));
/// # Ok::<_, ortho_locator::LocatorError>(())
/// ```
pub fn load(data: &Value, locator: impl IntoLocator) -> LocatorResult<Presence> {
    let locator = locator.into_locator(Kind::Source).expect_kind(Kind::Source)?;
    let mut current: Result<Cow<'_, Value>, LookupError> = Ok(Cow::Borrowed(data));
    for step in locator.steps() {
        current = match (step, current) {
            (Step::Required, Err(failure)) => return Err(failure.into()),
            (_, Err(failure)) => Err(failure),
            (Step::Item(key), Ok(value)) => descend(value, |node| get_item(node, key)),
            (Step::Attr(name), Ok(value)) => descend(value, |node| get_attr(node, name)),
            (Step::ItemOrAttr(name), Ok(value)) => {
                descend(value, |node| get_item_or_attr(node, name))
            }
            (Step::Convert(converter), Ok(value)) => {
                let converted = converter
                    .apply(value.into_owned())
                    .map_err(|source| LocatorError::conversion(converter.name(), source))?;
                Ok(Cow::Owned(converted))
            }
            (Step::Required | Step::Append | Step::Insert(_) | Step::Merge, Ok(value)) => {
                Ok(value)
            }
        };
    }
    if let Err(failure) = &current {
        tracing::trace!(%locator, %failure, "locator resolved to NOT_PRESENT");
    }
    Ok(current.ok().map(Cow::into_owned).into())
}

fn descend<'a>(
    value: Cow<'a, Value>,
    lookup: impl for<'b> Fn(&'b Value) -> Result<&'b Value, LookupError>,
) -> Result<Cow<'a, Value>, LookupError> {
    match value {
        Cow::Borrowed(node) => lookup(node).map(Cow::Borrowed),
        Cow::Owned(node) => lookup(&node).cloned().map(Cow::Owned),
    }
}
