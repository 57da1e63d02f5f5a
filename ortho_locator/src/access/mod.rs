//! Capability traits over the containers in a [`Value`] tree.
//!
//! Interpreters never probe concrete container types. They ask a value for
//! its item capability ([`ItemAccess`], implemented by mappings and
//! sequences) or its attribute capability ([`AttrAccess`], implemented by
//! records) and combine the answers. [`get_item_or_attr`] is the ordered
//! fallback used by string path segments: item access first, attribute
//! access second.

mod attrs;
mod items;

use crate::error::LookupError;
use crate::value::{Key, Value};

/// Containers addressed by key or index.
pub trait ItemAccess {
    /// Borrow the entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the key is missing or out of range.
    fn item(&self, key: &Key) -> Result<&Value, LookupError>;

    /// Mutably borrow the entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the key is missing or out of range.
    fn item_mut(&mut self, key: &Key) -> Result<&mut Value, LookupError>;

    /// Assign the entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the container cannot hold the key, for
    /// example an out-of-range sequence index.
    fn set_item(&mut self, key: &Key, value: Value) -> Result<(), LookupError>;
}

/// Containers addressed by attribute name.
pub trait AttrAccess {
    /// Borrow the named attribute.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::AttributeNotFound`] when it is undefined.
    fn attr(&self, name: &str) -> Result<&Value, LookupError>;

    /// Mutably borrow the named attribute.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::AttributeNotFound`] when it is undefined.
    fn attr_mut(&mut self, name: &str) -> Result<&mut Value, LookupError>;

    /// Assign the named attribute.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::AttributeNotFound`] when the container is
    /// closed-shape and the attribute is undefined.
    fn set_attr(&mut self, name: &str, value: Value) -> Result<(), LookupError>;
}

impl Value {
    /// The value's item capability, if any.
    #[must_use]
    pub fn items(&self) -> Option<&dyn ItemAccess> {
        match self {
            Self::Mapping(map) => Some(map),
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The value's item capability, mutably.
    pub fn items_mut(&mut self) -> Option<&mut dyn ItemAccess> {
        match self {
            Self::Mapping(map) => Some(map),
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The value's attribute capability, if any.
    #[must_use]
    pub fn attrs(&self) -> Option<&dyn AttrAccess> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The value's attribute capability, mutably.
    pub fn attrs_mut(&mut self) -> Option<&mut dyn AttrAccess> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// Look up `key` through the item capability.
///
/// # Errors
///
/// Returns [`LookupError::Unsupported`] when `value` has no item capability,
/// otherwise whatever the container reports.
pub fn get_item<'a>(value: &'a Value, key: &Key) -> Result<&'a Value, LookupError> {
    value
        .items()
        .ok_or_else(|| LookupError::unsupported(value, ITEM_ACCESS))?
        .item(key)
}

/// Look up `name` through the attribute capability.
///
/// # Errors
///
/// Returns [`LookupError::AttributeNotFound`] when `value` has no attribute
/// capability or lacks the attribute.
pub fn get_attr<'a>(value: &'a Value, name: &str) -> Result<&'a Value, LookupError> {
    value
        .attrs()
        .ok_or_else(|| LookupError::attribute_not_found(value, name))?
        .attr(name)
}

/// Look up `name` as an item, falling back to an attribute.
///
/// Item-capable containers report their own failure so a missing mapping
/// key surfaces as [`LookupError::MissingKey`]; everything else falls back
/// to [`get_attr`].
///
/// # Errors
///
/// Returns the failure of the last capability attempted.
pub fn get_item_or_attr<'a>(value: &'a Value, name: &str) -> Result<&'a Value, LookupError> {
    value.items().map_or_else(
        || get_attr(value, name),
        |items| items.item(&Key::from(name)),
    )
}

pub(crate) const ITEM_ACCESS: &str = "item access";
pub(crate) const ITEM_ASSIGNMENT: &str = "item assignment";
