//! Attribute-bearing records.

use std::collections::BTreeMap;

use super::Value;
use crate::error::LookupError;

/// Whether a [`Record`] accepts attributes it was not created with.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Shape {
    /// New attributes may be assigned directly on the record.
    #[default]
    Open,
    /// Only attributes present at construction may be assigned.
    Closed,
}

/// A named bag of attributes, navigated with `.attr` steps.
///
/// Records never support item access and are never auto-vivified: an
/// intermediate attribute must already exist before a store can descend
/// through it.
///
/// ```
/// use ortho_locator::{Record, Shape, Value};
///
/// let server = Record::closed("Server")
///     .with_field("host", "localhost")
///     .with_field("port", 8080);
/// assert_eq!(server.shape(), Shape::Closed);
/// assert_eq!(server.field("port"), Some(&Value::from(8080)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    type_name: String,
    shape: Shape,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record that accepts new attributes.
    #[must_use]
    pub fn open(type_name: impl Into<String>) -> Self {
        Self::with_shape(type_name, Shape::Open)
    }

    /// Create an empty record that only accepts the attributes added with
    /// [`Record::with_field`].
    #[must_use]
    pub fn closed(type_name: impl Into<String>) -> Self {
        Self::with_shape(type_name, Shape::Closed)
    }

    /// Create an empty record with an explicit shape.
    #[must_use]
    pub fn with_shape(type_name: impl Into<String>, shape: Shape) -> Self {
        Self {
            type_name: type_name.into(),
            shape,
            fields: BTreeMap::new(),
        }
    }

    /// Define an attribute, regardless of the record's shape.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The record's type name, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The record's shape.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the named attribute.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterate over the attributes in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns `true` when the attribute is defined.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub(crate) fn try_field_mut(&mut self, name: &str) -> Result<&mut Value, LookupError> {
        let Self {
            type_name, fields, ..
        } = self;
        fields
            .get_mut(name)
            .ok_or_else(|| LookupError::AttributeNotFound {
                type_name: type_name.clone(),
                name: name.to_owned(),
            })
    }

    pub(crate) fn insert_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_owned(), value);
    }
}
