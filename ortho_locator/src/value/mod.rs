//! Heterogeneous data graph navigated by locators.
//!
//! A [`Value`] tree mixes three container shapes:
//!
//! - mappings keyed by strings, which support item access and
//!   auto-vivification;
//! - sequences, which support index access but never grow implicitly;
//! - [`Record`]s, which carry named attributes and a type name.
//!
//! Scalars terminate the tree and support neither items nor attributes.

mod interop;
mod record;

use std::collections::BTreeMap;
use std::fmt;

pub use record::{Record, Shape};

/// Ordered string-keyed mapping used by [`Value::Mapping`].
pub type Mapping = BTreeMap<String, Value>;

/// A node in a configuration data graph.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// Explicit null. Distinct from [`crate::NOT_PRESENT`].
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Integer(i64),
    /// Unsigned integer scalar above [`i64::MAX`].
    ///
    /// Integers that fit in an `i64` are always held as [`Value::Integer`].
    Unsigned(u64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered sequence.
    Sequence(Vec<Value>),
    /// String-keyed mapping.
    Mapping(Mapping),
    /// Attribute-bearing record.
    Record(Record),
}

impl Value {
    /// Returns an empty mapping, the placeholder used for auto-vivification.
    #[must_use]
    pub const fn empty_mapping() -> Self {
        Self::Mapping(BTreeMap::new())
    }

    /// Name of the value's type as it appears in error messages.
    ///
    /// Records report their own type name.
    ///
    /// ```
    /// use ortho_locator::{Record, Value};
    /// assert_eq!(Value::from(1).type_name(), "integer");
    /// assert_eq!(Value::from(Record::open("Namespace")).type_name(), "Namespace");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) | Self::Unsigned(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Record(record) => record.type_name(),
        }
    }

    /// Returns the mapping if this value is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the sequence if this value is one.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the record if this value is one.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// Key used by item access: a mapping key or a sequence index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Mapping key. Sequences accept names that parse as an index.
    Name(String),
    /// Sequence index. Mappings look it up by its decimal form.
    Index(usize),
}

impl Key {
    /// Returns the key as it is stored in a mapping.
    #[must_use]
    pub fn to_mapping_key(&self) -> String {
        self.to_string()
    }

    /// Returns the key as a sequence index, if it denotes one.
    ///
    /// Names qualify only in canonical decimal form: ASCII digits with no
    /// sign and no leading zero.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(name) => canonical_index(name),
        }
    }
}

fn canonical_index(name: &str) -> Option<usize> {
    let digits = name.bytes().all(|byte| byte.is_ascii_digit());
    if !digits || name.is_empty() || (name.len() > 1 && name.starts_with('0')) {
        return None;
    }
    name.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}
