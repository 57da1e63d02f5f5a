//! Conversions between [`Value`] and the serde ecosystem.
//!
//! Raw configuration arrives already decoded: as a [`serde_json::Value`], as
//! any [`Serialize`] type, or as a [`figment::Figment`] whose providers have
//! gathered files and environment variables. Records serialise as plain
//! maps, so a canonical object assembled with [`crate::store`] can be
//! deserialised straight into a typed configuration struct.

use figment::Figment;
use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

use super::{Mapping, Value};
use crate::error::{LocatorError, LocatorResult};

impl Value {
    /// Build a value from anything serde can serialise.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Json`] when serialisation fails, for example
    /// on maps with non-string keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use ortho_locator::Value;
    ///
    /// let raw = BTreeMap::from([("port", 8080)]);
    /// let value = Value::from_serialize(&raw)?;
    /// assert_eq!(value.as_mapping().and_then(|m| m.get("port")), Some(&Value::from(8080)));
    /// # Ok::<_, ortho_locator::LocatorError>(())
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> LocatorResult<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Extract the configuration gathered by a [`Figment`].
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Gathering`] when a provider fails or the
    /// gathered data cannot be represented.
    pub fn from_figment(figment: &Figment) -> LocatorResult<Self> {
        figment
            .extract::<serde_json::Value>()
            .map(Self::from)
            .map_err(LocatorError::gathering)
    }

    /// Deserialise this value into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Json`] when the value does not match `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_locator::{Value, store, target};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Server { port: u16 }
    ///
    /// let mut canonical = Value::empty_mapping();
    /// store(&mut canonical, target().item("port"), 8080)?;
    /// let server: Server = canonical.deserialize_into()?;
    /// assert_eq!(server.port, 8080);
    /// # Ok::<_, ortho_locator::LocatorError>(())
    /// ```
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> LocatorResult<T> {
        Ok(serde_json::from_value(self.to_json())?)
    }

    /// Convert into a [`serde_json::Value`].
    ///
    /// Records become objects and non-finite floats become `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(flag) => serde_json::Value::Bool(*flag),
            Self::Integer(number) => serde_json::Value::from(*number),
            Self::Unsigned(number) => serde_json::Value::from(*number),
            Self::Float(number) => {
                Number::from_f64(*number).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Self::String(text) => serde_json::Value::String(text.clone()),
            Self::Sequence(items) => items.iter().map(Self::to_json).collect(),
            Self::Mapping(map) => object(map.iter().map(|(key, value)| (key.as_str(), value))),
            Self::Record(record) => object(record.fields()),
        }
    }
}

fn object<'a>(entries: impl Iterator<Item = (&'a str, &'a Value)>) -> serde_json::Value {
    let map: Map<String, serde_json::Value> = entries
        .map(|(key, value)| (key.to_owned(), value.to_json()))
        .collect();
    serde_json::Value::Object(map)
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => {
                if let Some(signed) = number.as_i64() {
                    Self::Integer(signed)
                } else if let Some(unsigned) = number.as_u64() {
                    Self::Unsigned(unsigned)
                } else {
                    number.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect::<Mapping>(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Integer(number) => serializer.serialize_i64(*number),
            Self::Unsigned(number) => serializer.serialize_u64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::String(text) => serializer.serialize_str(text),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Self::Record(record) => {
                let mut out = serializer.serialize_map(None)?;
                for (key, value) in record.fields() {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
