//! Attribute capability for records.

use super::AttrAccess;
use crate::error::LookupError;
use crate::value::{Record, Shape, Value};

impl AttrAccess for Record {
    fn attr(&self, name: &str) -> Result<&Value, LookupError> {
        self.field(name).ok_or_else(|| self.missing(name))
    }

    fn attr_mut(&mut self, name: &str) -> Result<&mut Value, LookupError> {
        self.try_field_mut(name)
    }

    fn set_attr(&mut self, name: &str, value: Value) -> Result<(), LookupError> {
        if self.shape() == Shape::Closed && !self.has_field(name) {
            return Err(self.missing(name));
        }
        self.insert_field(name, value);
        Ok(())
    }
}

impl Record {
    fn missing(&self, name: &str) -> LookupError {
        LookupError::AttributeNotFound {
            type_name: self.type_name().to_owned(),
            name: name.to_owned(),
        }
    }
}
