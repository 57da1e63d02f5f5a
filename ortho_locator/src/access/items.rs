//! Item capability for mappings and sequences.

use super::ItemAccess;
use crate::error::LookupError;
use crate::value::{Key, Mapping, Value};

impl ItemAccess for Mapping {
    fn item(&self, key: &Key) -> Result<&Value, LookupError> {
        self.get(&key.to_mapping_key())
            .ok_or_else(|| LookupError::missing_key(key))
    }

    fn item_mut(&mut self, key: &Key) -> Result<&mut Value, LookupError> {
        self.get_mut(&key.to_mapping_key())
            .ok_or_else(|| LookupError::missing_key(key))
    }

    fn set_item(&mut self, key: &Key, value: Value) -> Result<(), LookupError> {
        self.insert(key.to_mapping_key(), value);
        Ok(())
    }
}

impl ItemAccess for Vec<Value> {
    fn item(&self, key: &Key) -> Result<&Value, LookupError> {
        let index = sequence_index(key)?;
        self.get(index).ok_or_else(|| out_of_range(self, index))
    }

    fn item_mut(&mut self, key: &Key) -> Result<&mut Value, LookupError> {
        let index = sequence_index(key)?;
        let len = self.len();
        self.get_mut(index)
            .ok_or(LookupError::IndexOutOfRange { index, len })
    }

    fn set_item(&mut self, key: &Key, value: Value) -> Result<(), LookupError> {
        *self.item_mut(key)? = value;
        Ok(())
    }
}

fn sequence_index(key: &Key) -> Result<usize, LookupError> {
    key.as_index().ok_or_else(|| LookupError::Unsupported {
        type_name: "sequence".to_owned(),
        operation: "non-numeric keys",
    })
}

const fn out_of_range(items: &[Value], index: usize) -> LookupError {
    LookupError::IndexOutOfRange {
        index,
        len: items.len(),
    }
}
