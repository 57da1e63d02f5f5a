//! Constructors for the crate's error types.

use figment::Error as FigmentError;

use super::{ConversionError, InvalidOperation, LocatorError, LookupError};
use crate::value::{Key, Value};

impl LocatorError {
    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_locator::LocatorError;
    /// let fe = figment::Error::from("boom");
    /// let e = LocatorError::gathering(fe);
    /// assert!(matches!(e, LocatorError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Construct a conversion error attributed to the named converter.
    #[must_use]
    pub fn conversion(converter: &str, source: ConversionError) -> Self {
        Self::Conversion {
            converter: converter.to_owned(),
            source,
        }
    }

    /// Construct a merge conflict for the value found at the merge location.
    #[must_use]
    pub fn merge_conflict(existing: &Value) -> Self {
        Self::MergeConflict {
            type_name: existing.type_name().to_owned(),
        }
    }

    /// Returns the lookup failure carried by this error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_locator::{LocatorError, LookupError};
    /// let err = LocatorError::from(LookupError::MissingKey { key: "foo".into() });
    /// assert!(matches!(err.lookup(), Some(LookupError::MissingKey { .. })));
    /// ```
    #[must_use]
    pub const fn lookup(&self) -> Option<&LookupError> {
        match self {
            Self::Lookup(failure) => Some(failure),
            _ => None,
        }
    }
}

impl LookupError {
    pub(crate) fn missing_key(key: &Key) -> Self {
        Self::MissingKey {
            key: key.to_string(),
        }
    }

    pub(crate) fn attribute_not_found(container: &Value, name: &str) -> Self {
        Self::AttributeNotFound {
            type_name: container.type_name().to_owned(),
            name: name.to_owned(),
        }
    }

    pub(crate) fn unsupported(value: &Value, operation: &'static str) -> Self {
        Self::Unsupported {
            type_name: value.type_name().to_owned(),
            operation,
        }
    }
}

impl InvalidOperation {
    pub(crate) fn merge_value(value: &Value) -> Self {
        Self::MergeValue {
            type_name: value.type_name().to_owned(),
        }
    }
}
