//! Primary error enums for locator composition and interpretation.

use std::borrow::Cow;

use figment::Error as FigmentError;
use thiserror::Error;

use super::LookupError;

/// Errors that can occur while building or interpreting a locator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocatorError {
    /// A lookup failed where absence is not acceptable.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The locator was composed or used illegally.
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),

    /// A merge resolved to an existing value that is not a mapping.
    #[error("Cannot merge into existing '{type_name}' value")]
    MergeConflict {
        /// Type name of the value found at the merge location.
        type_name: String,
    },

    /// A `convert()` step rejected its input.
    #[error("Conversion '{converter}' failed: {source}")]
    Conversion {
        /// Name of the converter that failed.
        converter: String,
        /// Description of the rejected input.
        #[source]
        source: ConversionError,
    },

    /// Error while gathering configuration from figment providers.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Error converting between [`crate::Value`] and serde data.
    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Illegal locator compositions and uses.
///
/// Every variant is detected without looking at the data being navigated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidOperation {
    /// A read-only step was applied to a target locator.
    #[error("Cannot use {operation}() as target")]
    SourceOnly {
        /// Name of the rejected builder.
        operation: &'static str,
    },

    /// A structural step was applied to a source locator.
    #[error("Cannot use {operation}() in source")]
    TargetOnly {
        /// Name of the rejected builder.
        operation: &'static str,
    },

    /// A step was appended after `merge()`.
    #[error("merge() must be final operation")]
    MergeNotFinal,

    /// `store` was called with a locator that has no steps.
    #[error("Cannot store at root")]
    StoreAtRoot,

    /// A merge terminal was used without a [`crate::MergeContext`].
    #[error("merge() requires a MergeContext")]
    MergeUnauthorised,

    /// `load` was called with a target locator.
    #[error("Cannot load() from a target locator")]
    LoadFromTarget,

    /// `store` was called with a source locator.
    #[error("Cannot store() through a source locator")]
    StoreThroughSource,

    /// The value handed to a merge terminal is not a mapping.
    #[error("merge() requires a mapping value, found '{type_name}'")]
    MergeValue {
        /// Type name of the rejected value.
        type_name: String,
    },
}

/// Failure reported by a [`crate::Converter`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("cannot convert {found} to {expected}")]
pub struct ConversionError {
    expected: Cow<'static, str>,
    found: String,
}

impl ConversionError {
    /// Create a conversion error describing the target type and the rejected
    /// input.
    #[must_use]
    pub fn new(expected: impl Into<Cow<'static, str>>, found: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Name of the type the converter was producing.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Description of the input that was rejected.
    #[must_use]
    pub fn found(&self) -> &str {
        &self.found
    }
}
