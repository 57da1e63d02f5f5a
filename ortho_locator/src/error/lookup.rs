//! Natural lookup failures raised while navigating a data graph.

use thiserror::Error;

/// A failed item, index or attribute lookup.
///
/// During [`crate::load`] these failures are suppressed into
/// [`crate::NOT_PRESENT`]; a `required()` step re-surfaces the one that
/// produced the absence. During [`crate::store`] they are always fatal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// The mapping has no entry for the key.
    #[error("missing key '{key}'")]
    MissingKey {
        /// Key that was looked up.
        key: String,
    },

    /// The sequence has no element at the index.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Index that was looked up.
        index: usize,
        /// Length of the sequence at the time of the lookup.
        len: usize,
    },

    /// The container has no attribute of that name, or cannot carry
    /// attributes at all.
    #[error("'{type_name}' object has no attribute '{name}'")]
    AttributeNotFound {
        /// Type name of the container.
        type_name: String,
        /// Attribute that was looked up.
        name: String,
    },

    /// The value does not support the requested operation.
    #[error("'{type_name}' object does not support {operation}")]
    Unsupported {
        /// Type name of the value.
        type_name: String,
        /// Human-readable name of the operation.
        operation: &'static str,
    },
}
