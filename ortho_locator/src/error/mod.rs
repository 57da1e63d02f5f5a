//! Error types produced while composing and interpreting locators.

mod constructors;
mod lookup;
mod types;

pub use lookup::LookupError;
pub use types::{ConversionError, InvalidOperation, LocatorError};

/// Convenience alias for results returned by this crate.
pub type LocatorResult<T> = Result<T, LocatorError>;
