//! The absence sentinel.
//!
//! [`NOT_PRESENT`] marks "no value here". It is not an error: `load`
//! returns it whenever a lookup fails, and `store` skips its terminal
//! assignment when handed it. It is distinct from [`Value::Null`], which is
//! a real value a container may hold.

use std::fmt;

use crate::value::{Mapping, Value};

/// A value, or the absence of one.
#[derive(Clone, Default, PartialEq)]
pub enum Presence<T = Value> {
    /// A resolved value.
    Present(T),
    /// Nothing at this location.
    #[default]
    NotPresent,
}

/// The absence sentinel.
///
/// ```
/// use ortho_locator::{NOT_PRESENT, Value, load};
///
/// let data = Value::empty_mapping();
/// assert_eq!(load(&data, "missing")?, NOT_PRESENT);
/// assert_eq!(format!("{NOT_PRESENT:?}"), "Sentinel('NOT_PRESENT')");
/// # Ok::<_, ortho_locator::LocatorError>(())
/// ```
pub const NOT_PRESENT: Presence = Presence::NotPresent;

impl<T> Presence<T> {
    /// Returns `true` when a value is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for [`NOT_PRESENT`].
    #[must_use]
    pub const fn is_not_present(&self) -> bool {
        matches!(self, Self::NotPresent)
    }

    /// Converts into an [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::NotPresent => None,
        }
    }

    /// Returns the present value or computes one.
    #[must_use]
    pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(value) => value,
            Self::NotPresent => default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Presence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => f.debug_tuple("Present").field(value).finish(),
            Self::NotPresent => f.write_str("Sentinel('NOT_PRESENT')"),
        }
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotPresent, Self::Present)
    }
}

impl From<Value> for Presence {
    fn from(value: Value) -> Self {
        Self::Present(value)
    }
}

impl From<serde_json::Value> for Presence {
    fn from(value: serde_json::Value) -> Self {
        Self::Present(value.into())
    }
}

impl From<Mapping> for Presence {
    fn from(map: Mapping) -> Self {
        Self::Present(Value::Mapping(map))
    }
}

impl From<bool> for Presence {
    fn from(value: bool) -> Self {
        Self::Present(value.into())
    }
}

impl From<i32> for Presence {
    fn from(value: i32) -> Self {
        Self::Present(value.into())
    }
}

impl From<i64> for Presence {
    fn from(value: i64) -> Self {
        Self::Present(value.into())
    }
}

impl From<f64> for Presence {
    fn from(value: f64) -> Self {
        Self::Present(value.into())
    }
}

impl From<&str> for Presence {
    fn from(value: &str) -> Self {
        Self::Present(value.into())
    }
}

impl From<String> for Presence {
    fn from(value: String) -> Self {
        Self::Present(value.into())
    }
}
