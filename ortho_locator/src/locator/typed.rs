//! Typed locator wrappers whose builders cannot fail.
//!
//! [`Source`] has no structural builders, [`Target`] has no `convert()` or
//! `required()`, and [`MergeTarget`] has no builders at all, so an illegal
//! chain does not compile.
//!
//! ```
//! use ortho_locator::{Value, load, source, store, target};
//!
//! let mut data = Value::empty_mapping();
//! store(&mut data, target().item("servers").item("primary"), "db1")?;
//! assert_eq!(
//!     load(&data, source().item("servers").item("primary"))?.into_option(),
//!     Some(Value::from("db1"))
//! );
//! # Ok::<_, ortho_locator::LocatorError>(())
//! ```

use std::fmt;

use super::{Converter, IntoLocator, Kind, Locator, Step};
use crate::value::Key;

/// The source root.
#[must_use]
pub const fn source() -> Source {
    Source(Locator::SOURCE)
}

/// The target root.
#[must_use]
pub const fn target() -> Target {
    Target(Locator::TARGET)
}

/// A locator restricted to the read-only step vocabulary.
#[derive(Clone, Debug)]
pub struct Source(Locator);

impl Source {
    /// Item or index access.
    #[must_use]
    pub fn item(&self, key: impl Into<Key>) -> Self {
        Self(self.0.extend(Step::Item(key.into())))
    }

    /// Attribute access.
    #[must_use]
    pub fn attr(&self, name: impl Into<String>) -> Self {
        Self(self.0.extend(Step::Attr(name.into())))
    }

    /// Dotted string path segments.
    #[must_use]
    pub fn path(&self, path: &str) -> Self {
        Self(self.0.extend_path(path))
    }

    /// Convert the loaded value.
    #[must_use]
    pub fn convert(&self, converter: Converter) -> Self {
        Self(self.0.extend(Step::Convert(converter)))
    }

    /// Make absence at this point an error.
    #[must_use]
    pub fn required(&self) -> Self {
        Self(self.0.extend(Step::Required))
    }

    /// The underlying locator.
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.0
    }
}

/// A locator restricted to the write step vocabulary.
#[derive(Clone, Debug)]
pub struct Target(Locator);

impl Target {
    /// Item or index access; missing mapping keys are auto-vivified.
    #[must_use]
    pub fn item(&self, key: impl Into<Key>) -> Self {
        Self(self.0.extend(Step::Item(key.into())))
    }

    /// Attribute access. Attributes are never auto-vivified.
    #[must_use]
    pub fn attr(&self, name: impl Into<String>) -> Self {
        Self(self.0.extend(Step::Attr(name.into())))
    }

    /// Dotted string path segments.
    #[must_use]
    pub fn path(&self, path: &str) -> Self {
        Self(self.0.extend_path(path))
    }

    /// Append a new element to a sequence.
    #[must_use]
    pub fn append(&self) -> Self {
        Self(self.0.extend(Step::Append))
    }

    /// Insert a new element into a sequence at `index`.
    #[must_use]
    pub fn insert(&self, index: usize) -> Self {
        Self(self.0.extend(Step::Insert(index)))
    }

    /// Deep-merge into this location. Nothing can follow.
    #[must_use]
    pub fn merge(&self) -> MergeTarget {
        MergeTarget(self.0.extend(Step::Merge))
    }

    /// The underlying locator.
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.0
    }
}

/// A target locator ending in `merge()`.
#[derive(Clone, Debug)]
pub struct MergeTarget(Locator);

impl MergeTarget {
    /// The underlying locator.
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.0
    }
}

macro_rules! typed_locator {
    ($($wrapper:ident),+) => {$(
        impl From<$wrapper> for Locator {
            fn from(wrapper: $wrapper) -> Self {
                wrapper.0
            }
        }

        impl IntoLocator for $wrapper {
            fn into_locator(self, _kind: Kind) -> Locator {
                self.0
            }
        }

        impl IntoLocator for &$wrapper {
            fn into_locator(self, _kind: Kind) -> Locator {
                self.0.clone()
            }
        }

        impl fmt::Display for $wrapper {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    )+};
}

typed_locator!(Source, Target, MergeTarget);
