//! Locators: immutable chains of steps describing a path into a data graph.
//!
//! Every locator starts at one of two roots. [`Locator::SOURCE`] seeds
//! read-only chains interpreted by [`crate::load`]; [`Locator::TARGET`]
//! seeds write chains interpreted by [`crate::store`]. Builders never modify
//! the locator they are called on: they return a new locator that shares the
//! parent's steps, so prototypes can be reused freely.
//!
//! Builders on [`Locator`] validate eagerly and return a
//! [`crate::LocatorResult`]. The typed wrappers in this module
//! ([`Source`], [`Target`], [`MergeTarget`]) only expose legal builders and
//! therefore cannot fail.
//!
//! ```
//! use ortho_locator::{InvalidOperation, Locator, LocatorError};
//!
//! let port = Locator::SOURCE.item("server")?.attr("port")?.required()?;
//! assert_eq!(port.to_string(), "source['server'].port.required()");
//!
//! let err = Locator::SOURCE.append().unwrap_err();
//! assert_eq!(err.to_string(), "Cannot use append() in source");
//! # Ok::<_, LocatorError>(())
//! ```

mod path;
mod step;
mod typed;

use std::fmt;
use std::sync::Arc;

pub use step::{Converter, Step};
pub use typed::{MergeTarget, Source, Target, source, target};

use crate::error::{InvalidOperation, LocatorResult};
use crate::value::Key;

/// Which interpreter a locator is written for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    /// Read-only chains for [`crate::load`].
    Source,
    /// Write chains for [`crate::store`].
    Target,
}

impl Kind {
    const fn root_name(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

#[derive(Debug)]
struct Link {
    step: Step,
    parent: Option<Arc<Link>>,
}

/// An immutable chain of [`Step`]s tagged with its [`Kind`].
#[derive(Clone)]
pub struct Locator {
    kind: Kind,
    len: usize,
    head: Option<Arc<Link>>,
}

impl Locator {
    /// The source root: resolves to the data itself.
    pub const SOURCE: Self = Self::root(Kind::Source);

    /// The target root. Storing at the root itself is rejected.
    pub const TARGET: Self = Self::root(Kind::Target);

    /// An empty chain of the given kind.
    #[must_use]
    pub const fn root(kind: Kind) -> Self {
        Self {
            kind,
            len: 0,
            head: None,
        }
    }

    /// The locator's kind, fixed by its root.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Number of steps in the chain.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for a root locator.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The final step, if any.
    #[must_use]
    pub fn last_step(&self) -> Option<&Step> {
        self.head.as_deref().map(|link| &link.step)
    }

    /// Steps from the root outwards.
    #[must_use]
    pub fn steps(&self) -> Vec<&Step> {
        let mut steps = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(link) = cursor {
            steps.push(&link.step);
            cursor = link.parent.as_deref();
        }
        steps.reverse();
        steps
    }

    /// Returns `true` when the chain ends in `merge()`.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        matches!(self.last_step(), Some(Step::Merge))
    }

    /// Item or index access.
    ///
    /// # Errors
    ///
    /// Fails when the chain already ends in `merge()`.
    pub fn item(&self, key: impl Into<Key>) -> LocatorResult<Self> {
        self.push(Step::Item(key.into()))
    }

    /// Attribute access.
    ///
    /// # Errors
    ///
    /// Fails when the chain already ends in `merge()`.
    pub fn attr(&self, name: impl Into<String>) -> LocatorResult<Self> {
        self.push(Step::Attr(name.into()))
    }

    /// Append the segments of a dotted string path.
    ///
    /// # Errors
    ///
    /// Fails when the chain already ends in `merge()`.
    pub fn path(&self, path: &str) -> LocatorResult<Self> {
        self.check(&Step::ItemOrAttr(String::new()))?;
        Ok(self.extend_path(path))
    }

    /// Convert the loaded value. Source only.
    ///
    /// # Errors
    ///
    /// Fails on target locators and after `merge()`.
    pub fn convert(&self, converter: Converter) -> LocatorResult<Self> {
        self.push(Step::Convert(converter))
    }

    /// Make absence at this point an error. Source only.
    ///
    /// # Errors
    ///
    /// Fails on target locators and after `merge()`.
    pub fn required(&self) -> LocatorResult<Self> {
        self.push(Step::Required)
    }

    /// Append a new element to a sequence. Target only.
    ///
    /// # Errors
    ///
    /// Fails on source locators and after `merge()`.
    pub fn append(&self) -> LocatorResult<Self> {
        self.push(Step::Append)
    }

    /// Insert a new element into a sequence at `index`. Target only.
    ///
    /// # Errors
    ///
    /// Fails on source locators and after `merge()`.
    pub fn insert(&self, index: usize) -> LocatorResult<Self> {
        self.push(Step::Insert(index))
    }

    /// Deep-merge into this location. Target only; no step may follow.
    ///
    /// # Errors
    ///
    /// Fails on source locators and after `merge()`.
    pub fn merge(&self) -> LocatorResult<Self> {
        self.push(Step::Merge)
    }

    /// Validate `step` against this chain and extend it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation`] when the step is illegal here.
    pub fn push(&self, step: Step) -> LocatorResult<Self> {
        self.check(&step)?;
        Ok(self.extend(step))
    }

    fn check(&self, step: &Step) -> Result<(), InvalidOperation> {
        if self.is_merge() {
            return Err(InvalidOperation::MergeNotFinal);
        }
        match (self.kind, step) {
            (Kind::Target, Step::Convert(_) | Step::Required) => {
                Err(InvalidOperation::SourceOnly {
                    operation: step.operation(),
                })
            }
            (Kind::Source, Step::Append | Step::Insert(_) | Step::Merge) => {
                Err(InvalidOperation::TargetOnly {
                    operation: step.operation(),
                })
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn extend(&self, step: Step) -> Self {
        Self {
            kind: self.kind,
            len: self.len + 1,
            head: Some(Arc::new(Link {
                step,
                parent: self.head.clone(),
            })),
        }
    }

    pub(crate) fn expect_kind(self, kind: Kind) -> LocatorResult<Self> {
        match (self.kind, kind) {
            (Kind::Target, Kind::Source) => Err(InvalidOperation::LoadFromTarget.into()),
            (Kind::Source, Kind::Target) => Err(InvalidOperation::StoreThroughSource.into()),
            _ => Ok(self),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.root_name())?;
        for step in self.steps() {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locator")
            .field(&format_args!("{self}"))
            .finish()
    }
}

/// Anything accepted where a locator is expected.
///
/// Plain strings are compiled as dotted paths of whichever kind the caller
/// asks for; locators keep the kind they were built with.
pub trait IntoLocator {
    /// Produce the locator, compiling strings with `kind`.
    fn into_locator(self, kind: Kind) -> Locator;
}

impl IntoLocator for Locator {
    fn into_locator(self, _kind: Kind) -> Locator {
        self
    }
}

impl IntoLocator for &Locator {
    fn into_locator(self, _kind: Kind) -> Locator {
        self.clone()
    }
}

impl IntoLocator for &str {
    fn into_locator(self, kind: Kind) -> Locator {
        Locator::root(kind).extend_path(self)
    }
}

impl IntoLocator for String {
    fn into_locator(self, kind: Kind) -> Locator {
        self.as_str().into_locator(kind)
    }
}

impl IntoLocator for &String {
    fn into_locator(self, kind: Kind) -> Locator {
        self.as_str().into_locator(kind)
    }
}

/// Make absence at the end of `locator` an error.
///
/// Strings compile as source paths.
///
/// # Errors
///
/// Fails with "Cannot use required() as target" for target locators.
///
/// # Examples
///
/// ```
/// use ortho_locator::{LookupError, Value, load, required};
///
/// let err = load(&Value::empty_mapping(), required("foo")?).unwrap_err();
/// assert_eq!(err.lookup(), Some(&LookupError::MissingKey { key: "foo".into() }));
/// # Ok::<_, ortho_locator::LocatorError>(())
/// ```
pub fn required(locator: impl IntoLocator) -> LocatorResult<Locator> {
    locator.into_locator(Kind::Source).required()
}

/// Convert the value loaded through `locator`.
///
/// Strings compile as source paths.
///
/// # Errors
///
/// Fails with "Cannot use convert() as target" for target locators.
pub fn convert(locator: impl IntoLocator, converter: Converter) -> LocatorResult<Locator> {
    locator.into_locator(Kind::Source).convert(converter)
}
