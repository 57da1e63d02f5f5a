//! Individual steps of a locator chain.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::ConversionError;
use crate::value::{Key, Value};

/// One navigation or transformation step.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Step {
    /// Item or index lookup (`locator[key]`).
    Item(Key),
    /// Attribute lookup (`locator.name`).
    Attr(String),
    /// Item lookup falling back to attribute lookup; produced by string
    /// paths.
    ItemOrAttr(String),
    /// Single-step conversion of the loaded value. Source only.
    Convert(Converter),
    /// Turns absence into the lookup failure that caused it. Source only.
    Required,
    /// Push a new element onto a sequence. Target only.
    Append,
    /// Insert a new element into a sequence. Target only.
    Insert(usize),
    /// Deep-merge a mapping into the location. Target only, always last.
    Merge,
}

impl Step {
    /// Name of the builder that produces this step.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Item(_) => "item",
            Self::Attr(_) => "attr",
            Self::ItemOrAttr(_) => "path",
            Self::Convert(_) => "convert",
            Self::Required => "required",
            Self::Append => "append",
            Self::Insert(_) => "insert",
            Self::Merge => "merge",
        }
    }

    /// Returns `true` for steps that change the shape of a sequence even when
    /// the stored value is absent.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Append | Self::Insert(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(Key::Name(name)) => write!(f, "['{name}']"),
            Self::Item(Key::Index(index)) => write!(f, "[{index}]"),
            Self::Attr(name) => write!(f, ".{name}"),
            Self::ItemOrAttr(name) => write!(f, ".path('{name}')"),
            Self::Convert(converter) => write!(f, ".convert({})", converter.name()),
            Self::Required => f.write_str(".required()"),
            Self::Append => f.write_str(".append()"),
            Self::Insert(index) => write!(f, ".insert({index})"),
            Self::Merge => f.write_str(".merge()"),
        }
    }
}

type ConvertFn = dyn Fn(Value) -> Result<Value, ConversionError> + Send + Sync;

/// A named, shareable conversion applied by `convert()` steps.
///
/// ```
/// use ortho_locator::{ConversionError, Converter, Value};
///
/// let shout = Converter::new("shout", |value: Value| match value {
///     Value::String(text) => Ok(Value::String(text.to_uppercase())),
///     other => Err(ConversionError::new("string", other.type_name())),
/// });
/// assert_eq!(shout.apply(Value::from("hi")), Ok(Value::from("HI")));
/// ```
#[derive(Clone)]
pub struct Converter {
    name: Cow<'static, str>,
    func: Arc<ConvertFn>,
}

impl Converter {
    /// Wrap `func` under a name used in diagnostics.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ConversionError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The converter's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the conversion.
    ///
    /// # Errors
    ///
    /// Returns the [`ConversionError`] produced by the wrapped function.
    pub fn apply(&self, value: Value) -> Result<Value, ConversionError> {
        (self.func)(value)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Converter").field(&self.name).finish()
    }
}
