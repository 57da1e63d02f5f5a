//! Built-in converters for `convert()` steps.
//!
//! Raw configuration often arrives as strings (environment variables, INI
//! files). These converters perform one explicit conversion each; they do
//! not chain or guess.
//!
//! ```
//! use ortho_locator::convert::to_integer;
//! use ortho_locator::{Record, Value, load, source};
//!
//! let data = Value::from(Record::open("Namespace").with_field("x", "1"));
//! let x = load(&data, source().attr("x").convert(to_integer()))?;
//! assert_eq!(x.into_option(), Some(Value::from(1)));
//! # Ok::<_, ortho_locator::LocatorError>(())
//! ```

use crate::error::ConversionError;
use crate::locator::Converter;
use crate::value::Value;

/// Parse strings as integers; integers pass through.
///
/// Strings beyond the `i64` range parse as unsigned when they fit a `u64`.
#[must_use]
pub fn to_integer() -> Converter {
    Converter::new("integer", |value| match value {
        Value::Integer(_) | Value::Unsigned(_) => Ok(value),
        Value::String(ref text) => {
            parse_integer(text.trim()).ok_or_else(|| rejected("integer", &value))
        }
        other => Err(rejected("integer", &other)),
    })
}

/// Parse strings and widen integers to floats; floats pass through.
#[must_use]
pub fn to_float() -> Converter {
    Converter::new("float", |value| match value {
        Value::Float(_) => Ok(value),
        Value::Integer(number) => Ok(Value::Float(widen_signed(number))),
        Value::Unsigned(number) => Ok(Value::Float(widen_unsigned(number))),
        Value::String(ref text) => text
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| rejected("float", &value)),
        other => Err(rejected("float", &other)),
    })
}

/// Interpret common spellings of true and false.
///
/// Accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0` in any case,
/// plus the integers `1` and `0`.
#[must_use]
pub fn to_boolean() -> Converter {
    Converter::new("boolean", |value| match value {
        Value::Bool(_) => Ok(value),
        Value::Integer(1) => Ok(Value::Bool(true)),
        Value::Integer(0) => Ok(Value::Bool(false)),
        Value::String(ref text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "off" | "0" => Ok(Value::Bool(false)),
            _ => Err(rejected("boolean", &value)),
        },
        other => Err(rejected("boolean", &other)),
    })
}

/// Render scalars as strings; strings pass through.
#[must_use]
pub fn to_text() -> Converter {
    Converter::new("string", |value| match value {
        Value::String(_) => Ok(value),
        Value::Bool(flag) => Ok(Value::String(flag.to_string())),
        Value::Integer(number) => Ok(Value::String(number.to_string())),
        Value::Unsigned(number) => Ok(Value::String(number.to_string())),
        Value::Float(number) => Ok(Value::String(number.to_string())),
        other => Err(rejected("string", &other)),
    })
}

fn parse_integer(text: &str) -> Option<Value> {
    text.parse::<i64>()
        .map(Value::Integer)
        .or_else(|_| text.parse::<u64>().map(Value::Unsigned))
        .ok()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "float conversion is requested explicitly and rounds like any widening to f64"
)]
fn widen_signed(number: i64) -> f64 {
    number as f64
}

#[expect(
    clippy::cast_precision_loss,
    reason = "float conversion is requested explicitly and rounds like any widening to f64"
)]
fn widen_unsigned(number: u64) -> f64 {
    number as f64
}

fn rejected(expected: &'static str, value: &Value) -> ConversionError {
    let found = match value {
        Value::String(text) => format!("string '{text}'"),
        Value::Integer(number) => format!("integer {number}"),
        Value::Unsigned(number) => format!("integer {number}"),
        other => other.type_name().to_owned(),
    };
    ConversionError::new(expected, found)
}
