//! Declarative locators for reading and writing nested configuration data.
//!
//! A [`Locator`] describes a path into a data graph of mappings, sequences
//! and attribute-bearing [`Record`]s. [`load`] resolves a source locator to
//! a value or [`NOT_PRESENT`]; [`store`] resolves a target locator and
//! assigns a value there, creating missing intermediate mappings on the way.
//! Together they let a configuration-mapping layer translate raw sources into
//! a canonical object without writing traversal code.
//!
//! ```rust
//! use ortho_locator::{NOT_PRESENT, Value, load, required, source, store, target};
//! use serde_json::json;
//!
//! let raw = Value::from(json!({"db": {"hosts": ["primary", "replica"]}}));
//! let mut canonical = Value::empty_mapping();
//!
//! let primary = load(&raw, source().item("db").item("hosts").item(0))?;
//! store(&mut canonical, target().item("database").item("host"), primary)?;
//!
//! assert_eq!(load(&raw, "db.port")?, NOT_PRESENT);
//! assert!(load(&raw, required("db.port")?).is_err());
//! assert_eq!(canonical, Value::from(json!({"database": {"host": "primary"}})));
//! # Ok::<_, ortho_locator::LocatorError>(())
//! ```

pub mod access;
pub mod convert;
mod error;
mod load;
pub mod locator;
mod merge;
mod plan;
mod presence;
mod store;
mod value;

pub use error::{ConversionError, InvalidOperation, LocatorError, LocatorResult, LookupError};
pub use load::load;
pub use locator::{
    Converter, IntoLocator, Kind, Locator, MergeTarget, Source, Step, Target, convert, required,
    source, target,
};
pub use merge::{MergeContext, SequenceStrategy, merge_value};
pub use plan::{MappingPlan, MappingReport, MappingRule};
pub use presence::{NOT_PRESENT, Presence};
pub use store::{store, store_with_context};
pub use value::{Key, Mapping, Record, Shape, Value};
