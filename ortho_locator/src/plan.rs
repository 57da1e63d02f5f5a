//! Ordered source-to-target mapping rules.
//!
//! A [`MappingPlan`] is the configuration-mapping layer's view of the
//! engine: each rule loads a value from raw configuration and stores it in
//! the canonical object. Absent sources leave the target untouched, so later
//! plans can be layered over earlier ones the same way configuration files,
//! environment variables and CLI flags are layered.
//!
//! # Examples
//!
//! ```rust
//! use ortho_locator::convert::to_integer;
//! use ortho_locator::{MappingPlan, Value, source, target};
//! use serde_json::json;
//!
//! let mut plan = MappingPlan::new();
//! plan.push(source().item("PORT").convert(to_integer()), target().item("server").item("port"))?;
//! plan.push("HOST", "server.host")?;
//!
//! let raw = Value::from(json!({"PORT": "8080"}));
//! let mut canonical = Value::from(json!({"server": {"host": "localhost"}}));
//! let report = plan.apply(&raw, &mut canonical, None)?;
//!
//! assert_eq!(report.applied(), 1);
//! assert_eq!(report.skipped(), 1);
//! assert_eq!(canonical, Value::from(json!({"server": {"host": "localhost", "port": 8080}})));
//! # Ok::<_, ortho_locator::LocatorError>(())
//! ```

use crate::error::{InvalidOperation, LocatorResult};
use crate::load::load;
use crate::locator::{IntoLocator, Kind, Locator};
use crate::merge::MergeContext;
use crate::presence::Presence;
use crate::store::{store, store_with_context};
use crate::value::Value;

/// One source-to-target rule.
#[derive(Clone, Debug)]
pub struct MappingRule {
    source: Locator,
    target: Locator,
}

impl MappingRule {
    /// Validate and pair a source locator with a target locator.
    ///
    /// Strings compile as source and target paths respectively.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation`] when either side has the wrong kind.
    pub fn new(source: impl IntoLocator, target: impl IntoLocator) -> LocatorResult<Self> {
        let source = source.into_locator(Kind::Source).expect_kind(Kind::Source)?;
        let target = target.into_locator(Kind::Target).expect_kind(Kind::Target)?;
        if target.is_empty() {
            return Err(InvalidOperation::StoreAtRoot.into());
        }
        Ok(Self { source, target })
    }

    /// The locator values are loaded from.
    #[must_use]
    pub const fn source(&self) -> &Locator {
        &self.source
    }

    /// The locator values are stored through.
    #[must_use]
    pub const fn target(&self) -> &Locator {
        &self.target
    }
}

/// Outcome of [`MappingPlan::apply`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MappingReport {
    applied: usize,
    skipped: usize,
}

impl MappingReport {
    /// Rules whose source resolved to a value.
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }

    /// Rules whose source resolved to [`crate::NOT_PRESENT`].
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Ordered collection of [`MappingRule`]s.
#[derive(Clone, Debug, Default)]
pub struct MappingPlan {
    rules: Vec<MappingRule>,
}

impl MappingPlan {
    /// Create an empty plan.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule, validating both locators immediately.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperation`] when either side has the wrong kind or
    /// the target is a root locator.
    pub fn push(&mut self, source: impl IntoLocator, target: impl IntoLocator) -> LocatorResult<()> {
        self.rules.push(MappingRule::new(source, target)?);
        Ok(())
    }

    /// The rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the plan has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Load each rule's source from `raw` and store it into `canonical`.
    ///
    /// Rules run in order, so a later rule overwrites what an earlier one
    /// stored at the same location. `merge()` targets require `ctx`.
    ///
    /// # Errors
    ///
    /// Stops at the first rule that fails and returns its error; rules
    /// applied before it are not rolled back.
    pub fn apply(
        &self,
        raw: &Value,
        canonical: &mut Value,
        ctx: Option<&MergeContext>,
    ) -> LocatorResult<MappingReport> {
        let mut report = MappingReport::default();
        for rule in &self.rules {
            let value = load(raw, &rule.source)?;
            if value.is_not_present() {
                tracing::debug!(source = %rule.source, "mapping source not present");
                report.skipped += 1;
                continue;
            }
            store_rule(canonical, rule, value, ctx)?;
            tracing::debug!(source = %rule.source, target = %rule.target, "mapping rule applied");
            report.applied += 1;
        }
        Ok(report)
    }
}

fn store_rule(
    canonical: &mut Value,
    rule: &MappingRule,
    value: Presence,
    ctx: Option<&MergeContext>,
) -> LocatorResult<()> {
    match ctx {
        Some(ctx) => store_with_context(canonical, &rule.target, value, ctx),
        None => store(canonical, &rule.target, value),
    }
}
