//! Compilation of dotted string paths.
//!
//! `"server.port"` becomes two [`Step::ItemOrAttr`] steps, so a string can
//! stand in for a locator wherever one is accepted. Each segment tries item
//! access first and falls back to attribute access; numeric segments index
//! sequences.

use super::{Locator, Step};

impl Locator {
    pub(crate) fn extend_path(&self, path: &str) -> Self {
        path.split('.').fold(self.clone(), |locator, segment| {
            locator.extend(Step::ItemOrAttr(segment.to_owned()))
        })
    }
}
