//! Item matching capability.
//!
//! Given a free-text message and a catalog, a matcher decides which menu
//! items the customer mentioned. Matching is deliberately permissive: an
//! ambiguous mention ("a pizza") may match several items, and the caller
//! adds all of them.

use crate::menu::{Catalog, MenuItem};

/// Finds the menu items mentioned in a message.
pub trait ItemMatcher: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Returns matched items in catalog order. An empty result means the
    /// message mentioned nothing recognizable.
    fn match_items(&self, message: &str, catalog: &Catalog) -> Vec<MenuItem>;
}
