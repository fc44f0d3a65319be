//! Substring-based item matching.
//!
//! Two passes over the lowercased message, in catalog order:
//!
//! 1. Full-name mentions match and *claim* their text, so "Margherita
//!    Pizza" doesn't also count as a mention of every other pizza.
//! 2. Single-word mentions ("pizza", "burger") match against whatever
//!    text pass 1 left unclaimed. A bare category word still matches
//!    every item carrying it.
//!
//! Results come back in catalog order regardless of mention order.

use garcon_core::{Catalog, ItemMatcher, MenuItem};
use tracing::debug;

/// The default matcher: case-insensitive substring containment with
/// full-name masking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl SubstringMatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Blanks out every occurrence of `needle`, preserving text length so
/// later substring checks see the surrounding words unchanged.
fn mask_all(text: &str, needle: &str) -> String {
    if needle.trim().is_empty() {
        return text.to_string();
    }
    let mut out = text.to_string();
    let blank = " ".repeat(needle.len());
    while let Some(pos) = out.find(needle) {
        out.replace_range(pos..pos + needle.len(), &blank);
    }
    out
}

impl ItemMatcher for SubstringMatcher {
    fn name(&self) -> &str {
        "substring"
    }

    fn match_items(&self, message: &str, catalog: &Catalog) -> Vec<MenuItem> {
        let items = catalog.items();
        let mut matched = vec![false; items.len()];
        let mut remaining = message.to_lowercase();

        // Pass 1: full names claim their text.
        for (idx, item) in items.iter().enumerate() {
            let full_name = item.name.to_lowercase();
            if remaining.contains(&full_name) {
                matched[idx] = true;
                remaining = mask_all(&remaining, &full_name);
            }
        }

        // Pass 2: single words against the unclaimed text.
        for (idx, item) in items.iter().enumerate() {
            if matched[idx] {
                continue;
            }
            let word_hit = item
                .name
                .to_lowercase()
                .split_whitespace()
                .any(|word| remaining.contains(word));
            if word_hit {
                matched[idx] = true;
            }
        }

        let found: Vec<MenuItem> = items
            .iter()
            .zip(matched)
            .filter(|(_, hit)| *hit)
            .map(|(item, _)| item.clone())
            .collect();
        debug!(count = found.len(), "matched menu items");
        found
    }
}
