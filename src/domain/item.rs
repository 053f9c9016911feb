// SPDX-License-Identifier: MPL-2.0
//! Carousel item model.
//!
//! Items can be declared either as full `{ src, alt }` records or as plain
//! source strings. Plain strings are normalized to an item whose alternative
//! text is `"Item N"`, where `N` is the one-based position in the sequence.

use serde::{Deserialize, Serialize};

/// A single entry of the navigable sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Media source (path or URL), handed to the rendering primitive as-is.
    pub src: String,
    /// Alternative text describing the item.
    pub alt: String,
}

impl Item {
    /// Creates an item from a source and its alternative text.
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Item declaration as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    /// Bare source string.
    Plain(String),
    /// Full declaration. A missing `alt` is filled in during normalization.
    Full {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
}

impl From<&str> for ItemSpec {
    fn from(src: &str) -> Self {
        Self::Plain(src.to_string())
    }
}

impl From<String> for ItemSpec {
    fn from(src: String) -> Self {
        Self::Plain(src)
    }
}

impl From<Item> for ItemSpec {
    fn from(item: Item) -> Self {
        Self::Full {
            src: item.src,
            alt: Some(item.alt),
        }
    }
}

/// Returns the generated alternative text for the item at `index`.
#[must_use]
pub fn default_alt(index: usize) -> String {
    format!("Item {}", index + 1)
}

/// Normalizes declarations into concrete items, preserving order.
pub fn normalize<I, S>(specs: I) -> Vec<Item>
where
    I: IntoIterator<Item = S>,
    S: Into<ItemSpec>,
{
    specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| match spec.into() {
            ItemSpec::Plain(src) => Item {
                src,
                alt: default_alt(index),
            },
            ItemSpec::Full { src, alt } => Item {
                src,
                alt: alt.unwrap_or_else(|| default_alt(index)),
            },
        })
        .collect()
}
