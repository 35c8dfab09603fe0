use crate::utils::error::Result;
use crate::utils::validation::{validate_item, validate_items, Validate};
use serde::{Deserialize, Serialize};

pub const VERSION: &str = "1.0.0";

/// Ordered, append-only collection of text items.
///
/// Duplicates are kept. Items loaded through [`ItemStore::from_items`] or
/// [`ItemStore::add`] are not validated; use [`ItemStore::try_add`] or
/// the [`Validate`] impl when that matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemStore {
    items: Vec<String>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, S>(initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: initial.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Appends `item` only if it passes [`validate_item`].
    pub fn try_add(&mut self, item: impl Into<String>) -> Result<()> {
        let item = item.into();
        validate_item(&item)?;
        self.items.push(item);
        Ok(())
    }

    /// Snapshot of the items in insertion order.
    pub fn all_items(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn version() -> &'static str {
        VERSION
    }
}

impl Validate for ItemStore {
    fn validate(&self) -> Result<()> {
        validate_items("items", &self.items)
    }
}
