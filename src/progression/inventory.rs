use crate::crafting::ItemStore;
use crate::error::ProgressionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiset of held item ids. Zero counts are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(BTreeMap<String, u32>);

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(id, &n)| (id.as_str(), n))
    }

    /// Total units across all ids.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ItemStore for Inventory {
    fn count(&self, item_id: &str) -> u32 {
        self.0.get(item_id).copied().unwrap_or(0)
    }

    fn remove(&mut self, item_id: &str, count: u32) -> Result<(), ProgressionError> {
        if count == 0 {
            return Ok(());
        }
        let held = self.count(item_id);
        if held == 0 {
            return Err(ProgressionError::ItemNotHeld(item_id.to_string()));
        }
        if held < count {
            return Err(ProgressionError::InsufficientItems {
                item_id: item_id.to_string(),
                required: count,
                held,
            });
        }
        if held == count {
            self.0.remove(item_id);
        } else {
            self.0.insert(item_id.to_string(), held - count);
        }
        Ok(())
    }

    fn add(&mut self, item_id: &str, count: u32) {
        if count > 0 {
            *self.0.entry(item_id.to_string()).or_insert(0) += count;
        }
    }
}
