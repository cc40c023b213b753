//! Loot catalog and the loot resolver.

pub mod data;
pub mod drops;
pub mod types;

pub use data::{get_item, items_in, LOOT_TABLE};
pub use drops::{roll_loot, roll_tier};
pub use types::{Category, ConsumableEffect, ItemKind, LootItem, Tier};
