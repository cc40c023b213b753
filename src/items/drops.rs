use super::data::LOOT_TABLE;
use super::types::{Category, LootItem, Tier};
use crate::core::constants::{
    LOOT_LEGENDARY_THRESHOLD, LOOT_RARE_THRESHOLD, LOOT_UNCOMMON_THRESHOLD,
};
use crate::core::rng::pick;
use rand::Rng;
use tracing::debug;

/// Roll a loot tier: 60% Common, 30% Uncommon, 9% Rare, 1% Legendary.
pub fn roll_tier(rng: &mut impl Rng) -> Tier {
    let roll = rng.gen::<f64>();

    if roll > LOOT_LEGENDARY_THRESHOLD {
        Tier::Legendary
    } else if roll > LOOT_RARE_THRESHOLD {
        Tier::Rare
    } else if roll > LOOT_UNCOMMON_THRESHOLD {
        Tier::Uncommon
    } else {
        Tier::Common
    }
}

fn pool(filter: impl Fn(&LootItem) -> bool) -> Vec<&'static LootItem> {
    LOOT_TABLE.iter().filter(|item| filter(item)).collect()
}

/// Roll one catalog item.
///
/// Without a forced category the pool is every non-artifact at the rolled
/// tier. With one, it is that category at the rolled tier, widening to the
/// whole category when the tier has nothing. The last resort is every
/// non-artifact.
pub fn roll_loot(forced: Option<Category>, rng: &mut impl Rng) -> &'static LootItem {
    let tier = roll_tier(rng);

    let mut candidates = match forced {
        None => pool(|item| item.tier == tier && !item.is_artifact()),
        Some(category) => {
            let exact = pool(|item| item.tier == tier && item.category() == category);
            if exact.is_empty() {
                pool(|item| item.category() == category)
            } else {
                exact
            }
        }
    };
    if candidates.is_empty() {
        candidates = pool(|item| !item.is_artifact());
    }

    let item = *pick(&candidates, rng);
    debug!(item = item.id, tier = tier.name(), "loot rolled");
    item
}
