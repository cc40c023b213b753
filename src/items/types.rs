use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Legendary = 3,
}

impl Tier {
    /// Returns the display name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Common => "Common",
            Tier::Uncommon => "Uncommon",
            Tier::Rare => "Rare",
            Tier::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Component,
    Consumable,
    Artifact,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Component => "Component",
            Category::Consumable => "Consumable",
            Category::Artifact => "Artifact",
        }
    }
}

/// What a consumable does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumableEffect {
    /// +1 life, up to the cap.
    ExtraLife,
    /// Arms streak protection for the next game over.
    StreakFreeze,
    /// Reveals today's answer.
    HintToken,
    /// Regenerates today's puzzle at Basic difficulty.
    EasyMode,
    /// Reminds the player of yesterday's answer.
    MemoryJog,
    /// Counts today's puzzle as solved.
    BypassProtocol,
}

/// Category-specific payload of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "category")]
pub enum ItemKind {
    Component,
    Consumable { effect: ConsumableEffect },
    /// Never dropped at random; granted by challenge overrides.
    Artifact { year: Option<i32> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LootItem {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: Tier,
    pub description: &'static str,
    pub kind: ItemKind,
}

impl LootItem {
    pub fn category(&self) -> Category {
        match self.kind {
            ItemKind::Component => Category::Component,
            ItemKind::Consumable { .. } => Category::Consumable,
            ItemKind::Artifact { .. } => Category::Artifact,
        }
    }

    pub fn consumable_effect(&self) -> Option<ConsumableEffect> {
        match self.kind {
            ItemKind::Consumable { effect } => Some(effect),
            _ => None,
        }
    }

    pub fn is_artifact(&self) -> bool {
        self.category() == Category::Artifact
    }
}
