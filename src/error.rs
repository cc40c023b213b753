//! Error types for progression, crafting, and catalog validation.
//!
//! Every routine precondition failure is returned as one of these values so
//! callers can react without unwinding. Invariant violations are not modelled
//! here; they panic.

use thiserror::Error;

/// A single ingredient the inventory is short on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub item_id: String,
    pub required: u32,
    pub held: u32,
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.item_id, self.held, self.required)
    }
}

fn format_shortfalls(missing: &[Shortfall]) -> String {
    missing
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures reported by the progression state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    /// `record_success`, `lose_life` or a bypass was attempted with no puzzle in play.
    #[error("No challenge is outstanding")]
    NoOutstandingChallenge,

    /// The inventory holds no unit of the item.
    #[error("Item not held: {0}")]
    ItemNotHeld(String),

    /// Fewer units are held than the caller asked to consume.
    #[error("Insufficient {item_id}: need {required}, hold {held}")]
    InsufficientItems {
        item_id: String,
        required: u32,
        held: u32,
    },

    /// The item exists but has no use effect.
    #[error("Item cannot be used: {0}")]
    NotConsumable(String),

    /// A streak freeze was used while one is already armed.
    #[error("Streak protection is already active")]
    ProtectionAlreadyActive,
}

/// Failures reported by the crafting resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CraftError {
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    /// At least one ingredient is short. Nothing was consumed.
    #[error("Missing ingredients for {recipe_id}: {}", format_shortfalls(.missing))]
    MissingIngredients {
        recipe_id: String,
        missing: Vec<Shortfall>,
    },

    #[error(transparent)]
    Inventory(#[from] ProgressionError),
}

/// Referential-integrity failures found while validating the static catalogs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipe(String),

    /// `context` names the referencing entry (a recipe, a collectible, ...).
    #[error("{context} references unknown item: {item_id}")]
    UnknownItem { context: String, item_id: String },

    #[error("{context} must reference an artifact, got {item_id}")]
    NotAnArtifact { context: String, item_id: String },

    #[error("Recipe {0} produces an artifact")]
    ArtifactResult(String),

    #[error("Recipe {0} has no ingredients or a zero count")]
    EmptyRecipe(String),

    /// Ingredient counts are checked one entry at a time, so each id may appear once.
    #[error("Recipe {recipe_id} lists {item_id} more than once")]
    DuplicateIngredient { recipe_id: String, item_id: String },

    #[error("Recipe graph has a cycle through {0}")]
    RecipeCycle(String),
}
