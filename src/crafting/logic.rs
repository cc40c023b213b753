//! Crafting resolver and terminal stage evaluation.

use super::data::{get_recipe, TERMINAL_STAGES};
use super::types::{ItemStore, Recipe, TerminalStage};
use crate::error::{CraftError, Shortfall};
use tracing::info;

/// Every ingredient the store is short on, in recipe order.
pub fn shortfalls(recipe: &Recipe, store: &impl ItemStore) -> Vec<Shortfall> {
    recipe
        .ingredients
        .iter()
        .filter(|ing| !store.has(ing.item_id, ing.count))
        .map(|ing| Shortfall {
            item_id: ing.item_id.to_string(),
            required: ing.count,
            held: store.count(ing.item_id),
        })
        .collect()
}

pub fn can_craft(recipe: &Recipe, store: &impl ItemStore) -> bool {
    shortfalls(recipe, store).is_empty()
}

/// Craft `recipe_id` against `store`. All-or-nothing: every ingredient is
/// checked before any is removed. Returns the produced item id.
pub fn craft(recipe_id: &str, store: &mut impl ItemStore) -> Result<&'static str, CraftError> {
    let recipe =
        get_recipe(recipe_id).ok_or_else(|| CraftError::UnknownRecipe(recipe_id.to_string()))?;

    let missing = shortfalls(recipe, store);
    if !missing.is_empty() {
        return Err(CraftError::MissingIngredients {
            recipe_id: recipe.id.to_string(),
            missing,
        });
    }

    for ingredient in recipe.ingredients {
        store.remove(ingredient.item_id, ingredient.count)?;
    }
    store.add(recipe.result_id, 1);

    info!(recipe = recipe.id, result = recipe.result_id, "crafted");
    Ok(recipe.result_id)
}

/// Highest stage reached, climbing in order and stopping at the first unmet one.
pub fn terminal_stage(store: &impl ItemStore) -> &'static TerminalStage {
    let mut current = &TERMINAL_STAGES[0];
    for stage in TERMINAL_STAGES {
        match stage.requirement {
            None => continue,
            Some(req) if store.has(req.item_id, req.count) => current = stage,
            Some(_) => break,
        }
    }
    current
}
