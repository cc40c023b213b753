//! Startup validation of the static catalogs.
//!
//! Recipes, terminal stages and challenge overrides refer to loot items by
//! string id. This checks every such reference once, up front.

use crate::challenges::override_unlock_ids;
use crate::crafting::{Recipe, RECIPES, TERMINAL_STAGES};
use crate::error::CatalogError;
use crate::items::{LootItem, LOOT_TABLE};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Validate the built-in catalogs.
pub fn validate_catalog() -> Result<(), CatalogError> {
    let items = index_items(LOOT_TABLE)?;
    validate_recipes(&items, RECIPES)?;
    crafting_order(RECIPES)?;

    for stage in TERMINAL_STAGES {
        if let Some(req) = stage.requirement {
            resolve(&items, &format!("terminal stage {}", stage.level), req.item_id)?;
        }
    }

    validate_unlock_ids(&items, override_unlock_ids())?;
    debug!(
        items = items.len(),
        recipes = RECIPES.len(),
        "catalog validated"
    );
    Ok(())
}

/// Index items by id, rejecting duplicates.
pub fn index_items<'a>(
    items: &'a [LootItem],
) -> Result<HashMap<&'a str, &'a LootItem>, CatalogError> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        if index.insert(item.id, item).is_some() {
            return Err(CatalogError::DuplicateItem(item.id.to_string()));
        }
    }
    Ok(index)
}

fn resolve<'a>(
    items: &HashMap<&str, &'a LootItem>,
    context: &str,
    item_id: &str,
) -> Result<&'a LootItem, CatalogError> {
    items
        .get(item_id)
        .copied()
        .ok_or_else(|| CatalogError::UnknownItem {
            context: context.to_string(),
            item_id: item_id.to_string(),
        })
}

/// Every ingredient and result resolves, results are not artifacts, recipe
/// ids are unique, and no recipe lists an ingredient twice.
pub fn validate_recipes(
    items: &HashMap<&str, &LootItem>,
    recipes: &[Recipe],
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.id) {
            return Err(CatalogError::DuplicateRecipe(recipe.id.to_string()));
        }
        if recipe.ingredients.is_empty() || recipe.ingredients.iter().any(|i| i.count == 0) {
            return Err(CatalogError::EmptyRecipe(recipe.id.to_string()));
        }
        let mut listed = HashSet::new();
        for ingredient in recipe.ingredients {
            resolve(items, recipe.id, ingredient.item_id)?;
            if !listed.insert(ingredient.item_id) {
                return Err(CatalogError::DuplicateIngredient {
                    recipe_id: recipe.id.to_string(),
                    item_id: ingredient.item_id.to_string(),
                });
            }
        }
        if resolve(items, recipe.id, recipe.result_id)?.is_artifact() {
            return Err(CatalogError::ArtifactResult(recipe.id.to_string()));
        }
    }
    Ok(())
}

/// Every override unlock id resolves to an artifact.
pub fn validate_unlock_ids<'a>(
    items: &HashMap<&str, &LootItem>,
    unlock_ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    for id in unlock_ids {
        if !resolve(items, "challenge override", id)?.is_artifact() {
            return Err(CatalogError::NotAnArtifact {
                context: "challenge override".to_string(),
                item_id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Item ids in an order where every ingredient precedes what it is crafted
/// into. Fails if the recipe graph has a cycle.
pub fn crafting_order(recipes: &[Recipe]) -> Result<Vec<&'static str>, CatalogError> {
    let mut graph: DiGraph<&'static str, ()> = DiGraph::new();
    let mut nodes: HashMap<&'static str, NodeIndex> = HashMap::new();

    let mut node = |graph: &mut DiGraph<&'static str, ()>, id: &'static str| {
        *nodes.entry(id).or_insert_with(|| graph.add_node(id))
    };

    for recipe in recipes {
        let result = node(&mut graph, recipe.result_id);
        for ingredient in recipe.ingredients {
            let from = node(&mut graph, ingredient.item_id);
            graph.add_edge(from, result, ());
        }
    }

    match toposort(&graph, None) {
        Ok(order) => Ok(order.into_iter().map(|idx| graph[idx]).collect()),
        Err(cycle) => Err(CatalogError::RecipeCycle(graph[cycle.node_id()].to_string())),
    }
}
