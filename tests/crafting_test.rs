//! Integration test: Inventory, Crafting and Loot
//!
//! Crafting against a live progression inventory, multi-step recipe chains,
//! terminal stage climbing, and the loot resolver's category rules.

use keep_the_streak::catalog::{crafting_order, validate_catalog};
use keep_the_streak::crafting::{can_craft, get_recipe, terminal_stage, ItemStore, RECIPES};
use keep_the_streak::error::Shortfall;
use keep_the_streak::items::{get_item, roll_loot, Category};
use keep_the_streak::{CraftError, Progression};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn stock(p: &mut Progression, items: &[(&str, u32)]) {
    for &(id, count) in items {
        for _ in 0..count {
            p.add_item(id);
        }
    }
}

// =========================================================================
// Crafting
// =========================================================================

#[test]
fn test_ai_module_consumes_exact_ingredients() {
    let mut p = Progression::new();
    stock(&mut p, &[("cpu", 3), ("ram", 5), ("deep_blue_chip", 1)]);

    assert_eq!(p.craft("craft_ai"), Ok("ai_module"));

    let inv = p.state().inventory();
    assert_eq!(inv.count("cpu"), 0);
    assert_eq!(inv.count("ram"), 0);
    assert_eq!(inv.count("deep_blue_chip"), 0);
    assert_eq!(inv.count("ai_module"), 1);
    assert_eq!(inv.total(), 1);
}

#[test]
fn test_surplus_is_left_behind() {
    let mut p = Progression::new();
    stock(&mut p, &[("cpu", 4), ("ram", 7), ("deep_blue_chip", 2)]);
    p.craft("craft_ai").unwrap();

    let inv = p.state().inventory();
    assert_eq!(inv.count("cpu"), 1);
    assert_eq!(inv.count("ram"), 2);
    assert_eq!(inv.count("deep_blue_chip"), 1);
}

#[test]
fn test_partial_shortage_leaves_inventory_unchanged() {
    let mut p = Progression::new();
    stock(&mut p, &[("cpu", 3), ("ram", 4), ("deep_blue_chip", 1)]);
    let before = p.state().inventory().clone();

    let err = p.craft("craft_ai").unwrap_err();
    assert_eq!(
        err,
        CraftError::MissingIngredients {
            recipe_id: "craft_ai".to_string(),
            missing: vec![Shortfall {
                item_id: "ram".to_string(),
                required: 5,
                held: 4,
            }],
        }
    );
    assert_eq!(p.state().inventory(), &before);
}

#[test]
fn test_unknown_recipe() {
    let mut p = Progression::new();
    assert_eq!(
        p.craft("craft_warp_drive"),
        Err(CraftError::UnknownRecipe("craft_warp_drive".to_string()))
    );
}

#[test]
fn test_crafted_items_feed_later_recipes() {
    let mut p = Progression::new();
    stock(
        &mut p,
        &[
            ("resistor", 5),
            ("wire", 5),
            ("cpu", 1),
            ("ram", 2),
            ("gpu", 1),
            ("hdd", 2),
        ],
    );

    let core = get_recipe("craft_core").expect("recipe exists");
    assert!(!can_craft(core, p.state().inventory()));

    p.craft("craft_motherboard").unwrap();
    assert!(can_craft(core, p.state().inventory()));
    p.craft("craft_core").unwrap();
    assert_eq!(p.craft("craft_quantum"), Ok("quantum_core"));

    let inv = p.state().inventory();
    assert_eq!(inv.count("quantum_core"), 1);
    assert_eq!(inv.total(), 1);
}

#[test]
fn test_terminal_climbs_with_crafting() {
    let mut p = Progression::new();
    assert_eq!(terminal_stage(p.state().inventory()).level, 0);

    stock(&mut p, &[("wire", 15), ("capacitor", 5), ("resistor", 5)]);
    assert_eq!(terminal_stage(p.state().inventory()).level, 2);

    p.craft("craft_motherboard").unwrap();
    let stage = terminal_stage(p.state().inventory());
    assert_eq!(stage.level, 3);
    assert_eq!(stage.name, "Logic Board");
}

// =========================================================================
// Catalog integrity
// =========================================================================

#[test]
fn test_catalog_validates_and_orders() {
    assert_eq!(validate_catalog(), Ok(()));
    let order = crafting_order(RECIPES).expect("recipes form a DAG");
    for recipe in RECIPES {
        let result = order
            .iter()
            .position(|&id| id == recipe.result_id)
            .expect("result is in the order");
        for ingredient in recipe.ingredients {
            let at = order
                .iter()
                .position(|&id| id == ingredient.item_id)
                .expect("ingredient is in the order");
            assert!(at < result, "{} must precede {}", ingredient.item_id, recipe.result_id);
        }
    }
}

// =========================================================================
// Loot resolver
// =========================================================================

#[test]
fn test_unforced_loot_never_yields_artifacts() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..5_000 {
        assert!(!roll_loot(None, &mut rng).is_artifact());
    }
}

#[test]
fn test_forced_category_is_honored() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for category in [Category::Component, Category::Consumable, Category::Artifact] {
        for _ in 0..1_000 {
            assert_eq!(roll_loot(Some(category), &mut rng).category(), category);
        }
    }
}

#[test]
fn test_granted_loot_lands_in_inventory() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let mut p = Progression::new();
    for _ in 0..50 {
        let item = p.grant_loot(Some(Category::Consumable), &mut rng);
        assert!(get_item(item.id).is_some());
    }
    assert_eq!(p.state().inventory().total(), 50);
}
