//! Crafting recipes, the crafting resolver, and terminal upgrade stages.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_recipe, RECIPES, TERMINAL_STAGES};
pub use logic::{can_craft, craft, shortfalls, terminal_stage};
pub use types::{Ingredient, ItemStore, Recipe, TerminalStage};
