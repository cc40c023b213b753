use crate::error::ProgressionError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub item_id: &'static str,
    pub count: u32,
}

/// Consumes its ingredients and produces one unit of `result_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: &'static str,
    pub result_id: &'static str,
    pub ingredients: &'static [Ingredient],
    pub description: &'static str,
}

/// One visual upgrade step of the player's terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerminalStage {
    pub level: u8,
    pub name: &'static str,
    /// `None` only for the empty starting rack.
    pub requirement: Option<Ingredient>,
}

/// Anything that holds counted items. The crafting resolver only sees this.
pub trait ItemStore {
    fn count(&self, item_id: &str) -> u32;

    /// Remove `count` units, or nothing if fewer are held.
    fn remove(&mut self, item_id: &str, count: u32) -> Result<(), ProgressionError>;

    fn add(&mut self, item_id: &str, count: u32);

    fn has(&self, item_id: &str, count: u32) -> bool {
        self.count(item_id) >= count
    }
}
