//! Static recipes and terminal upgrade stages.

use super::types::{Ingredient, Recipe, TerminalStage};

const fn need(item_id: &'static str, count: u32) -> Ingredient {
    Ingredient { item_id, count }
}

pub const RECIPES: &[Recipe] = &[
    Recipe {
        id: "craft_motherboard",
        result_id: "motherboard",
        ingredients: &[need("resistor", 5), need("wire", 5)],
        description: "Solder components to base board.",
    },
    Recipe {
        id: "craft_cooling",
        result_id: "cooling_system",
        ingredients: &[need("fan", 3), need("screw", 10)],
        description: "High-airflow thermal solution.",
    },
    Recipe {
        id: "craft_core",
        result_id: "mainframe_core",
        ingredients: &[need("cpu", 1), need("ram", 2), need("motherboard", 1)],
        description: "The heart of the machine.",
    },
    Recipe {
        id: "craft_quantum",
        result_id: "quantum_core",
        ingredients: &[need("mainframe_core", 1), need("gpu", 1), need("hdd", 2)],
        description: "Processing power that bends reality.",
    },
    Recipe {
        id: "craft_server",
        result_id: "server_rack",
        ingredients: &[
            need("cooling_system", 2),
            need("motherboard", 2),
            need("wire", 20),
        ],
        description: "Industrial grade computation.",
    },
    Recipe {
        id: "craft_ai",
        result_id: "ai_module",
        ingredients: &[need("cpu", 3), need("ram", 5), need("deep_blue_chip", 1)],
        description: "It can think. Hopefully it's friendly.",
    },
    Recipe {
        id: "craft_time",
        result_id: "time_machine",
        ingredients: &[need("capacitor", 10), need("screw", 50), need("fan", 5)],
        description: "Great Scott!",
    },
];

/// Evaluated in order; the first unmet stage stops the climb.
pub const TERMINAL_STAGES: &[TerminalStage] = &[
    TerminalStage {
        level: 0,
        name: "Empty Rack",
        requirement: None,
    },
    TerminalStage {
        level: 1,
        name: "Wiring Harness",
        requirement: Some(need("wire", 10)),
    },
    TerminalStage {
        level: 2,
        name: "Power Supply",
        requirement: Some(need("capacitor", 5)),
    },
    TerminalStage {
        level: 3,
        name: "Logic Board",
        requirement: Some(need("motherboard", 1)),
    },
    TerminalStage {
        level: 4,
        name: "System Core",
        requirement: Some(need("mainframe_core", 1)),
    },
    TerminalStage {
        level: 5,
        name: "ONLINE",
        requirement: Some(need("server_rack", 1)),
    },
    TerminalStage {
        level: 6,
        name: "CLUSTER",
        requirement: Some(need("server_rack", 5)),
    },
    TerminalStage {
        level: 7,
        name: "QUANTUM",
        requirement: Some(need("quantum_core", 1)),
    },
    TerminalStage {
        level: 8,
        name: "SENTIENT",
        requirement: Some(need("ai_module", 1)),
    },
    TerminalStage {
        level: 9,
        name: "TEMPORAL",
        requirement: Some(need("time_machine", 1)),
    },
    TerminalStage {
        level: 10,
        name: "OMNISCIENT",
        requirement: Some(need("ai_module", 5)),
    },
];

pub fn get_recipe(id: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.id == id)
}
