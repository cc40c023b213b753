//! The loot catalog.

use super::types::{Category, ConsumableEffect, ItemKind, LootItem, Tier};

const fn component(
    id: &'static str,
    name: &'static str,
    tier: Tier,
    description: &'static str,
) -> LootItem {
    LootItem {
        id,
        name,
        tier,
        description,
        kind: ItemKind::Component,
    }
}

const fn consumable(
    id: &'static str,
    name: &'static str,
    tier: Tier,
    description: &'static str,
    effect: ConsumableEffect,
) -> LootItem {
    LootItem {
        id,
        name,
        tier,
        description,
        kind: ItemKind::Consumable { effect },
    }
}

const fn artifact(
    id: &'static str,
    name: &'static str,
    tier: Tier,
    description: &'static str,
    year: Option<i32>,
) -> LootItem {
    LootItem {
        id,
        name,
        tier,
        description,
        kind: ItemKind::Artifact { year },
    }
}

pub const LOOT_TABLE: &[LootItem] = &[
    // Components
    component("resistor", "Carbon Resistor", Tier::Common, "Basic resistance."),
    component("capacitor", "Flux Capacitor", Tier::Common, "Stores charge."),
    component("wire", "Copper Wire", Tier::Common, "Conducts electricity."),
    component("screw", "Rusty Screw", Tier::Common, "Holds things together."),
    component("fan", "Cooling Fan", Tier::Uncommon, "Keeps it frosty."),
    component("ram", "SDRAM Stick", Tier::Uncommon, "Volatile memory."),
    component("floppy", "Floppy Disk", Tier::Uncommon, "1.44MB of storage."),
    component("cpu", "Central Processor", Tier::Rare, "The brain."),
    component("hdd", "Hard Drive", Tier::Rare, "Spinning rust."),
    component("gpu", "Voodoo Card", Tier::Legendary, "3D acceleration!"),
    // Consumables
    consumable(
        "extra_life",
        "1-Up Mushroom",
        Tier::Rare,
        "Grants +1 Life.",
        ConsumableEffect::ExtraLife,
    ),
    consumable(
        "streak_freeze",
        "Cryo Freeze",
        Tier::Legendary,
        "Protects streak from next game over.",
        ConsumableEffect::StreakFreeze,
    ),
    consumable(
        "hint_token",
        "Cheat Code",
        Tier::Uncommon,
        "Bit reveals the answer.",
        ConsumableEffect::HintToken,
    ),
    consumable(
        "easy_mode",
        "Debug Mode",
        Tier::Uncommon,
        "Simplifies next equation.",
        ConsumableEffect::EasyMode,
    ),
    consumable(
        "memory_jog",
        "RAM Boost",
        Tier::Common,
        "Bit reminds you of yesterday's number.",
        ConsumableEffect::MemoryJog,
    ),
    consumable(
        "bypass_protocol",
        "Bypass Protocol",
        Tier::Legendary,
        "Skips today's equation. The chain holds.",
        ConsumableEffect::BypassProtocol,
    ),
    // Artifacts: granted by challenge overrides, never rolled
    artifact("nokia3210", "The Indestructible", Tier::Legendary, "Survives nuclear blasts and bad reception.", Some(1999)),
    artifact("anniversary_token", "Time Capsule", Tier::Rare, "Proof you remembered a date that mattered.", None),
    artifact("tamagotchi", "Digital Pet", Tier::Rare, "Don't let it die. Again.", Some(1996)),
    artifact("charred_elmo", "Charred Elmo", Tier::Rare, "It still giggles when you burn it.", Some(1996)),
    artifact("scorched_furby", "Scorched Furby", Tier::Rare, "It sees you. It judges you.", Some(1998)),
    artifact("teddy_ruxpin", "Haunted Bear", Tier::Rare, "Telling stories from the void.", Some(1985)),
    artifact("rubiks_cube", "The Cube", Tier::Uncommon, "Frustration in 6 colors.", Some(1980)),
    artifact("aol_cd", "1000 Free Hours", Tier::Common, "Excellent coaster.", Some(1995)),
    artifact("clippy", "Paperclip Assistant", Tier::Legendary, "It looks like you're struggling.", Some(1997)),
    artifact("y2k_bug", "Y2K Bug", Tier::Legendary, "The apocalypse that wasn't.", Some(2000)),
    artifact("ipod_classic", "1000 Songs", Tier::Rare, "Click wheel goodness.", Some(2001)),
    artifact("myspace_tom", "Top Friend", Tier::Rare, "Everyone's first friend.", Some(2003)),
    artifact("heelys", "Wheel Shoes", Tier::Uncommon, "Banned in schools everywhere.", Some(2000)),
    artifact("pi_badge", "Slice of Pi", Tier::Rare, "3.14159... delicious.", None),
    artifact("euler_number", "Euler's Number", Tier::Rare, "2.718... Naturally beautiful.", None),
    artifact("fibonacci_spiral", "Golden Spiral", Tier::Rare, "Nature's cheat code.", None),
    artifact("apollo_11_patch", "Moon Lander", Tier::Legendary, "One small step.", Some(1969)),
    artifact("apollo_13_patch", "Successful Failure", Tier::Legendary, "Houston, we have a solution.", Some(1970)),
    artifact("turing_machine", "Universal Machine", Tier::Legendary, "The theoretical ancestor.", Some(1936)),
    artifact("deep_blue_chip", "Deep Blue", Tier::Legendary, "Checkmate, humanity.", Some(1997)),
    artifact("einstein_equation", "Relativity", Tier::Legendary, "E=MC². Fast.", Some(1905)),
    artifact("eniac_vacuum_tube", "Vacuum Tube", Tier::Rare, "Smells like burning ozone.", Some(1945)),
    artifact("arpanet_node", "First Node", Tier::Legendary, "LO...GIN.", Some(1969)),
    // Crafted: produced by recipes, never rolled at random tier
    component("motherboard", "Logic Board", Tier::Uncommon, "The base for computation."),
    component("cooling_system", "Cryo Cooling", Tier::Uncommon, "Keeps temperatures absolute zero."),
    component("mainframe_core", "Mainframe Core", Tier::Rare, "Heavy duty processing."),
    component("quantum_core", "Quantum Core", Tier::Legendary, "Processing power that bends reality."),
    component("server_rack", "Server Rack", Tier::Rare, "Industrial grade computation."),
    component("ai_module", "AI Module", Tier::Legendary, "It can think. Hopefully it's friendly."),
    component("time_machine", "Temporal Unit", Tier::Legendary, "Great Scott!"),
];

pub fn get_item(id: &str) -> Option<&'static LootItem> {
    LOOT_TABLE.iter().find(|item| item.id == id)
}

pub fn items_in(category: Category) -> impl Iterator<Item = &'static LootItem> {
    LOOT_TABLE
        .iter()
        .filter(move |item| item.category() == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let gpu = get_item("gpu").unwrap();
        assert_eq!(gpu.tier, Tier::Legendary);
        assert_eq!(gpu.category(), Category::Component);
        assert!(get_item("flux_capacitor").is_none());
    }

    #[test]
    fn test_every_effect_has_one_consumable() {
        let effects: Vec<_> = items_in(Category::Consumable)
            .filter_map(|item| item.consumable_effect())
            .collect();
        assert_eq!(effects.len(), 6);
        for effect in [
            ConsumableEffect::ExtraLife,
            ConsumableEffect::StreakFreeze,
            ConsumableEffect::HintToken,
            ConsumableEffect::EasyMode,
            ConsumableEffect::MemoryJog,
            ConsumableEffect::BypassProtocol,
        ] {
            assert_eq!(effects.iter().filter(|&&e| e == effect).count(), 1);
        }
    }

    #[test]
    fn test_artifacts_present() {
        assert!(get_item("nokia3210").unwrap().is_artifact());
        assert!(get_item("anniversary_token").unwrap().is_artifact());
        assert_eq!(items_in(Category::Artifact).count(), 23);
    }
}
