// src/core/tables.rs
//! Fixed lookup tables between the item API and the wiki.
//!
//! All keys are lowercase. Built once on first use and never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::item::Slot;

/// API location name → wiki location slug. An empty slug means the location is
/// known but has no page of its own.
pub static LOCATIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("april's fools", "aprilfools"),
        ("azacor", "azacor"),
        ("blitz", "blitz"),
        ("blue", "blue"),
        ("brown", "brown"),
        ("carnival", "carnival"),
        ("valley casino", "casino1"),
        ("isles casino", "casino2"),
        ("ring casino", "casino3"),
        ("cyan", "cyan"),
        ("delves", "delves"),
        ("divine skin", "divine"),
        ("docks", "docks"),
        ("easter", "easter"),
        ("corridors", "ephemeral"),
        ("ephemeral enhancements", "ephemeralenhancements"),
        ("forum", "forum"),
        ("eldrask", "the waking giant"),
        ("gray", "gray"),
        ("greed skin", "greedskin"),
        ("halloween event", "halloween"),
        ("halloween skin", "halloween skin"),
        ("the hoard", "hoard"),
        ("holiday skin", "holidayskin"),
        ("horseman", "horseman"),
        ("intellect crystallizer", "intellect"),
        ("kaul", "kaul"),
        ("labs", "labs"),
        ("hekawt", "lich"),
        ("arena of terth", "light"),
        ("light blue", "lightblue"),
        ("light gray", "lightgray"),
        ("lime", "lime"),
        ("lowtide smuggler", "lowtide smuggler"),
        ("magenta", "magenta"),
        ("mist", "mist"),
        ("mythic reliquary", "mythic"),
        ("orange", "orange"),
        ("valley overworld", "overworld1"),
        ("isles overworld", "overworld2"),
        ("pelias' keep", "pelias"),
        ("pink", "pink"),
        ("portal", "portal"),
        ("purple", "purple"),
        ("quest reward", "quest"),
        ("remorse", "remorse"),
        ("remorseful skin", "remorsefulskin"),
        ("reverie", "reverie"),
        ("royal armory", "royal"),
        ("ruin", "ruin"),
        ("rush", "rush"),
        ("sanctum", "sanctum"),
        ("sanguine halls", "sanguine"),
        ("seasonal pass", "seasonpass"),
        ("shifting", "shifting"),
        ("skt", "silverknightstomb"),
        ("soulwoven", "soul"),
        ("teal", "teal"),
        ("titanic skin", "titanicskin"),
        ("transmogifier", "transmogifier"),
        ("tov", "treasure"),
        ("trickster", "trickster"), // legacy
        ("uganda", "uganda"),
        ("valentine's day", "valentine"),
        ("verdant", "verdant"),
        ("threadwarped skin", "verdantskin"),
        ("the eternal vigil", "vigil"),
        ("white", "white"),
        ("willows", "willows"),
        ("storied skin", "willowskin"),
        ("winter event", "winter"),
        ("the wolfswood", "wolfswood"),
        ("yellow", "yellow"),
        // Regions, not locations
        ("king's valley", ""),
        ("celsian isles", ""),
        ("architect's ring", ""),
    ])
});

/// API item type → equipment slot.
pub static SLOTS: LazyLock<HashMap<&'static str, Slot>> = LazyLock::new(|| {
    use Slot::*;
    HashMap::from([
        ("mainhand", Mainhand),
        ("wand", Mainhand),
        ("scythe", Mainhand),
        ("pickaxe", Mainhand),
        ("shovel", Mainhand),
        ("axe", Mainhand),
        ("trident", Mainhand),
        ("snowball", Mainhand),
        ("stick", Mainhand),
        ("bow", Mainhand),
        ("crossbow", Mainhand),
        ("fishing rod", Mainhand),
        ("mainhand sword", Mainhand),
        ("mainhand shield", Mainhand),
        ("offhand sword", Offhand),
        ("offhand shield", Offhand),
        ("offhand", Offhand),
        ("helmet", Helmet),
        ("chestplate", Chest),
        ("leggings", Legs),
        ("boots", Feet),
        ("charm", Charm),
        ("consumable", Unassigned),
        ("misc", Unassigned),
    ])
});

/// Stat keys treated as attributes, with their wiki display names.
/// Everything else on a non-charm item is an enchantment.
pub static ATTRIBUTES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Defensive
        ("max_health_flat", "Max Health Add"),
        ("max_health_percent", "Max Health Multiply"),
        ("agility", "Agility"),
        ("agility_percent", "Agility Multiply"),
        ("armor", "Armor"),
        ("armor_percent", "Armor Multiply"),
        // Offensive
        ("attack_damage_base", "Attack Damage Add"),
        ("attack_damage_percent", "Attack Damage Multiply"),
        ("attack_speed_base", "Attack Speed Add"),
        ("attack_speed_flat", "Attack Speed Add"),
        ("attack_speed_percent", "Attack Speed Multiply"),
        ("spell_power_base", "Spell Power"),
        ("magic_damage_percent", "Magic Power Multiply"),
        ("projectile_damage_base", "Projectile Damage Add"),
        ("projectile_damage_percent", "Projectile Damage Multiply"),
        ("projectile_speed_base", "Projectile Speed Add"),
        ("projectile_speed_percent", "Projectile Speed Multiply"),
        ("throw_rate_base", "Throw Rate"),
        ("throw_rate_percent", "Throw Rate Multiply"),
        ("potion_radius_flat", "Potion Radius"),
        ("potion_damage_flat", "Potion Damage"),
        // Misc
        ("knockback_resistance_flat", "Knockback Resistance"),
        ("speed_flat", "Speed Add"),
        ("speed_percent", "Speed Multiply"),
        ("thorns_flat", "Thorns Damage"),
    ])
});

pub fn slot_for(raw_type: &str) -> Option<Slot> {
    SLOTS.get(raw_type.to_lowercase().as_str()).copied()
}

/// Unmapped locations resolve to "".
pub fn location_slug(raw_location: &str) -> &'static str {
    LOCATIONS.get(raw_location.to_lowercase().as_str()).copied().unwrap_or("")
}

pub fn is_attribute(stat: &str) -> bool {
    ATTRIBUTES.contains_key(stat)
}

pub fn attribute_name(stat: &str) -> Option<&'static str> {
    ATTRIBUTES.get(stat).copied()
}
