// src/item/normalize.rs
use serde_json::Value;

use super::model::{Item, RawItem, Slot, Stats};
use crate::config::consts::MAX_MASTERWORK;
use crate::core::sanitize::flatten_lines;
use crate::core::tables;

/// Build a canonical [`Item`] from an API record. Never fails: missing
/// fields stay `None`, odd values are dropped with a warning.
pub fn normalize(raw: &RawItem) -> Item {
    let name = text(raw, "name");

    let slot = text(raw, "type").map(|ty| {
        tables::slot_for(&ty).unwrap_or_else(|| {
            logw!("No slot found for {:?} (type {:?})", name.as_deref().unwrap_or(""), ty);
            Slot::Unassigned
        })
    });

    let location = text(raw, "location");
    let resolved_location = location
        .as_deref()
        .map(tables::location_slug)
        .unwrap_or("")
        .to_string();

    let stats = stats(raw, name.as_deref());
    let (attributes, enchantments) = if slot == Some(Slot::Charm) {
        // Charms: everything is an attribute
        (stats, Stats::new())
    } else {
        partition(stats)
    };

    Item {
        base_type: text(raw, "base_item"),
        slot,
        region: text(raw, "region"),
        tier: text(raw, "tier"),
        charm_power: text(raw, "power"),
        charm_class: text(raw, "class_name"),
        location,
        resolved_location,
        attributes,
        enchantments,
        lore: text(raw, "lore").map(|l| flatten_lines(&l)),
        masterwork: masterwork(raw, name.as_deref()),
        masterwork_siblings: Default::default(),
        name,
    }
}

/// Split stats into (attributes, enchantments), keeping source order in both.
pub fn partition(stats: Stats) -> (Stats, Stats) {
    stats.into_iter().partition(|(k, _)| tables::is_attribute(k))
}

/// Scalar field as text. Numbers and bools are stringified; null is absent.
fn text(raw: &RawItem, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            logw!("Ignoring non-scalar {:?}: {}", key, other);
            None
        }
    }
}

fn stats(raw: &RawItem, name: Option<&str>) -> Stats {
    let Some(Value::Object(map)) = raw.get("stats") else {
        return Stats::new();
    };
    map.iter()
        .filter_map(|(k, v)| match v.as_f64() {
            Some(n) => Some((k.clone(), n)),
            None => {
                logw!("{}: stat {:?} is not a number ({})", name.unwrap_or(""), k, v);
                None
            }
        })
        .collect()
}

fn masterwork(raw: &RawItem, name: Option<&str>) -> Option<u32> {
    let value = text(raw, "masterwork")?;
    match value.trim().parse::<u32>() {
        Ok(level) if level <= MAX_MASTERWORK => Some(level),
        Ok(level) => {
            logw!("{}: masterwork level {} is out of range", name.unwrap_or(""), level);
            None
        }
        Err(_) => {
            logw!("{}: unreadable masterwork level {:?}", name.unwrap_or(""), value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    fn raw(v: Value) -> RawItem {
        match v {
            Value::Object(m) => m,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn empty_record_normalizes_to_absent_fields() {
        let item = normalize(&RawItem::new());
        assert_eq!(item.name, None);
        assert_eq!(item.base_type, None);
        assert_eq!(item.slot, None);
        assert_eq!(item.region, None);
        assert_eq!(item.tier, None);
        assert_eq!(item.charm_power, None);
        assert_eq!(item.charm_class, None);
        assert_eq!(item.location, None);
        assert_eq!(item.resolved_location, "");
        assert_eq!(item.lore, None);
        assert_eq!(item.masterwork, None);
        assert!(item.attributes.is_empty());
        assert!(item.enchantments.is_empty());
        assert!(item.masterwork_siblings.is_empty());
    }

    #[test]
    fn full_record() {
        let item = normalize(&raw(json!({
            "name": "Kaul's Judgement",
            "base_item": "Iron Sword",
            "type": "Mainhand Sword",
            "region": "Valley",
            "tier": "Epic",
            "location": "Kaul",
            "lore": "The earth\nremembers.",
            "masterwork": "2",
            "stats": {
                "sharpness": 5,
                "attack_damage_base": 9,
                "unbreaking": 3,
                "attack_speed_base": 1.6
            }
        })));
        assert_eq!(item.name.as_deref(), Some("Kaul's Judgement"));
        assert_eq!(item.base_type.as_deref(), Some("Iron Sword"));
        assert_eq!(item.slot, Some(Slot::Mainhand));
        assert_eq!(item.resolved_location, "kaul");
        assert_eq!(item.location.as_deref(), Some("Kaul"));
        assert_eq!(item.lore.as_deref(), Some("The earth remembers."));
        assert_eq!(item.masterwork, Some(2));

        let attrs: Vec<&str> = item.attributes.keys().map(String::as_str).collect();
        let enchs: Vec<&str> = item.enchantments.keys().map(String::as_str).collect();
        assert_eq!(attrs, ["attack_damage_base", "attack_speed_base"]);
        assert_eq!(enchs, ["sharpness", "unbreaking"]);
    }

    #[test]
    fn partition_is_disjoint_and_complete() {
        let item = normalize(&raw(json!({
            "type": "helmet",
            "stats": { "armor": 6, "protection": 2, "max_health_percent": 10, "regen": 1 }
        })));
        for k in item.attributes.keys() {
            assert!(!item.enchantments.contains_key(k));
        }
        let mut union: Vec<&String> = item.attributes.keys().chain(item.enchantments.keys()).collect();
        union.sort();
        assert_eq!(union, ["armor", "max_health_percent", "protection", "regen"]);
    }

    #[test]
    fn charm_keeps_everything_as_attributes() {
        let item = normalize(&raw(json!({
            "type": "Charm",
            "power": 3,
            "class_name": "Alchemist",
            "stats": { "armor": 2, "bezoar_damage_percent": 15, "sharpness": 1 }
        })));
        assert!(item.is_charm());
        assert!(item.enchantments.is_empty());
        let keys: Vec<&str> = item.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["armor", "bezoar_damage_percent", "sharpness"]);
        assert_eq!(item.charm_power.as_deref(), Some("3"));
        assert_eq!(item.charm_class.as_deref(), Some("Alchemist"));
    }

    #[test]
    #[traced_test]
    fn unknown_type_warns_and_defaults_to_empty_slot() {
        let item = normalize(&raw(json!({ "name": "Oddity", "type": "Teapot" })));
        assert_eq!(item.slot, Some(Slot::Unassigned));
        assert_eq!(item.slot.map(|s| s.as_str()), Some(""));
        assert!(logs_contain("No slot found"));
    }

    #[test]
    #[traced_test]
    fn mapped_to_empty_types_do_not_warn_and_stay_unassigned() {
        let item = normalize(&raw(json!({ "type": "Consumable" })));
        assert_eq!(item.slot, Some(Slot::Unassigned));
        assert!(!logs_contain("No slot found"));
    }

    #[test]
    fn location_resolution() {
        let loc = |l: &str| normalize(&raw(json!({ "location": l }))).resolved_location;
        assert_eq!(loc("Valley Casino"), "casino1");
        assert_eq!(loc("King's Valley"), "");
        assert_eq!(loc("Somewhere New"), "");
    }

    #[test]
    fn odd_values_are_dropped_not_fatal() {
        let item = normalize(&raw(json!({
            "name": null,
            "masterwork": "x",
            "stats": { "armor": "lots", "speed_flat": 0.5 }
        })));
        assert_eq!(item.name, None);
        assert_eq!(item.masterwork, None);
        assert_eq!(item.attributes.len(), 1);
        assert_eq!(item.attributes["speed_flat"], 0.5);
    }

    #[test]
    fn numeric_masterwork_is_accepted() {
        let item = normalize(&raw(json!({ "masterwork": 4 })));
        assert_eq!(item.masterwork, Some(4));
    }

    #[test]
    #[traced_test]
    fn huge_masterwork_is_dropped() {
        let item = normalize(&raw(json!({ "name": "Blade-9", "masterwork": "4000000000" })));
        assert_eq!(item.masterwork, None);
        assert!(logs_contain("out of range"));

        let edge = normalize(&raw(json!({ "masterwork": MAX_MASTERWORK })));
        assert_eq!(edge.masterwork, Some(MAX_MASTERWORK));
    }
}
