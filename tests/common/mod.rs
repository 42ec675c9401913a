// tests/common/mod.rs
#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use wiki_item::api::{Catalog, ItemApi};
use wiki_item::RawItem;

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("wiki_item_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

pub fn raw(v: Value) -> RawItem {
    match v {
        Value::Object(m) => m,
        _ => panic!("fixture must be an object"),
    }
}

/// Small offline catalog: two masterwork levels of one sword, an iron
/// sword/shield pair, and a charm.
pub fn catalog() -> Catalog {
    serde_json::from_value(json!({
        "Sword-2": {
            "name": "Sword-2",
            "base_item": "Iron Sword",
            "type": "Mainhand Sword",
            "tier": "Rare",
            "location": "Kaul",
            "masterwork": "2",
            "stats": { "attack_damage_percent": 150, "sharpness": 2, "unbreaking": 3 }
        },
        "Sword-1": {
            "name": "Sword-1",
            "base_item": "Iron Sword",
            "type": "Mainhand Sword",
            "tier": "Rare",
            "location": "Kaul",
            "masterwork": "1",
            "stats": { "attack_damage_percent": 100, "sharpness": 1 }
        },
        "Iron Sword": {
            "name": "Iron Sword",
            "base_item": "Iron Sword",
            "type": "Mainhand Sword",
            "stats": { "attack_damage_base": 6 }
        },
        "Iron Shield": {
            "name": "Iron Shield",
            "base_item": "Shield",
            "type": "Offhand Shield",
            "stats": { "armor": 2 }
        },
        "Alchemist's Charm": {
            "name": "Alchemist's Charm",
            "type": "Charm",
            "power": 2,
            "class_name": "Alchemist",
            "stats": { "potion_damage_percent": 20, "gruesome_duration_flat": 1 }
        }
    }))
    .unwrap()
}

pub fn api() -> ItemApi<Catalog> {
    ItemApi::new(catalog()).unwrap()
}
