// src/item/model.rs
use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;

/// One record as the API returns it. Every field is optional.
pub type RawItem = serde_json::Map<String, serde_json::Value>;

/// Stat key → value, in the order the API listed them.
pub type Stats = IndexMap<String, f64>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Mainhand,
    Offhand,
    Helmet,
    Chest,
    Legs,
    Feet,
    Charm,
    /// Known or unknown type without a wiki slot.
    Unassigned,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Mainhand => "mainhand",
            Slot::Offhand => "offhand",
            Slot::Helmet => "helmet",
            Slot::Chest => "chest",
            Slot::Legs => "legs",
            Slot::Feet => "feet",
            Slot::Charm => "charm",
            Slot::Unassigned => "",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    pub name: Option<String>,
    /// `base_item` in the API, e.g. "Iron Sword".
    pub base_type: Option<String>,
    /// `None` when the record has no type at all.
    pub slot: Option<Slot>,
    pub region: Option<String>,
    pub tier: Option<String>,
    pub charm_power: Option<String>,
    pub charm_class: Option<String>,
    /// Location as the API spells it.
    pub location: Option<String>,
    /// Wiki slug for `location`; "" when unknown.
    pub resolved_location: String,
    pub attributes: Stats,
    pub enchantments: Stats,
    pub lore: Option<String>,
    pub masterwork: Option<u32>,
    /// Filled by [`super::aggregate`] only.
    pub masterwork_siblings: BTreeMap<u32, Item>,
}

impl Item {
    pub fn is_charm(&self) -> bool {
        self.slot == Some(Slot::Charm)
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Attributes then enchantments, each in source order.
    pub fn all_stats(&self) -> Stats {
        let mut all = self.attributes.clone();
        for (k, v) in &self.enchantments {
            all.insert(k.clone(), *v);
        }
        all
    }

    /// Sort key: absent masterwork before level 0, then by name.
    pub fn sort_key(&self) -> (i64, &str) {
        (self.masterwork.map_or(-1, i64::from), self.name_or_empty())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.masterwork.unwrap_or(0);
        write!(f, "{} ({})", self.name_or_empty(), super::star_rating(level, level))
    }
}
