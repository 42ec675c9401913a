// src/render/mod.rs
//! Wiki page rendering for one [`Item`].
//!
//! Output is a MediaWiki page built on `Template:Item`:
//!
//! ```text
//! {{Item            ← fixed parameter order, every key always present
//! |name=…
//! …
//! }}
//! {{WorkInProgress|…}}  ← stub notice
//! sentence, lore, == Obtaining ==
//! == Masterworking ==   ← only with two or more masterwork levels
//! {{ItemNavbox}}
//! [[Category:NotImplemented]]
//! ```
//!
//! Rendering is a pure function of the item and the static tables, so the
//! same item always renders to the same bytes.
mod stats;
mod table;

pub use stats::{format_list, format_value};
pub use table::masterwork_table;

use crate::item::{Item, Slot};

const STUB_NOTICE: &str = "{{WorkInProgress|Autogenerated stub. Missing:\n\
*Obtaining\n\
*More details (if possible)\n\
*Double check autogenerated text\n\
*Double check enchant/attribute order\n\
*Categories\n\
}}\n";

const FOOTER: &str = "{{ItemNavbox}}\n[[Category:NotImplemented]]\n";

pub fn render(item: &Item) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(&header(item));
    out.push_str(STUB_NOTICE);
    out.push_str(&body(item));
    out.push_str(&masterwork_table(item));
    out.push_str(FOOTER);
    out
}

/// `{{Item …}}` block. Absent values leave the right-hand side empty.
fn header(item: &Item) -> String {
    let slot = item.slot.map(|s| s.as_str());
    let enchantments = format_list(&item.enchantments, "Item/Enchantment", false);
    let attributes = attributes(item);
    let params: [(&str, Option<&str>); 12] = [
        ("name", item.name.as_deref()),
        ("image", None),
        ("type", item.base_type.as_deref()),
        ("slot", slot),
        ("slot2", None),
        ("region", item.region.as_deref()),
        ("tier", item.tier.as_deref()),
        ("location", Some(item.resolved_location.as_str())),
        ("enchantments", Some(enchantments.as_str())),
        ("attributes", Some(attributes.as_str())),
        ("charm_power", item.charm_power.as_deref()),
        ("charm_class", item.charm_class.as_deref()),
    ];

    let mut out = s!("{{Item\n");
    for (key, value) in params {
        out.push_str(&join!("|", key, "=", value.unwrap_or(""), "\n"));
    }
    out.push_str("}}\n");
    out
}

/// Attribute group plus attribute lines; empty without a wiki slot.
fn attributes(item: &Item) -> String {
    match item.slot {
        None | Some(Slot::Unassigned) => s!(),
        Some(slot) => {
            let mut s = template!("Item/AttributeGroup", slot.as_str());
            let list = format_list(&item.attributes, "Item/Attribute", true);
            if !list.is_empty() {
                s.push('\n');
                s.push_str(&list);
            }
            s
        }
    }
}

fn body(item: &Item) -> String {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    let mut out = format!(
        "{{{{PAGENAME}}}} is a {} {} found inside [[{}]].\n",
        opt(&item.tier),
        opt(&item.base_type),
        opt(&item.location),
    );
    if let Some(lore) = &item.lore {
        out.push_str(&join!("== Lore ==\n''\"", lore, "\"''\n"));
    }
    out.push_str("== Obtaining ==\n");
    out
}
