// src/render/stats.rs
use crate::core::sanitize::format_stat;
use crate::core::tables;
use crate::item::Stats;

/// Substrings dropped from masterwork column headers.
pub const HEADER_STRIP: &[&str] = &["percent", "base", "flat"];

pub fn is_percent(key: &str) -> bool {
    key.contains("percent")
}

fn is_scaled(key: &str) -> bool {
    key.contains("percent") || key.contains("power")
}

/// Display value: percent/power stats are stored ×100.
pub fn format_value(key: &str, value: f64) -> String {
    let v = if is_scaled(key) { value / 100.0 } else { value };
    v.to_string()
}

/// One `{{Template|Name|value}}` line per stat, `|true` appended for base stats.
/// With `wiki_names`, attribute keys use their wiki display name.
pub fn format_list(stats: &Stats, template: &str, wiki_names: bool) -> String {
    stats
        .iter()
        .map(|(key, value)| {
            let label = if wiki_names {
                tables::attribute_name(key).unwrap_or(key.as_str())
            } else {
                key.as_str()
            };
            let name = format_stat(label, &[]);
            let value = format_value(key, *value);
            if key.contains("base") {
                template!(template, &name, &value, "true")
            } else {
                template!(template, &name, &value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
