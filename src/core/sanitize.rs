// src/core/sanitize.rs

/// Lore keeps its spacing; only line breaks become spaces.
pub fn flatten_lines(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Stat key → display text: lowercase, drop every `remove` substring
/// (case-insensitive), underscores to spaces, capitalize each word.
///
/// `format_stat("attack_damage_percent", &["percent"])` → `"Attack Damage"`
pub fn format_stat(key: &str, remove: &[&str]) -> String {
    let mut s = key.to_lowercase();
    for r in remove {
        s = s.replace(&r.to_lowercase(), "");
    }
    s.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

/// Item names are used verbatim as file names, so reject anything that
/// would escape the output folder or that common filesystems refuse.
pub fn is_valid_filename(name: &str) -> bool {
    const RESERVED: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.chars().any(|c| c.is_control() || RESERVED.contains(&c))
}
