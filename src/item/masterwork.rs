// src/item/masterwork.rs
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::model::Item;

static MW_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\d").expect("static regex"));

pub const STAR_FILLED: char = '★';
pub const STAR_EMPTY: char = '☆';

/// Item name without its masterwork suffix: the longest non-empty prefix
/// followed by `-<digit>`, else the whole name.
///
/// `"Sword-10"` → `"Sword"`. A name with `-<digit>` in the middle is cut at
/// the last occurrence (`"Tome-3 of Ash-1"` → `"Tome-3 of Ash"`), and
/// `"Tome-3 of Ash"` → `"Tome"`, which groups it with unrelated items.
pub fn base_name(name: &str) -> &str {
    MW_SUFFIX
        .find_iter(name)
        .filter(|m| m.start() > 0)
        .last()
        .map_or(name, |m| &name[..m.start()])
}

/// `level` filled stars then `limit - level` empty ones.
pub fn star_rating(level: u32, limit: u32) -> String {
    let mut s = String::with_capacity((limit.max(level) as usize) * 3);
    s.extend(std::iter::repeat_n(STAR_FILLED, level as usize));
    s.extend(std::iter::repeat_n(STAR_EMPTY, limit.saturating_sub(level) as usize));
    s
}

/// Ascending by (masterwork, name); absent masterwork first.
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Distinct base names among `items`.
pub fn base_names(items: &[Item]) -> BTreeSet<&str> {
    items.iter().map(|i| base_name(i.name_or_empty())).collect()
}

/// Fold masterwork variants of one base item into a single item.
///
/// The lowest variant (after sorting) is returned with every input keyed by
/// its own level in `masterwork_siblings`. Variants without a level have no
/// key and are left out. Returns `None` for an empty input.
pub fn aggregate(mut items: Vec<Item>) -> Option<Item> {
    sort_items(&mut items);
    let mut iter = items.into_iter();
    let mut primary = iter.next()?;

    let mut siblings = std::mem::take(&mut primary.masterwork_siblings);
    if let Some(level) = primary.masterwork {
        siblings.insert(level, primary.clone());
    }
    for item in iter {
        if let Some(level) = item.masterwork {
            // Later wins on a repeated level
            siblings.insert(level, item);
        }
    }
    primary.masterwork_siblings = siblings;
    Some(primary)
}

/// The highest-level sibling; its stats define the comparison columns.
pub fn representative(item: &Item) -> Option<(u32, &Item)> {
    item.masterwork_siblings
        .iter()
        .next_back()
        .map(|(level, it)| (*level, it))
}
