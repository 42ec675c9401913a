// src/render/table.rs
use super::stats::{format_value, is_percent, HEADER_STRIP};
use crate::core::sanitize::format_stat;
use crate::item::{representative, star_rating, Item};

/// `== Masterworking ==` comparison table, one row per level.
/// Empty unless the item has at least two masterwork siblings.
pub fn masterwork_table(item: &Item) -> String {
    if item.masterwork_siblings.len() < 2 {
        return s!();
    }
    let Some((max_level, top)) = representative(item) else {
        return s!();
    };
    let columns = top.all_stats();

    let mut out = s!("== Masterworking ==\n{|class=\"article-table\"\n!'''Masterwork Level'''\n");
    for key in columns.keys() {
        out.push_str(&join!("!'''", &format_stat(key, HEADER_STRIP), "'''\n"));
    }
    out.push_str("|-\n");

    for (level, sibling) in &item.masterwork_siblings {
        let stats = sibling.all_stats();
        out.push_str(&join!("|", &star_rating(*level, max_level), "\n"));
        for key in columns.keys() {
            out.push('|');
            if let Some(v) = stats.get(key) {
                out.push_str(&format_value(key, *v));
                if is_percent(key) {
                    out.push('%');
                }
            }
            out.push('\n');
        }
        out.push_str("|-\n");
    }
    out.push_str("|}\n");
    out
}
