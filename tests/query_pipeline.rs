// tests/query_pipeline.rs
//
// Query → normalize → group → render, against an offline catalog.
//
mod common;

use pretty_assertions::assert_eq;
use wiki_item::render::render;
use wiki_item::runner::{run_query, QueryOutcome};

#[test]
fn masterwork_levels_are_grouped() {
    let api = common::api();
    let QueryOutcome::Grouped(sword) = run_query(&api, "sword") else {
        panic!("expected a grouped result");
    };

    assert_eq!(sword.name.as_deref(), Some("Sword-1"));
    let levels: Vec<u32> = sword.masterwork_siblings.keys().copied().collect();
    assert_eq!(levels, [1, 2]);
    assert_eq!(sword.masterwork_siblings[&1].name.as_deref(), Some("Sword-1"));
    assert_eq!(sword.masterwork_siblings[&2].name.as_deref(), Some("Sword-2"));

    let page = render(&sword);
    let table_start = page.find("== Masterworking ==").expect("table present");
    let table = &page[table_start..page.find("{{ItemNavbox}}").unwrap()];
    assert_eq!(
        table,
        "== Masterworking ==\n\
         {|class=\"article-table\"\n\
         !'''Masterwork Level'''\n\
         !'''Attack Damage'''\n\
         !'''Sharpness'''\n\
         !'''Unbreaking'''\n\
         |-\n\
         |★☆\n\
         |1%\n\
         |1\n\
         |\n\
         |-\n\
         |★★\n\
         |1.5%\n\
         |2\n\
         |3\n\
         |-\n\
         |}\n"
    );
}

#[test]
fn distinct_base_names_are_kept_apart() {
    let api = common::api();
    let outcome = run_query(&api, "Iron");
    let QueryOutcome::Distinct(items) = &outcome else {
        panic!("expected distinct items, got {outcome:?}");
    };
    let names: Vec<&str> = items.iter().map(|i| i.name_or_empty()).collect();
    assert_eq!(names, ["Iron Shield", "Iron Sword"]);
    for item in items {
        assert!(item.masterwork_siblings.is_empty());
    }

    let pages = outcome.render(10);
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("|name=Iron Shield\n"));
    assert!(pages[1].contains("|name=Iron Sword\n"));
    assert!(!pages.iter().any(|p| p.contains("Masterworking")));
}

#[test]
fn single_match_is_grouped_without_table() {
    let api = common::api();
    let outcome = run_query(&api, "alchemist");
    let QueryOutcome::Grouped(charm) = &outcome else {
        panic!("expected a single item");
    };
    assert!(charm.is_charm());
    assert!(charm.enchantments.is_empty());
    assert!(!render(charm).contains("Masterworking"));
}

#[test]
fn no_match_is_not_found() {
    let api = common::api();
    assert_eq!(run_query(&api, "Mythic Thing"), QueryOutcome::NotFound);
}

#[test]
fn display_limit_truncates_distinct_results() {
    let api = common::api();
    let outcome = run_query(&api, "i");
    let (shown, truncated) = outcome.shown(1);
    assert_eq!(shown.len(), 1);
    assert!(truncated);
    assert_eq!(outcome.render(1).len(), 1);
}
