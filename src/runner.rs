// src/runner.rs
use crate::api::{ItemApi, ItemSource};
use crate::item::{self, Item, RawItem};
use crate::render;

/// What a query resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryOutcome {
    NotFound,
    /// Every match shares one base name; masterwork levels folded into one item.
    Grouped(Item),
    /// Several base names; all matches kept, sorted.
    Distinct(Vec<Item>),
}

impl QueryOutcome {
    pub fn items(&self) -> &[Item] {
        match self {
            QueryOutcome::NotFound => &[],
            QueryOutcome::Grouped(item) => std::slice::from_ref(item),
            QueryOutcome::Distinct(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// The first `limit` items, and whether any were cut.
    pub fn shown(&self, limit: usize) -> (&[Item], bool) {
        let items = self.items();
        let n = items.len().min(limit);
        (&items[..n], items.len() > n)
    }

    /// Rendered pages for the shown items.
    pub fn render(&self, limit: usize) -> Vec<String> {
        self.shown(limit).0.iter().map(render::render).collect()
    }
}

/// Normalize, sort, and group query results.
pub fn resolve(raws: &[RawItem]) -> QueryOutcome {
    let mut items: Vec<Item> = raws.iter().map(item::normalize).collect();
    if items.is_empty() {
        return QueryOutcome::NotFound;
    }

    if item::base_names(&items).len() == 1 {
        return match item::aggregate(items) {
            Some(grouped) => {
                logd!("Grouped {} masterwork level(s) of {:?}", grouped.masterwork_siblings.len(), grouped.name_or_empty());
                QueryOutcome::Grouped(grouped)
            }
            None => QueryOutcome::NotFound,
        };
    }

    item::sort_items(&mut items);
    logd!("{} distinct items, no grouping", items.len());
    QueryOutcome::Distinct(items)
}

pub fn run_query<S: ItemSource>(api: &ItemApi<S>, query: &str) -> QueryOutcome {
    let raws = api.query(query);
    logf!("Query {:?}: {} match(es)", query, raws.len());
    resolve(&raws)
}
