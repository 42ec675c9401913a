// src/api.rs
//! Item catalog access.
//!
//! The API serves the whole catalog in one response, an object keyed by item
//! name. [`ItemApi`] keeps it in memory and answers prefix queries locally.
use indexmap::IndexMap;
use reqwest::blocking::Client;

use crate::config::SourceOptions;
use crate::core::net;
use crate::error::Result;
use crate::item::RawItem;

/// Item name → raw record, in API order.
pub type Catalog = IndexMap<String, RawItem>;

/// Anything that can produce the full catalog.
pub trait ItemSource {
    fn fetch_all(&self) -> Result<Catalog>;
}

/// The live item API.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(opts: &SourceOptions) -> Result<Self> {
        Ok(Self { client: net::client(opts)?, url: opts.url.clone() })
    }
}

impl ItemSource for HttpSource {
    fn fetch_all(&self) -> Result<Catalog> {
        let catalog: Catalog = net::http_get_json(&self.client, &self.url)?;
        logf!("Fetched {} items from {}", catalog.len(), self.url);
        Ok(catalog)
    }
}

/// A fixed catalog, for offline use and tests.
impl ItemSource for Catalog {
    fn fetch_all(&self) -> Result<Catalog> {
        Ok(self.clone())
    }
}

pub struct ItemApi<S> {
    source: S,
    items: Catalog,
}

impl<S: ItemSource> ItemApi<S> {
    pub fn new(source: S) -> Result<Self> {
        let items = source.fetch_all()?;
        Ok(Self { source, items })
    }

    /// Refetch the catalog. On failure the old one is kept.
    pub fn reload(&mut self) -> Result<usize> {
        self.items = self.source.fetch_all()?;
        Ok(self.items.len())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records whose name starts with `prefix`, ignoring case.
    pub fn query(&self, prefix: &str) -> Vec<RawItem> {
        let prefix = prefix.to_lowercase();
        self.items
            .iter()
            .filter(|(name, _)| name.to_lowercase().starts_with(&prefix))
            .map(|(_, raw)| raw.clone())
            .collect()
    }
}
