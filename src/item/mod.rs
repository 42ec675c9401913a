// src/item/mod.rs
//! Item records: API shape → canonical [`Item`], plus masterwork grouping.
//!
//! Nothing here does I/O or fails. Odd input is logged and skipped.
mod masterwork;
mod model;
mod normalize;

pub use masterwork::{
    aggregate, base_name, base_names, representative, sort_items, star_rating,
    STAR_EMPTY, STAR_FILLED,
};
pub use model::{Item, RawItem, Slot, Stats};
pub use normalize::{normalize, partition};
