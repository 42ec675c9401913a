// src/lib.rs
//! Monumenta item API → wiki item pages.
//!
//! ```text
//! api::ItemApi::query → item::normalize → runner::resolve (group by masterwork)
//!                     → render::render → file::export_pages
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod api;
pub mod clipboard;
pub mod file;
pub mod item;
pub mod progress;
pub mod render;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use item::{Item, RawItem, Slot};
