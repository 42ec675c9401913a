// src/config/consts.rs

// Net config
pub const API_URL: &str = "https://api.playmonumenta.com/items";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("wiki_item/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const MAX_FILES: usize = 10; // 0 = write nothing
pub const DISPLAY_LIMIT: usize = 10;

// Item data
pub const MAX_MASTERWORK: u32 = 99; // higher levels are treated as bad data

// Interactive loop
pub const QUIT: &str = "quit";
pub const RELOAD: &str = ":reload";
pub const PROMPT: &str = "Enter an item, or quit: ";

// Files / env
pub const CONFIG_FILE: &str = "wiki_item.toml";
pub const LOG_ENV: &str = "WIKI_ITEM_LOG";
