//! # Starting Stock
//!
//! Either the built-in shop stock or a TOML stock file:
//!
//! ```toml
//! [[items]]
//! name = "Aged Brie"
//! sell_in = 2
//! quality = 0
//!
//! [[items]]
//! name = "Conjured Mana Cake"
//! sell_in = 3
//! quality = 6
//! ```
//!
//! Nothing here validates items; that happens when they enter the inventory.

use std::path::Path;

use rose_core::{Item, AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};
use serde::Deserialize;
use tracing::info;

use crate::config::ConfigError;

#[derive(Debug, Deserialize)]
struct StockFile {
    #[serde(default)]
    items: Vec<Item>,
}

/// The stock the shop opens with when no file is given.
pub fn default_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Reads a stock file.
pub fn load(path: &Path) -> Result<Vec<Item>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse(&contents)?;
    info!(?path, items = items.len(), "Stock file loaded");
    Ok(items)
}

/// Parses stock file contents.
pub fn parse(contents: &str) -> Result<Vec<Item>, ConfigError> {
    let file: StockFile = toml::from_str(contents)?;
    Ok(file.items)
}
