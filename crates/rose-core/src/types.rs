//! # Domain Types
//!
//! Core domain types used throughout the Gilded Rose.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    ItemState    │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  sell_in (i32)  │   │  Generic        │       │
//! │  │  sell_in (i32)  │   │  quality (i32)  │   │  Appreciating   │       │
//! │  │  quality (i32)  │   │                 │   │  EventTicket    │       │
//! │  └─────────────────┘   └─────────────────┘   │  Legendary      │       │
//! │                                               │  Accelerated    │       │
//! │                                               └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The category is never stored on an [`Item`]. It is derived from the name
//! with [`Category::of`] once, when the item enters the inventory.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Well-Known Names
// =============================================================================

/// Exact name of the appreciating item.
pub const AGED_BRIE: &str = "Aged Brie";

/// Exact name of the event ticket.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Exact name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Name prefix shared by every accelerated-decay item.
pub const CONJURED_PREFIX: &str = "Conjured";

// =============================================================================
// Item
// =============================================================================

/// A single line of stock.
///
/// Plain data holder: every behavior lives in [`crate::rules`] and
/// [`crate::inventory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Identifier, also used to classify the item.
    pub name: String,

    /// Days left to sell the item. Negative once past due.
    pub sell_in: i32,

    /// Value of the item, 0-50 (80 for the legendary item).
    pub quality: i32,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Item {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Returns the day-varying part of the item.
    #[inline]
    pub fn state(&self) -> ItemState {
        ItemState {
            sell_in: self.sell_in,
            quality: self.quality,
        }
    }

    /// Overwrites the day-varying part of the item.
    #[inline]
    pub fn set_state(&mut self, state: ItemState) {
        self.sell_in = state.sell_in;
        self.quality = state.quality;
    }

    /// Returns the category derived from the item's name.
    #[inline]
    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }
}

/// Same layout as the classic fixture output: `name, sell_in, quality`.
impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

// =============================================================================
// Item State
// =============================================================================

/// The `(sell_in, quality)` pair a day transition maps over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemState {
    pub sell_in: i32,
    pub quality: i32,
}

impl ItemState {
    #[inline]
    pub const fn new(sell_in: i32, quality: i32) -> Self {
        ItemState { sell_in, quality }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Closed set of update behaviors an item can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality over time, twice as fast once past due.
    #[default]
    Generic,
    /// Gains quality over time ("Aged Brie").
    Appreciating,
    /// Gains quality faster as the event nears, worthless after it.
    EventTicket,
    /// Never sold, never changes.
    Legendary,
    /// Loses quality twice as fast as a generic item ("Conjured ...").
    Accelerated,
}

impl Category {
    /// Classifies an item name.
    ///
    /// ## Rules
    /// - Exact match for the appreciating, event ticket and legendary names
    /// - Prefix match on `"Conjured"` for accelerated items
    /// - Anything else is generic
    ///
    /// ## Example
    /// ```rust
    /// use rose_core::Category;
    ///
    /// assert_eq!(Category::of("Aged Brie"), Category::Appreciating);
    /// assert_eq!(Category::of("Conjured Mana Cake"), Category::Accelerated);
    /// assert_eq!(Category::of("Elixir of the Mongoose"), Category::Generic);
    /// ```
    pub fn of(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Appreciating,
            BACKSTAGE_PASSES => Category::EventTicket,
            SULFURAS => Category::Legendary,
            _ if name.starts_with(CONJURED_PREFIX) => Category::Accelerated,
            _ => Category::Generic,
        }
    }

    /// Checks if items of this category are exempt from updates.
    #[inline]
    pub const fn is_legendary(&self) -> bool {
        matches!(self, Category::Legendary)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Generic => write!(f, "generic"),
            Category::Appreciating => write!(f, "appreciating"),
            Category::EventTicket => write!(f, "event_ticket"),
            Category::Legendary => write!(f, "legendary"),
            Category::Accelerated => write!(f, "accelerated"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_exact_names() {
        assert_eq!(Category::of(AGED_BRIE), Category::Appreciating);
        assert_eq!(Category::of(BACKSTAGE_PASSES), Category::EventTicket);
        assert_eq!(Category::of(SULFURAS), Category::Legendary);
    }

    #[test]
    fn test_category_exact_match_is_strict() {
        // Near misses fall back to generic
        assert_eq!(Category::of("Aged Brie "), Category::Generic);
        assert_eq!(Category::of("aged brie"), Category::Generic);
        assert_eq!(Category::of("Sulfuras"), Category::Generic);
        assert_eq!(
            Category::of("Backstage passes to a Metallica concert"),
            Category::Generic
        );
    }

    #[test]
    fn test_category_conjured_prefix() {
        assert_eq!(Category::of("Conjured Mana Cake"), Category::Accelerated);
        assert_eq!(Category::of("Conjured"), Category::Accelerated);
        assert_eq!(Category::of("Freshly Conjured Bread"), Category::Generic);
    }

    #[test]
    fn test_item_display() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");

        let item = Item::new(SULFURAS, -1, 80);
        assert_eq!(item.to_string(), "Sulfuras, Hand of Ragnaros, -1, 80");
    }

    #[test]
    fn test_item_state_round_trip() {
        let mut item = Item::new(AGED_BRIE, 2, 0);
        assert_eq!(item.state(), ItemState::new(2, 0));

        item.set_state(ItemState::new(1, 1));
        assert_eq!((item.sell_in, item.quality), (1, 1));
        assert_eq!(item.name, AGED_BRIE);
    }

    #[test]
    fn test_item_serde_field_names() {
        let item = Item::new("Conjured Mana Cake", 3, 6);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Conjured Mana Cake", "sell_in": 3, "quality": 6 })
        );
        assert_eq!(
            serde_json::to_value(Category::EventTicket).unwrap(),
            serde_json::json!("event_ticket")
        );
    }
}
