//! # rose-core: Pure Inventory Logic for the Gilded Rose
//!
//! This crate holds everything that decides how the shop's stock changes from
//! one day to the next. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gilded Rose Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rose-sim (driver binary)                     │   │
//! │  │    config ──► load stock ──► advance N days ──► print report    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rose-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   rules   │  │ inventory │  │ validation│  │   │
//! │  │   │   Item    │  │ next_state│  │ Inventory │  │  policy   │  │   │
//! │  │   │ Category  │  │ constants │  │advance_day│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • PURE DAY TRANSITIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, ItemState, Category)
//! - [`rules`] - Per-category day transitions and domain constants
//! - [`validation`] - Ingestion checks and the validation policy
//! - [`inventory`] - The ordered, validated collection of items
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rose_core::{Inventory, Item};
//!
//! let mut inventory = Inventory::new(vec![
//!     Item::new("Aged Brie", 2, 0),
//!     Item::new("Conjured Mana Cake", 3, 20),
//! ])?;
//!
//! inventory.advance_day();
//!
//! let brie = inventory.get(0).unwrap();
//! assert_eq!((brie.sell_in, brie.quality), (1, 1));
//! # Ok::<(), rose_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use types::*;
pub use validation::ValidationPolicy;
