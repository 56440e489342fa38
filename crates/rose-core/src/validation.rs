//! # Validation Module
//!
//! Ingestion checks for items entering an [`Inventory`](crate::Inventory).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Gate                                    │
//! │                                                                         │
//! │  Item ──► Category::of(name)                                           │
//! │              │                                                          │
//! │              ├── Legendary?                                             │
//! │              │     ├── quality != 80      → LegendaryQuality            │
//! │              │     └── sell_in > 0 (*)    → LegendaryExpiration         │
//! │              │                                                          │
//! │              └── Anything else                                          │
//! │                    └── quality ∉ [0, 50]  → QualityOutOfRange           │
//! │                                                                         │
//! │  (*) only when ValidationPolicy::enforce_legendary_expiration          │
//! │                                                                         │
//! │  Runs once per item at construction/insertion. Never re-run per day.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rose_core::validation::{validate_item, ValidationPolicy};
//! use rose_core::{Category, Item};
//!
//! let policy = ValidationPolicy::default();
//! let category = validate_item(&Item::new("Aged Brie", 2, 0), &policy).unwrap();
//! assert_eq!(category, Category::Appreciating);
//!
//! assert!(validate_item(&Item::new("Sulfuras, Hand of Ragnaros", 1, 80), &policy).is_err());
//! assert!(validate_item(
//!     &Item::new("Sulfuras, Hand of Ragnaros", 1, 80),
//!     &ValidationPolicy::lenient(),
//! ).is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::types::{Category, Item};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Policy
// =============================================================================

/// Switches for the checks that are business decisions rather than hard
/// invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Reject legendary items with a positive sell-in.
    /// Default: true
    #[serde(default = "default_true")]
    pub enforce_legendary_expiration: bool,
}

fn default_true() -> bool {
    true
}

impl ValidationPolicy {
    /// The strict policy (same as `Default`).
    pub const fn strict() -> Self {
        ValidationPolicy {
            enforce_legendary_expiration: true,
        }
    }

    /// Accepts legendary items regardless of their sell-in.
    pub const fn lenient() -> Self {
        ValidationPolicy {
            enforce_legendary_expiration: false,
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy::strict()
    }
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates an item and returns the category it was classified into.
///
/// Pure check: the item is not modified.
pub fn validate_item(item: &Item, policy: &ValidationPolicy) -> ValidationResult<Category> {
    let category = item.category();

    if category.is_legendary() {
        validate_legendary(item, policy)?;
    } else {
        validate_quality_range(item)?;
    }

    Ok(category)
}

/// Validates an item against the default (strict) policy.
pub fn validate(item: &Item) -> ValidationResult<Category> {
    validate_item(item, &ValidationPolicy::default())
}

fn validate_legendary(item: &Item, policy: &ValidationPolicy) -> ValidationResult<()> {
    if item.quality != LEGENDARY_QUALITY {
        return Err(ValidationError::LegendaryQuality {
            name: item.name.clone(),
            quality: item.quality,
            expected: LEGENDARY_QUALITY,
        });
    }

    if policy.enforce_legendary_expiration && item.sell_in > 0 {
        return Err(ValidationError::LegendaryExpiration {
            name: item.name.clone(),
            sell_in: item.sell_in,
        });
    }

    Ok(())
}

fn validate_quality_range(item: &Item) -> ValidationResult<()> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality) {
        return Err(ValidationError::QualityOutOfRange {
            name: item.name.clone(),
            quality: item.quality,
            min: MIN_QUALITY,
            max: MAX_QUALITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
