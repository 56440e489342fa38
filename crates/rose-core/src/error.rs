//! # Error Types
//!
//! Domain-specific error types for rose-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rose-core errors (this file)                                          │
//! │  ├── CoreError        - Inventory construction/insertion failures      │
//! │  └── ValidationError  - A single item breaks its category invariant    │
//! │                                                                         │
//! │  rose-sim errors (app)                                                 │
//! │  └── ConfigError      - Bad config file, env var or flag               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (binary boundary)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors only ever come out of ingestion. Once an item is admitted the day
//! rules cannot fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory-level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An item was rejected at the validation gate.
    ///
    /// ## When This Occurs
    /// - `Inventory::new` / `Inventory::with_policy`: `index` is the position
    ///   of the first invalid item in the input; nothing is admitted.
    /// - `Inventory::insert`: `index` is the slot the item would have taken.
    #[error("Invalid item at position {index}: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

impl CoreError {
    /// Returns the underlying validation failure.
    pub fn validation(&self) -> &ValidationError {
        match self {
            CoreError::InvalidItem { source, .. } => source,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Item invariant violations detected at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A legendary item does not carry its fixed quality.
    #[error("{name} must have quality {expected}, got {quality}")]
    LegendaryQuality {
        name: String,
        quality: i32,
        expected: i32,
    },

    /// A legendary item is still listed for sale.
    ///
    /// Only raised when the policy enforces legendary expiration.
    #[error("{name} is never sold, sell-in must be 0 or less, got {sell_in}")]
    LegendaryExpiration { name: String, sell_in: i32 },

    /// A non-legendary item's quality is outside the allowed range.
    #[error("{name} quality must be between {min} and {max}, got {quality}")]
    QualityOutOfRange {
        name: String,
        quality: i32,
        min: i32,
        max: i32,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::LegendaryQuality {
            name: "Sulfuras, Hand of Ragnaros".to_string(),
            quality: 79,
            expected: 80,
        };
        assert_eq!(
            err.to_string(),
            "Sulfuras, Hand of Ragnaros must have quality 80, got 79"
        );

        let err = ValidationError::QualityOutOfRange {
            name: "+5 Dexterity Vest".to_string(),
            quality: 51,
            min: 0,
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "+5 Dexterity Vest quality must be between 0 and 50, got 51"
        );
    }

    #[test]
    fn test_core_error_carries_position_and_source() {
        let err = CoreError::InvalidItem {
            index: 3,
            source: ValidationError::LegendaryExpiration {
                name: "Sulfuras, Hand of Ragnaros".to_string(),
                sell_in: 1,
            },
        };
        assert_eq!(
            err.to_string(),
            "Invalid item at position 3: Sulfuras, Hand of Ragnaros is never sold, \
             sell-in must be 0 or less, got 1"
        );
        assert!(matches!(
            err.validation(),
            ValidationError::LegendaryExpiration { sell_in: 1, .. }
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
