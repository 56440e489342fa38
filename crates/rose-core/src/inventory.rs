//! # Inventory
//!
//! The ordered collection of validated items and the end-of-day update.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Vec<Item> ──► Inventory::new ──► validate every item (all-or-nothing) │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                          [(Category, Item), ...]  ◄── insert(item)      │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                 advance_day: item.state = next_state(category, state)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The category is resolved once on admission and kept next to the item, so
//! the daily update never compares names.

use tracing::{debug, trace};

use crate::error::{CoreError, CoreResult};
use crate::rules;
use crate::types::{Category, Item};
use crate::validation::{validate_item, ValidationPolicy};

/// An admitted item together with its resolved category.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stocked {
    category: Category,
    item: Item,
}

/// A shop's stock.
///
/// Every held item passed validation on the way in. Mutation needs
/// `&mut self`, so there is exactly one writer at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    entries: Vec<Stocked>,
    policy: ValidationPolicy,
}

impl Inventory {
    /// Builds an inventory with the default (strict) validation policy.
    ///
    /// Fails on the first invalid item; in that case nothing is admitted.
    pub fn new(items: impl IntoIterator<Item = Item>) -> CoreResult<Self> {
        Self::with_policy(items, ValidationPolicy::default())
    }

    /// Builds an inventory with an explicit validation policy.
    pub fn with_policy(
        items: impl IntoIterator<Item = Item>,
        policy: ValidationPolicy,
    ) -> CoreResult<Self> {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| admit(index, item, &policy))
            .collect::<CoreResult<Vec<_>>>()?;

        debug!(items = entries.len(), ?policy, "Inventory created");

        Ok(Inventory { entries, policy })
    }

    /// Validates and appends a single item.
    ///
    /// On failure the inventory is left untouched.
    pub fn insert(&mut self, item: Item) -> CoreResult<()> {
        let stocked = admit(self.entries.len(), item, &self.policy)?;
        self.entries.push(stocked);
        Ok(())
    }

    /// Applies one day of aging to every item, in insertion order.
    pub fn advance_day(&mut self) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let before = entry.item.state();
            let after = rules::next_state(entry.category, before);

            trace!(
                index,
                name = %entry.item.name,
                category = %entry.category,
                sell_in = after.sell_in,
                quality = after.quality,
                "Item aged"
            );

            entry.item.set_state(after);
        }

        debug!(items = self.entries.len(), "Day advanced");
    }

    /// Applies [`advance_day`](Self::advance_day) `days` times.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_day();
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Iterates over the items in insertion order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &Item> + '_ {
        self.entries.iter().map(|entry| &entry.item)
    }

    /// Iterates over `(category, item)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Category, &Item)> + '_ {
        self.entries.iter().map(|entry| (entry.category, &entry.item))
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.entries.get(index).map(|entry| &entry.item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the policy items are validated against.
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Consumes the inventory and hands the items back.
    pub fn into_items(self) -> Vec<Item> {
        self.entries.into_iter().map(|entry| entry.item).collect()
    }
}

fn admit(index: usize, item: Item, policy: &ValidationPolicy) -> CoreResult<Stocked> {
    let category =
        validate_item(&item, policy).map_err(|source| CoreError::InvalidItem { index, source })?;

    debug!(index, name = %item.name, %category, "Item admitted");

    Ok(Stocked { category, item })
}

// =============================================================================
// Unit Tests
// =============================================================================
