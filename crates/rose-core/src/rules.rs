//! # Day Transition Rules
//!
//! One pure function per [`Category`], each mapping today's
//! [`ItemState`] to tomorrow's.
//!
//! ## Rule Table
//! ```text
//! ┌──────────────┬──────────────────────────────────────┬─────────────────┐
//! │ Category     │ Quality delta (pre-decrement sell_in)│ Clamp           │
//! ├──────────────┼──────────────────────────────────────┼─────────────────┤
//! │ Legendary    │ none, sell_in frozen too             │ fixed at 80     │
//! │ Appreciating │ +1 if sell_in > 0 else +2            │ max 50          │
//! │ EventTicket  │ sell_in <= 0  → quality = 0          │ 0..=50          │
//! │              │ sell_in <= 5  → +3                   │                 │
//! │              │ sell_in <= 10 → +2                   │                 │
//! │              │ otherwise     → +1                   │                 │
//! │ Accelerated  │ -2 if sell_in > 0 else -4            │ min 0           │
//! │ Generic      │ -1 if sell_in > 0 else -2            │ min 0           │
//! └──────────────┴──────────────────────────────────────┴─────────────────┘
//! ```
//!
//! ## Order of Operations
//! 1. Compute the quality delta from the *current* `sell_in`, apply, clamp
//! 2. Decrement `sell_in` by one
//!
//! Legendary items skip both steps.

use crate::types::{Category, ItemState};

// =============================================================================
// Domain Constants
// =============================================================================

/// Lowest quality any item can have.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can have.
pub const MAX_QUALITY: i32 = 50;

/// The one and only quality of a legendary item.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Event tickets gain [`TICKET_SURGE_GAIN`] at or below this many days.
pub const TICKET_SURGE_DAYS: i32 = 5;

/// Event tickets gain [`TICKET_RAMP_GAIN`] at or below this many days.
pub const TICKET_RAMP_DAYS: i32 = 10;

/// Daily gain of an event ticket more than [`TICKET_RAMP_DAYS`] out.
pub const TICKET_BASE_GAIN: i32 = 1;

/// Daily gain of an event ticket within [`TICKET_RAMP_DAYS`].
pub const TICKET_RAMP_GAIN: i32 = 2;

/// Daily gain of an event ticket within [`TICKET_SURGE_DAYS`].
pub const TICKET_SURGE_GAIN: i32 = 3;

/// Daily quality change of a generic item before its sell-by date.
pub const GENERIC_DECAY: i32 = 1;

/// Daily quality change of an appreciating item before its sell-by date.
pub const APPRECIATION: i32 = 1;

/// Multiplier applied to the daily change once an item is past due.
pub const EXPIRED_FACTOR: i32 = 2;

/// Multiplier applied to the generic decay for accelerated items.
pub const ACCELERATED_FACTOR: i32 = 2;

// =============================================================================
// Dispatch
// =============================================================================

/// Computes the next-day state of an item of the given category.
///
/// ## Example
/// ```rust
/// use rose_core::rules::next_state;
/// use rose_core::{Category, ItemState};
///
/// let next = next_state(Category::EventTicket, ItemState::new(5, 35));
/// assert_eq!(next, ItemState::new(4, 38));
/// ```
pub fn next_state(category: Category, state: ItemState) -> ItemState {
    match category {
        Category::Legendary => legendary(state),
        Category::Appreciating => appreciating(state),
        Category::EventTicket => event_ticket(state),
        Category::Accelerated => accelerated(state),
        Category::Generic => generic(state),
    }
}

// =============================================================================
// Per-Category Rules
// =============================================================================

/// Legendary items never change.
#[inline]
pub fn legendary(state: ItemState) -> ItemState {
    state
}

/// Gains quality, twice as fast once past due.
pub fn appreciating(state: ItemState) -> ItemState {
    age(state, expiry_scaled(state.sell_in, APPRECIATION))
}

/// Tiered gain by days left, collapses to zero once the event has passed.
pub fn event_ticket(state: ItemState) -> ItemState {
    if is_past_due(state.sell_in) {
        return age(ItemState::new(state.sell_in, MIN_QUALITY), 0);
    }

    let gain = match state.sell_in {
        days if days <= TICKET_SURGE_DAYS => TICKET_SURGE_GAIN,
        days if days <= TICKET_RAMP_DAYS => TICKET_RAMP_GAIN,
        _ => TICKET_BASE_GAIN,
    };

    age(state, gain)
}

/// Same shape as [`generic`], at [`ACCELERATED_FACTOR`] times the rate.
pub fn accelerated(state: ItemState) -> ItemState {
    age(
        state,
        -expiry_scaled(state.sell_in, GENERIC_DECAY * ACCELERATED_FACTOR),
    )
}

/// Loses quality, twice as fast once past due.
pub fn generic(state: ItemState) -> ItemState {
    age(state, -expiry_scaled(state.sell_in, GENERIC_DECAY))
}

// =============================================================================
// Helpers
// =============================================================================

/// An item whose sell-in has reached zero is past due for today's update.
#[inline]
const fn is_past_due(sell_in: i32) -> bool {
    sell_in <= 0
}

#[inline]
const fn expiry_scaled(sell_in: i32, rate: i32) -> i32 {
    if is_past_due(sell_in) {
        rate * EXPIRED_FACTOR
    } else {
        rate
    }
}

/// Applies a quality delta with clamping, then ticks one day off.
///
/// `sell_in` saturates at `i32::MIN` instead of overflowing.
#[inline]
fn age(state: ItemState, delta: i32) -> ItemState {
    ItemState {
        sell_in: state.sell_in.saturating_sub(1),
        quality: (state.quality + delta).clamp(MIN_QUALITY, MAX_QUALITY),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn step(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
        let next = next_state(category, ItemState::new(sell_in, quality));
        (next.sell_in, next.quality)
    }

    #[test]
    fn test_generic() {
        assert_eq!(step(Category::Generic, 10, 20), (9, 19));
        assert_eq!(step(Category::Generic, 1, 20), (0, 19));
        assert_eq!(step(Category::Generic, 0, 10), (-1, 8));
        assert_eq!(step(Category::Generic, -5, 0), (-6, 0));
        assert_eq!(step(Category::Generic, -5, 1), (-6, 0));
    }

    #[test]
    fn test_appreciating() {
        assert_eq!(step(Category::Appreciating, 2, 0), (1, 1));
        assert_eq!(step(Category::Appreciating, 0, 2), (-1, 4));
        assert_eq!(step(Category::Appreciating, -24, 50), (-25, 50));
        assert_eq!(step(Category::Appreciating, -1, 49), (-2, 50));
        assert_eq!(step(Category::Appreciating, 5, 50), (4, 50));
    }

    #[test]
    fn test_legendary_is_frozen() {
        assert_eq!(step(Category::Legendary, 0, 80), (0, 80));
        assert_eq!(step(Category::Legendary, -1, 80), (-1, 80));
    }

    #[test]
    fn test_event_ticket_tiers() {
        assert_eq!(step(Category::EventTicket, 15, 20), (14, 21));
        assert_eq!(step(Category::EventTicket, 11, 20), (10, 21));
        assert_eq!(step(Category::EventTicket, 10, 25), (9, 27));
        assert_eq!(step(Category::EventTicket, 6, 25), (5, 27));
        assert_eq!(step(Category::EventTicket, 5, 35), (4, 38));
        assert_eq!(step(Category::EventTicket, 1, 35), (0, 38));
    }

    #[test]
    fn test_event_ticket_expiry() {
        assert_eq!(step(Category::EventTicket, 0, 50), (-1, 0));
        assert_eq!(step(Category::EventTicket, -1, 0), (-2, 0));
    }

    #[test]
    fn test_event_ticket_clamps_at_max() {
        assert_eq!(step(Category::EventTicket, 10, 49), (9, 50));
        assert_eq!(step(Category::EventTicket, 5, 48), (4, 50));
        assert_eq!(step(Category::EventTicket, 20, 50), (19, 50));
    }

    #[test]
    fn test_accelerated() {
        assert_eq!(step(Category::Accelerated, 3, 20), (2, 18));
        assert_eq!(step(Category::Accelerated, 0, 14), (-1, 10));
        assert_eq!(step(Category::Accelerated, -3, 2), (-4, 0));
        assert_eq!(step(Category::Accelerated, 3, 1), (2, 0));
    }

    #[test]
    fn test_sell_in_saturates_at_minimum() {
        assert_eq!(step(Category::Generic, i32::MIN, 10), (i32::MIN, 8));
        assert_eq!(step(Category::Appreciating, i32::MIN, 10), (i32::MIN, 12));
        assert_eq!(step(Category::EventTicket, i32::MIN, 10), (i32::MIN, 0));
        assert_eq!(step(Category::Accelerated, i32::MIN, 10), (i32::MIN, 6));
        assert_eq!(step(Category::Legendary, i32::MIN, 80), (i32::MIN, 80));
    }

    #[test]
    fn test_sell_in_at_maximum() {
        assert_eq!(step(Category::Generic, i32::MAX, 10), (i32::MAX - 1, 9));
        assert_eq!(step(Category::EventTicket, i32::MAX, 10), (i32::MAX - 1, 11));
    }

    #[test]
    fn test_accelerated_doubles_generic_delta() {
        for (sell_in, quality) in [(10, 30), (1, 30), (0, 30), (-7, 30)] {
            let generic_loss = quality - step(Category::Generic, sell_in, quality).1;
            let accelerated_loss = quality - step(Category::Accelerated, sell_in, quality).1;
            assert_eq!(accelerated_loss, generic_loss * 2);
        }
    }
}
