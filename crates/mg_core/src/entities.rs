//! Request-scoped value types exchanged between the engine and its callers.
//!
//! Everything here is ephemeral: computed fresh per call, never persisted
//! inside the engine. Stock decrement and ownership recording happen in the
//! caller's storage layer after a real dispensation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::{Category, Tier};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One unit of reward within an option, tagged with the required tier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewardSlot {
    pub tier: Tier,
}

/// One complete, internally legal combination of slots for a purchase.
/// Several options may be legal at once; staff (or the weighted
/// recommender) choose among them.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RewardOption {
    /// Human-readable label, e.g. "2 × ★★". Shown to staff and echoed in
    /// violation messages.
    pub label: String,
    pub slots: Vec<RewardSlot>,
}

impl RewardOption {
    /// Build an option of `count` slots, all of the same tier.
    /// (The rule table only ever emits uniform options.)
    pub fn uniform(tier: Tier, count: usize) -> Self {
        RewardOption {
            label: alloc::format!("{count} × {}", tier.label()),
            slots: (0..count).map(|_| RewardSlot { tier }).collect(),
        }
    }

    /// Sorted tier multiset of the slots, for legality comparison.
    pub fn sorted_tiers(&self) -> Vec<Tier> {
        let mut tiers: Vec<Tier> = self.slots.iter().map(|s| s.tier).collect();
        tiers.sort();
        tiers
    }
}

/// A concrete catalog breed chosen to fill a slot, annotated with its live
/// stock at selection time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PickedBreed {
    pub breed: &'static str,
    pub tier: Tier,
    pub category: Category,
    pub stock: u32,
}

/// A magnet a staff member has already committed to dispense in the current
/// session. The validator treats these as decided input.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GivenMagnet {
    pub id: u64,
    pub breed: String,
    pub tier: Tier,
}
