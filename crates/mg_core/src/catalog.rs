//! Static wood-breed catalog: the promotion's reference data.
//!
//! The catalog is a module-level constant. The engine only ever reads it;
//! live stock, ownership, and the active-promotion subset arrive per call
//! from the caller. Entries are grouped by tier, common first, and iteration
//! order is stable (it doubles as the deterministic scan order for picks).

use crate::errors::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reward value class of a breed. Drives eligibility and weighting.
///
/// Ordering follows star count: `Common < Special < Elite`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tier {
    /// One star. The bulk of the catalog.
    Common,
    /// Two stars.
    Special,
    /// Three stars. Gated by the lifetime-spend threshold.
    Elite,
}

impl Tier {
    /// Star count, 1..=3.
    #[inline]
    pub fn stars(self) -> u8 {
        match self {
            Tier::Common => 1,
            Tier::Special => 2,
            Tier::Elite => 3,
        }
    }

    /// Parse a star count coming from external input.
    pub fn from_stars(stars: u8) -> Result<Self, CoreError> {
        match stars {
            1 => Ok(Tier::Common),
            2 => Ok(Tier::Special),
            3 => Ok(Tier::Elite),
            n => Err(CoreError::BadStars(n)),
        }
    }

    /// Display label used in option labels and violation messages.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Common => "★",
            Tier::Special => "★★",
            Tier::Elite => "★★★",
        }
    }

    /// Recommendation weight: cheaper rewards are suggested more often to
    /// bias stock turnover toward the plentiful tiers.
    #[inline]
    pub fn recommend_weight(self) -> u64 {
        match self {
            Tier::Common => 6,
            Tier::Special => 3,
            Tier::Elite => 1,
        }
    }
}

/// Merchandising category of a breed (display only; no rule reads it).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Classic,
    Premium,
    Exotic,
}

/// One catalog entry. Names are unique across the whole table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Breed {
    pub name: &'static str,
    pub tier: Tier,
    pub category: Category,
}

const fn breed(name: &'static str, tier: Tier, category: Category) -> Breed {
    Breed { name, tier, category }
}

/// Breed granted unconditionally on a client's first order, outside the
/// rule engine (the engine returns no options for first orders).
pub const WELCOME_BREED: &str = "Padauk";

/// Full promotion catalog. 60 entries: 32 common, 16 special, 12 elite.
pub const CATALOG: &[Breed] = &[
    // ---- Common (1★) ----
    breed("Oak", Tier::Common, Category::Classic),
    breed("Ash", Tier::Common, Category::Classic),
    breed("Beech", Tier::Common, Category::Classic),
    breed("Maple", Tier::Common, Category::Classic),
    breed("Birch", Tier::Common, Category::Classic),
    breed("Alder", Tier::Common, Category::Classic),
    breed("Linden", Tier::Common, Category::Classic),
    breed("Pine", Tier::Common, Category::Classic),
    breed("Hornbeam", Tier::Common, Category::Classic),
    breed("Aspen", Tier::Common, Category::Classic),
    breed("Poplar", Tier::Common, Category::Classic),
    breed("Elm", Tier::Common, Category::Classic),
    breed("Chestnut", Tier::Common, Category::Classic),
    breed("Larch", Tier::Common, Category::Classic),
    breed("Spruce", Tier::Common, Category::Classic),
    breed("Fir", Tier::Common, Category::Classic),
    breed("Willow", Tier::Common, Category::Classic),
    breed("Rowan", Tier::Common, Category::Classic),
    breed("Sycamore", Tier::Common, Category::Classic),
    breed("Cypress", Tier::Common, Category::Classic),
    breed("Acacia", Tier::Common, Category::Classic),
    breed("Apple", Tier::Common, Category::Classic),
    breed("Pear", Tier::Common, Category::Classic),
    breed("Plum", Tier::Common, Category::Classic),
    breed("Juniper", Tier::Common, Category::Classic),
    breed("Hazel", Tier::Common, Category::Classic),
    breed("Mulberry", Tier::Common, Category::Classic),
    breed("Hackberry", Tier::Common, Category::Classic),
    breed("Catalpa", Tier::Common, Category::Classic),
    breed("Magnolia", Tier::Common, Category::Classic),
    breed("Ailanthus", Tier::Common, Category::Classic),
    breed("Paulownia", Tier::Common, Category::Classic),
    // ---- Special (2★) ----
    breed("Padauk", Tier::Special, Category::Exotic),
    breed("Walnut", Tier::Special, Category::Premium),
    breed("Cherry", Tier::Special, Category::Premium),
    breed("Zebrano", Tier::Special, Category::Exotic),
    breed("Iroko", Tier::Special, Category::Exotic),
    breed("Merbau", Tier::Special, Category::Exotic),
    breed("Cedar", Tier::Special, Category::Premium),
    breed("Yew", Tier::Special, Category::Premium),
    breed("Olive", Tier::Special, Category::Premium),
    breed("Sapele", Tier::Special, Category::Exotic),
    breed("Ovangkol", Tier::Special, Category::Exotic),
    breed("Jatoba", Tier::Special, Category::Exotic),
    breed("Black Locust", Tier::Special, Category::Premium),
    breed("Bog Oak", Tier::Special, Category::Premium),
    breed("Karelian Birch", Tier::Special, Category::Premium),
    breed("Movingui", Tier::Special, Category::Exotic),
    // ---- Elite (3★) ----
    breed("Wenge", Tier::Elite, Category::Exotic),
    breed("Teak", Tier::Elite, Category::Exotic),
    breed("Mahogany", Tier::Elite, Category::Exotic),
    breed("Rosewood", Tier::Elite, Category::Exotic),
    breed("Purpleheart", Tier::Elite, Category::Exotic),
    breed("Bubinga", Tier::Elite, Category::Exotic),
    breed("Ebony", Tier::Elite, Category::Exotic),
    breed("Ziricote", Tier::Elite, Category::Exotic),
    breed("Cocobolo", Tier::Elite, Category::Exotic),
    breed("Snakewood", Tier::Elite, Category::Exotic),
    breed("Pink Ivory", Tier::Elite, Category::Exotic),
    breed("Lignum Vitae", Tier::Elite, Category::Exotic),
];

/// Look up a breed by exact name.
pub fn find(name: &str) -> Option<&'static Breed> {
    CATALOG.iter().find(|b| b.name == name)
}

/// Iterate the catalog entries of one tier, in catalog order.
pub fn breeds_of_tier(tier: Tier) -> impl Iterator<Item = &'static Breed> {
    CATALOG.iter().filter(move |b| b.tier == tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<&str> = CATALOG.iter().map(|b| b.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn every_tier_is_populated() {
        for tier in [Tier::Common, Tier::Special, Tier::Elite] {
            assert!(breeds_of_tier(tier).next().is_some(), "{tier:?} empty");
        }
    }

    #[test]
    fn welcome_breed_is_a_special_catalog_entry() {
        let b = find(WELCOME_BREED).expect("welcome breed must be in catalog");
        assert_eq!(b.tier, Tier::Special);
    }

    #[test]
    fn stars_round_trip() {
        for tier in [Tier::Common, Tier::Special, Tier::Elite] {
            assert_eq!(Tier::from_stars(tier.stars()), Ok(tier));
        }
        assert!(Tier::from_stars(0).is_err());
        assert!(Tier::from_stars(4).is_err());
    }

    #[test]
    fn tier_order_follows_stars() {
        assert!(Tier::Common < Tier::Special && Tier::Special < Tier::Elite);
    }
}
