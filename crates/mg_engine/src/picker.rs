//! Concrete breed selection for an option's slots.
//!
//! Contract:
//! - Per slot, candidates are catalog breeds of the slot tier minus owned,
//!   minus already-picked (accumulated across slots of the same call),
//!   minus inactive (when a filter is supplied), minus zero stock.
//! - Selection is weighted toward higher stock but never deterministic:
//!   each candidate gets `stock·1000 + noise` with noise uniform in
//!   `[0, stock·600 + 2000]`, the top five by weight are kept, and the
//!   final index is sampled proportionally to weight. The constants are
//!   tunable; the hard requirements are "higher stock ⇒ higher chance" and
//!   "zero stock ⇒ never picked".
//! - A slot with no candidates yields `None`; picking never fails or blocks.
//!
//! Determinism: identical inputs and an identically seeded [`PickRng`]
//! reproduce the same picks; candidate scan order is catalog order.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use mg_core::catalog::{self, Breed, Tier};
use mg_core::entities::{PickedBreed, RewardSlot};
use mg_core::rng::PickRng;

/// Weight resolution: stock is scaled to thousandths so integer noise can
/// express the fractional bias of the original formula.
const STOCK_SCALE: u64 = 1000;

/// Candidates kept after weighting, before the proportional draw. Caps the
/// advantage of a single long-tail breed with huge stock while still giving
/// low-stock breeds a nonzero chance.
const TOP_CANDIDATES: usize = 5;

/// Fill each slot of an option with a concrete in-stock breed.
///
/// Chosen names are inserted into `already_picked`, so two slots of the
/// same call (or a later call reusing the set) never repeat a breed.
/// Entries are `None` where no candidate exists; callers render those as
/// "out of stock" and allow a manual override.
pub fn pick_breeds_for_option(
    slots: &[RewardSlot],
    owned: &BTreeSet<String>,
    already_picked: &mut BTreeSet<String>,
    inventory: &BTreeMap<String, u32>,
    active: Option<&BTreeSet<String>>,
    rng: &mut PickRng,
) -> Vec<Option<PickedBreed>> {
    slots
        .iter()
        .map(|slot| {
            let pick = pick_one(slot.tier, owned, already_picked, inventory, active, rng);
            if let Some(p) = &pick {
                already_picked.insert(p.breed.to_string());
            }
            pick
        })
        .collect()
}

fn pick_one(
    tier: Tier,
    owned: &BTreeSet<String>,
    already_picked: &BTreeSet<String>,
    inventory: &BTreeMap<String, u32>,
    active: Option<&BTreeSet<String>>,
    rng: &mut PickRng,
) -> Option<PickedBreed> {
    // Weigh every live candidate, scanning in catalog order.
    let mut weighted: Vec<(&'static Breed, u32, u64)> = Vec::new();
    for b in catalog::breeds_of_tier(tier) {
        if owned.contains(b.name) || already_picked.contains(b.name) {
            continue;
        }
        if let Some(a) = active {
            if !a.contains(b.name) {
                continue;
            }
        }
        let stock = inventory.get(b.name).copied().unwrap_or(0);
        if stock == 0 {
            continue;
        }
        let noise_span = (stock as u64) * 600 + 2000;
        // noise_span + 1 > 0, so below() cannot return None here.
        let noise = rng.below(noise_span + 1).unwrap_or(0);
        weighted.push((b, stock, (stock as u64) * STOCK_SCALE + noise));
    }
    if weighted.is_empty() {
        return None;
    }

    // Keep the heaviest few; stable sort preserves catalog order on ties.
    weighted.sort_by(|a, b| b.2.cmp(&a.2));
    weighted.truncate(TOP_CANDIDATES);

    let weights: Vec<u64> = weighted.iter().map(|&(_, _, w)| w).collect();
    // All kept weights are > 0 (stock >= 1), so the draw cannot fail.
    let ix = rng.weighted_index(&weights)?;
    let (breed, stock, _) = weighted[ix];
    Some(PickedBreed {
        breed: breed.name,
        tier: breed.tier,
        category: breed.category,
        stock,
    })
}
