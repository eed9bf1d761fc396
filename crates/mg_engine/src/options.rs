//! Reward option computation: the promotion's rule table.
//!
//! Contract:
//! - First orders return no options; the welcome breed is granted outside
//!   this engine, unconditionally.
//! - A tier is *exhausted* when the client owns every active breed of that
//!   tier; exhausted tiers never appear in an emitted option.
//! - Elite slots additionally require the client's lifetime spend to reach
//!   [`ELITE_SPEND_THRESHOLD`], independent of the current order amount.
//! - Once the common and special tiers are both exhausted, the elite option
//!   is the only thing left and is offered in every amount band (still
//!   spend-gated); below the threshold nothing is offered.
//! - Deterministic: no RNG, no I/O. The validator recomputes this function
//!   verbatim, so any change here changes legality.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use mg_core::catalog::{self, Tier};
use mg_core::entities::RewardOption;

/// Lifetime spend (whole currency units) unlocking three-star rewards.
pub const ELITE_SPEND_THRESHOLD: u64 = 10_000;

/// True when every *active* breed of `tier` is already owned.
///
/// With an active filter, inactive breeds are invisible: a tier whose active
/// subset is empty counts as exhausted (nothing new can be dispensed from
/// it), while inactive breeds a client already owns stay validly owned.
pub(crate) fn tier_exhausted(
    tier: Tier,
    owned: &BTreeSet<String>,
    active: Option<&BTreeSet<String>>,
) -> bool {
    catalog::breeds_of_tier(tier)
        .filter(|b| active.map_or(true, |a| a.contains(b.name)))
        .all(|b| owned.contains(b.name))
}

/// Compute the set of legal reward options for one purchase.
///
/// Amount breakpoints (inclusive, whole currency units):
///
/// | order amount | options (each only if its tier is live)          |
/// |--------------|--------------------------------------------------|
/// | `< 1500`     | `1 × ★`                                          |
/// | `1500..2999` | `2 × ★`                                          |
/// | `3000..6999` | `1 × ★★` or `2 × ★`                              |
/// | `7000..9999` | `1 × ★★★`¹ or `2 × ★★` or `3 × ★`                |
/// | `>= 10000`   | `1 × ★★★`¹, else `1 × ★★`, else nothing          |
///
/// ¹ elite options also require the lifetime-spend threshold.
pub fn calc_recommended_options(
    order_amount: u64,
    is_first_order: bool,
    lifetime_spend: u64,
    owned: &BTreeSet<String>,
    active: Option<&BTreeSet<String>>,
) -> Vec<RewardOption> {
    if is_first_order {
        return Vec::new();
    }

    let live_common = !tier_exhausted(Tier::Common, owned, active);
    let live_special = !tier_exhausted(Tier::Special, owned, active);
    let live_elite = !tier_exhausted(Tier::Elite, owned, active);
    if !live_common && !live_special && !live_elite {
        // Client owns everything on offer.
        return Vec::new();
    }

    let can_have_elite = lifetime_spend >= ELITE_SPEND_THRESHOLD;
    let mut out: Vec<RewardOption> = Vec::new();

    // Commons and specials fully collected: only the elite tier is left,
    // and it is offered regardless of the amount band once unlocked.
    if !live_common && !live_special {
        if can_have_elite {
            out.push(RewardOption::uniform(Tier::Elite, 1));
        }
        return out;
    }

    match order_amount {
        0..=1499 => {
            if live_common {
                out.push(RewardOption::uniform(Tier::Common, 1));
            }
        }
        1500..=2999 => {
            if live_common {
                out.push(RewardOption::uniform(Tier::Common, 2));
            }
        }
        3000..=6999 => {
            if live_special {
                out.push(RewardOption::uniform(Tier::Special, 1));
            }
            if live_common {
                out.push(RewardOption::uniform(Tier::Common, 2));
            }
        }
        7000..=9999 => {
            if can_have_elite && live_elite {
                out.push(RewardOption::uniform(Tier::Elite, 1));
            }
            if live_special {
                out.push(RewardOption::uniform(Tier::Special, 2));
            }
            if live_common {
                out.push(RewardOption::uniform(Tier::Common, 3));
            }
        }
        _ => {
            // >= 10 000: single guaranteed slot, elite when unlocked,
            // substituted by a special otherwise.
            if can_have_elite && live_elite {
                out.push(RewardOption::uniform(Tier::Elite, 1));
            } else if live_special {
                out.push(RewardOption::uniform(Tier::Special, 1));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use mg_core::catalog::CATALOG;

    fn owned_of_tiers(tiers: &[Tier]) -> BTreeSet<String> {
        CATALOG
            .iter()
            .filter(|b| tiers.contains(&b.tier))
            .map(|b| b.name.to_string())
            .collect()
    }

    fn tier_multisets(opts: &[RewardOption]) -> Vec<Vec<Tier>> {
        opts.iter().map(|o| o.sorted_tiers()).collect()
    }

    #[test]
    fn first_order_yields_nothing() {
        let opts = calc_recommended_options(5000, true, 5000, &BTreeSet::new(), None);
        assert!(opts.is_empty());
    }

    #[test]
    fn below_1500_single_common() {
        let opts = calc_recommended_options(999, false, 999, &BTreeSet::new(), None);
        assert_eq!(tier_multisets(&opts), alloc::vec![alloc::vec![Tier::Common]]);
    }

    #[test]
    fn mid_band_two_commons() {
        let opts = calc_recommended_options(2000, false, 2000, &BTreeSet::new(), None);
        assert_eq!(
            tier_multisets(&opts),
            alloc::vec![alloc::vec![Tier::Common, Tier::Common]]
        );
    }

    #[test]
    fn band_3000_offers_special_or_two_commons() {
        let opts = calc_recommended_options(4000, false, 4000, &BTreeSet::new(), None);
        let sets = tier_multisets(&opts);
        assert_eq!(sets.len(), 2);
        assert!(sets.contains(&alloc::vec![Tier::Special]));
        assert!(sets.contains(&alloc::vec![Tier::Common, Tier::Common]));
    }

    #[test]
    fn band_7000_without_threshold_has_no_elite() {
        let opts = calc_recommended_options(7000, false, 5000, &BTreeSet::new(), None);
        let sets = tier_multisets(&opts);
        assert_eq!(sets.len(), 2);
        assert!(sets.contains(&alloc::vec![Tier::Special, Tier::Special]));
        assert!(sets.contains(&alloc::vec![Tier::Common, Tier::Common, Tier::Common]));
    }

    #[test]
    fn band_7000_with_threshold_adds_elite() {
        let opts = calc_recommended_options(7000, false, 15000, &BTreeSet::new(), None);
        assert_eq!(opts.len(), 3);
        assert!(tier_multisets(&opts).contains(&alloc::vec![Tier::Elite]));
    }

    #[test]
    fn band_10000_guaranteed_elite_or_substitute() {
        let with = calc_recommended_options(12000, false, 15000, &BTreeSet::new(), None);
        assert_eq!(tier_multisets(&with), alloc::vec![alloc::vec![Tier::Elite]]);

        let without = calc_recommended_options(12000, false, 5000, &BTreeSet::new(), None);
        assert_eq!(tier_multisets(&without), alloc::vec![alloc::vec![Tier::Special]]);
    }

    #[test]
    fn exhausted_common_tier_drops_common_options() {
        let owned = owned_of_tiers(&[Tier::Common]);
        for amount in [999u64, 2000, 4000, 7000, 12000] {
            let opts = calc_recommended_options(amount, false, 99_999, &owned, None);
            for o in &opts {
                assert!(o.slots.iter().all(|s| s.tier != Tier::Common), "amount {amount}");
            }
        }
    }

    #[test]
    fn non_elite_tiers_collected_promote_to_elite_in_every_band() {
        let owned = owned_of_tiers(&[Tier::Common, Tier::Special]);
        for amount in [999u64, 2000, 4000, 7000, 12000] {
            let opts = calc_recommended_options(amount, false, 15_000, &owned, None);
            assert_eq!(
                tier_multisets(&opts),
                alloc::vec![alloc::vec![Tier::Elite]],
                "amount {amount}"
            );
        }
    }

    #[test]
    fn non_elite_tiers_collected_below_threshold_yield_nothing() {
        let owned = owned_of_tiers(&[Tier::Common, Tier::Special]);
        for amount in [999u64, 4000, 12000] {
            let opts = calc_recommended_options(amount, false, 4000, &owned, None);
            assert!(opts.is_empty(), "amount {amount}");
        }
    }

    #[test]
    fn fully_collected_catalog_yields_nothing() {
        let owned = owned_of_tiers(&[Tier::Common, Tier::Special, Tier::Elite]);
        let opts = calc_recommended_options(4000, false, 99_999, &owned, None);
        assert!(opts.is_empty());
    }

    #[test]
    fn active_filter_narrows_exhaustion() {
        // Active set contains a single common breed; owning it exhausts the
        // tier even though the full catalog has more commons.
        let mut active: BTreeSet<String> = BTreeSet::new();
        active.insert("Oak".to_string());
        active.insert("Walnut".to_string());
        let mut owned: BTreeSet<String> = BTreeSet::new();
        owned.insert("Oak".to_string());

        let opts = calc_recommended_options(4000, false, 4000, &owned, Some(&active));
        let sets = tier_multisets(&opts);
        assert_eq!(sets, alloc::vec![alloc::vec![Tier::Special]]);
    }

    #[test]
    fn active_filter_empty_tier_counts_as_exhausted() {
        // No elite breed is active → elite never offered even past threshold.
        let active: BTreeSet<String> = CATALOG
            .iter()
            .filter(|b| b.tier != Tier::Elite)
            .map(|b| b.name.to_string())
            .collect();
        let opts = calc_recommended_options(12000, false, 15000, &BTreeSet::new(), Some(&active));
        assert_eq!(tier_multisets(&opts), alloc::vec![alloc::vec![Tier::Special]]);
    }

    #[test]
    fn zero_amount_is_the_lowest_band() {
        let opts = calc_recommended_options(0, false, 0, &BTreeSet::new(), None);
        assert_eq!(tier_multisets(&opts), alloc::vec![alloc::vec![Tier::Common]]);
    }
}
