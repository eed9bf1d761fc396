//! Advisory weighting over reward options.
//!
//! Picks which of the simultaneously legal options the UI should highlight
//! as "recommended". Expensive rewards are suggested less often, biasing
//! stock turnover toward the cheaper tiers. Purely advisory; legality is
//! decided by the option computation alone.

use mg_core::entities::RewardOption;
use mg_core::rng::PickRng;

/// Sample an option index proportionally to the recommendation weight of
/// each option's **maximum** slot tier (★ → 6, ★★ → 3, ★★★ → 1).
///
/// Returns 0 immediately for zero or one options.
pub fn pick_weighted_option_index(options: &[RewardOption], rng: &mut PickRng) -> usize {
    if options.len() <= 1 {
        return 0;
    }
    let weights: alloc::vec::Vec<u64> = options
        .iter()
        .map(|o| {
            o.slots
                .iter()
                .map(|s| s.tier)
                .max()
                .map_or(0, |t| t.recommend_weight())
        })
        .collect();
    rng.weighted_index(&weights).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_core::catalog::Tier;

    #[test]
    fn zero_or_one_option_short_circuits() {
        let mut rng = PickRng::from_seed_u64(1);
        assert_eq!(pick_weighted_option_index(&[], &mut rng), 0);
        let one = [RewardOption::uniform(Tier::Elite, 1)];
        assert_eq!(pick_weighted_option_index(&one, &mut rng), 0);
    }

    #[test]
    fn cheaper_option_is_recommended_more_often() {
        // [1×★★★, 3×★] → weights 1 vs 6; the common option should dominate.
        let options = [
            RewardOption::uniform(Tier::Elite, 1),
            RewardOption::uniform(Tier::Common, 3),
        ];
        let mut rng = PickRng::from_seed_u64(2);
        let mut hits = [0u32; 2];
        for _ in 0..200 {
            hits[pick_weighted_option_index(&options, &mut rng)] += 1;
        }
        assert!(hits[1] > hits[0], "common {} vs elite {}", hits[1], hits[0]);
        // With weight 1 in 7 the elite option still surfaces occasionally.
        assert!(hits[0] > 0);
    }

    #[test]
    fn index_is_always_in_range() {
        let options = [
            RewardOption::uniform(Tier::Elite, 1),
            RewardOption::uniform(Tier::Special, 2),
            RewardOption::uniform(Tier::Common, 3),
        ];
        let mut rng = PickRng::from_seed_u64(3);
        for _ in 0..100 {
            assert!(pick_weighted_option_index(&options, &mut rng) < options.len());
        }
    }
}
