//! Bonus milestone table: collection-size rewards layered on top of the
//! per-order dispensation rules. The engine never grants these; callers use
//! the lookups to render "N breeds / N magnets to your next bonus" progress.

#[cfg(feature = "serde")]
use serde::Serialize;

/// What a milestone counts: dispensed magnets overall, or unique breeds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MilestoneKind {
    Magnets,
    Breeds,
}

/// One milestone of the bonus ladder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Milestone {
    pub count: u32,
    pub kind: MilestoneKind,
    pub reward: &'static str,
}

/// The bonus ladder, ascending by count within each kind.
pub const MILESTONES: &[Milestone] = &[
    Milestone { count: 5, kind: MilestoneKind::Magnets, reward: "Titebrush glue brush" },
    Milestone { count: 10, kind: MilestoneKind::Breeds, reward: "Titebond III 473 ml" },
    Milestone { count: 30, kind: MilestoneKind::Breeds, reward: "Titebond III 946 ml" },
    Milestone { count: 50, kind: MilestoneKind::Breeds, reward: "Titebond III 3.785 l" },
];

/// Next unreached breed-count milestone for a client owning `unique_breeds`
/// distinct breeds, together with how many more breeds it takes.
/// `None` once the ladder is exhausted.
pub fn next_breed_milestone(unique_breeds: u32) -> Option<(&'static Milestone, u32)> {
    MILESTONES
        .iter()
        .filter(|m| m.kind == MilestoneKind::Breeds)
        .find(|m| unique_breeds < m.count)
        .map(|m| (m, m.count - unique_breeds))
}

/// Next unreached magnet-count milestone for a client holding
/// `total_magnets` dispensed magnets overall, with how many more it takes.
pub fn next_magnet_milestone(total_magnets: u32) -> Option<(&'static Milestone, u32)> {
    MILESTONES
        .iter()
        .filter(|m| m.kind == MilestoneKind::Magnets)
        .find(|m| total_magnets < m.count)
        .map(|m| (m, m.count - total_magnets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_magnet_milestone_is_five() {
        let (m, remaining) = next_magnet_milestone(2).unwrap();
        assert_eq!(m.count, 5);
        assert_eq!(m.kind, MilestoneKind::Magnets);
        assert_eq!(remaining, 3);
    }

    #[test]
    fn magnet_ladder_exhausted_at_five() {
        assert!(next_magnet_milestone(5).is_none());
        assert!(next_magnet_milestone(42).is_none());
    }

    #[test]
    fn first_breed_milestone_is_ten() {
        let (m, remaining) = next_breed_milestone(0).unwrap();
        assert_eq!(m.count, 10);
        assert_eq!(remaining, 10);
    }

    #[test]
    fn mid_ladder() {
        let (m, remaining) = next_breed_milestone(12).unwrap();
        assert_eq!(m.count, 30);
        assert_eq!(remaining, 18);
    }

    #[test]
    fn ladder_exhausted() {
        assert!(next_breed_milestone(50).is_none());
        assert!(next_breed_milestone(99).is_none());
    }

    #[test]
    fn boundary_counts_as_reached() {
        // Exactly at a milestone → the next one is offered.
        let (m, _) = next_breed_milestone(10).unwrap();
        assert_eq!(m.count, 30);
    }
}
