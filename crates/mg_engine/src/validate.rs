//! Validation of a manually chosen dispensation.
//!
//! Contract:
//! - Recomputes [`calc_recommended_options`] with the caller's inputs and
//!   accepts the dispensation iff its sorted tier multiset matches one of
//!   the legal options (plus the elite-spend gate and count bounds).
//! - "Valid" is `None`; a violation is a human-readable message meant for
//!   direct display to staff, never machine-parsed.
//! - First orders and empty dispensations are never violations. An empty
//!   option set (client owns everything on offer) is also accepted: a
//!   manual courtesy override in that state is out of scope here.
//! - Pure and side-effect-free; safe to call speculatively before commit.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use mg_core::catalog::Tier;
use mg_core::entities::GivenMagnet;

use crate::options::{calc_recommended_options, ELITE_SPEND_THRESHOLD};

/// Check `given` against the rule table. `None` means no objection.
pub fn validate_given(
    given: &[GivenMagnet],
    order_amount: u64,
    is_first_order: bool,
    lifetime_spend: u64,
    owned: &BTreeSet<String>,
    active: Option<&BTreeSet<String>>,
) -> Option<String> {
    if is_first_order || given.is_empty() {
        return None;
    }

    let options = calc_recommended_options(order_amount, false, lifetime_spend, owned, active);
    if options.is_empty() {
        return None;
    }

    // Elite gate first: independent of the order amount and of whichever
    // option the count/combination checks would match.
    if lifetime_spend < ELITE_SPEND_THRESHOLD && given.iter().any(|g| g.tier == Tier::Elite) {
        return Some(format!(
            "Three-star magnets unlock at a total client spend of 10 000; \
             this client's total is {lifetime_spend}."
        ));
    }

    let min_allowed = options.iter().map(|o| o.slots.len()).min().unwrap_or(0);
    let max_allowed = options.iter().map(|o| o.slots.len()).max().unwrap_or(0);
    if given.len() < min_allowed {
        return Some(format!(
            "Too few magnets for this order: at least {min_allowed} required, {} given.",
            given.len()
        ));
    }
    if given.len() > max_allowed {
        return Some(format!(
            "Too many magnets for this order: at most {max_allowed} allowed, {} given.",
            given.len()
        ));
    }

    let mut given_tiers: Vec<Tier> = given.iter().map(|g| g.tier).collect();
    given_tiers.sort();
    if options.iter().any(|o| o.sorted_tiers() == given_tiers) {
        return None;
    }

    let allowed: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    Some(format!(
        "This combination is not allowed for the order; allowed: {}.",
        allowed.join(" / ")
    ))
}
