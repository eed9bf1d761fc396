//! mg_engine — pure decision logic for the magnet loyalty promotion.
//!
//! Four entry points over request-scoped inputs (inventory snapshot,
//! ownership set, order amount, lifetime spend):
//!
//! - [`calc_recommended_options`] — the legal reward options for a purchase
//! - [`pick_breeds_for_option`] — concrete in-stock breeds for an option's
//!   slots (weighted toward higher stock, seeded RNG)
//! - [`pick_weighted_option_index`] — which option to highlight in the UI
//! - [`validate_given`] — check a manually chosen dispensation against the
//!   same rule table that generates options
//!
//! The validator's notion of "legal" is exactly the option set produced by
//! [`calc_recommended_options`] for the same inputs; the two must never
//! diverge. No I/O, no shared state; randomness only through
//! [`mg_core::PickRng`].

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod options;
pub mod picker;
pub mod validate;
pub mod weighting;

pub use options::{calc_recommended_options, ELITE_SPEND_THRESHOLD};
pub use picker::pick_breeds_for_option;
pub use validate::validate_given;
pub use weighting::pick_weighted_option_index;
