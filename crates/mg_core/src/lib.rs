//! mg_core — Core types, breed catalog, milestones, and deterministic RNG.
//!
//! This crate is **I/O-free**. It defines the stable types/APIs used across
//! the engine (`mg_engine`, `mg_io`, `mg_cli`).
//!
//! - Reward tiers: `Tier` (one/two/three stars) with recommendation weights
//! - Static catalog: `catalog::CATALOG`, the promotion's wood-breed table
//! - Value types: `RewardSlot`, `RewardOption`, `PickedBreed`, `GivenMagnet`
//! - Bonus milestone table with breed- and magnet-count lookups
//! - Seedable RNG (ChaCha20) for **picks only** — no OS entropy anywhere
//!
//! Serialization derives are gated behind the `serde` feature.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod catalog;
pub mod entities;
pub mod milestones;
pub mod rng;

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// Star count outside 1..=3.
        BadStars(u8),
        /// Breed name absent from the catalog.
        UnknownBreed,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::BadStars(n) => write!(f, "invalid star count: {n} (expected 1..=3)"),
                CoreError::UnknownBreed => write!(f, "unknown breed"),
            }
        }
    }
}

pub use catalog::{Breed, Category, Tier, CATALOG, WELCOME_BREED};
pub use entities::{GivenMagnet, PickedBreed, RewardOption, RewardSlot};
pub use rng::PickRng;
