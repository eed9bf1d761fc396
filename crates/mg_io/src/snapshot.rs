//! Snapshot loader: read a local JSON dispense snapshot, validate breed
//! references against the catalog, and return engine-ready collections.

#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use mg_core::catalog::{self, Tier};
use mg_core::entities::GivenMagnet;

use crate::{SnapshotError, SnapshotResult};

// ----------------------------- Wire-facing shape -----------------------------

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    order: RawOrder,
    client: RawClient,
    #[serde(default)]
    inventory: BTreeMap<String, u32>,
    #[serde(default)]
    owned: Vec<String>,
    /// Breeds currently offered by the promotion; absent means "everything".
    #[serde(default)]
    active: Option<Vec<String>>,
    /// Magnets already committed in the current session (validator input).
    #[serde(default)]
    given: Vec<RawGiven>,
}

#[derive(Debug, Deserialize)]
struct RawOrder {
    amount: u64,
    #[serde(default)]
    is_first_order: bool,
}

#[derive(Debug, Deserialize)]
struct RawClient {
    lifetime_spend: u64,
    /// Magnets dispensed to the client overall, for bonus-ladder progress.
    #[serde(default)]
    magnets_collected: u32,
}

#[derive(Debug, Deserialize)]
struct RawGiven {
    id: u64,
    breed: String,
    stars: u8,
}

// ----------------------------- Engine-ready view -----------------------------

/// A validated snapshot, ready for the engine's call signatures.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub order_amount: u64,
    pub is_first_order: bool,
    pub lifetime_spend: u64,
    pub magnets_collected: u32,
    pub inventory: BTreeMap<String, u32>,
    pub owned: BTreeSet<String>,
    pub active: Option<BTreeSet<String>>,
    pub given: Vec<GivenMagnet>,
}

impl Snapshot {
    /// Breed names already committed this session, for seeding the picker's
    /// exclusion set.
    pub fn given_breeds(&self) -> BTreeSet<String> {
        self.given.iter().map(|g| g.breed.clone()).collect()
    }
}

/// Read and validate a snapshot file.
pub fn load_snapshot(path: &Path) -> SnapshotResult<Snapshot> {
    let text = fs::read_to_string(path)?;
    parse_snapshot(&text)
}

/// Parse and validate a snapshot from JSON text.
pub fn parse_snapshot(text: &str) -> SnapshotResult<Snapshot> {
    let raw: RawSnapshot = serde_json::from_str(text)?;

    for name in raw.inventory.keys() {
        check_breed(name, "inventory")?;
    }
    for name in &raw.owned {
        check_breed(name, "owned")?;
    }
    if let Some(active) = &raw.active {
        for name in active {
            check_breed(name, "active")?;
        }
    }

    let mut given = Vec::with_capacity(raw.given.len());
    for g in raw.given {
        check_breed(&g.breed, "given")?;
        let tier = Tier::from_stars(g.stars).map_err(|_| SnapshotError::BadStars {
            breed: g.breed.clone(),
            stars: g.stars,
        })?;
        given.push(GivenMagnet { id: g.id, breed: g.breed, tier });
    }

    Ok(Snapshot {
        order_amount: raw.order.amount,
        is_first_order: raw.order.is_first_order,
        lifetime_spend: raw.client.lifetime_spend,
        magnets_collected: raw.client.magnets_collected,
        inventory: raw.inventory,
        owned: raw.owned.into_iter().collect(),
        active: raw.active.map(|a| a.into_iter().collect()),
        given,
    })
}

fn check_breed(name: &str, field: &'static str) -> SnapshotResult<()> {
    if catalog::find(name).is_some() {
        Ok(())
    } else {
        Err(SnapshotError::UnknownBreed { field, name: name.to_string() })
    }
}
