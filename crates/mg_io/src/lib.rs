//! mg_io — snapshot I/O for the magnet reward engine.
//!
//! The engine itself is pure and assumes well-formed inputs; this crate is
//! the caller-side boundary that makes inputs well-formed. It reads a JSON
//! "dispense snapshot" (order, client totals, inventory, ownership, optional
//! active filter, optional in-session given list), checks every breed name
//! against the static catalog, and converts the document into the
//! collections the engine consumes. No network I/O, no writing.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for snapshot loading.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Filesystem errors while reading the snapshot file.
    #[error("failed to read snapshot: {0}")]
    Read(#[from] std::io::Error),

    /// Malformed JSON or a shape mismatch against the snapshot schema.
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A breed name that does not exist in the catalog.
    #[error("unknown breed {name:?} in snapshot field `{field}`")]
    UnknownBreed { field: &'static str, name: String },

    /// A star count outside 1..=3 on a given magnet.
    #[error("invalid star count {stars} for given breed {breed:?} (expected 1..=3)")]
    BadStars { breed: String, stars: u8 },
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

pub mod snapshot;

pub use snapshot::{load_snapshot, parse_snapshot, Snapshot};
