// crates/mg_cli/src/args.rs
//
// Deterministic, offline CLI argument surface.
// - One input: the snapshot JSON path.
// - Seed override accepts decimal u64 or 0x-hex (≤16 nybbles); identical
//   seeds reproduce identical picks, so "reshuffle" is just a new seed.
// - --validate-only short-circuits to the verdict and maps a violation to
//   its own exit code for scripting.

use clap::Parser;
use std::path::PathBuf;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mg",
    disable_help_subcommand = true,
    about = "Offline, deterministic recommender/validator for the magnet loyalty rules"
)]
pub struct Args {
    /// Path to the dispense snapshot JSON (order, client, inventory, owned,
    /// optional active filter, optional given list).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Pick RNG seed. Accepts decimal u64 or 0x-hex (≤16 hex digits).
    /// Defaults to 0.
    #[arg(long, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Only run the validator over the snapshot's `given` list; a rule
    /// violation exits with the RULES code.
    #[arg(long)]
    pub validate_only: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Suppress non-essential stderr notes.
    #[arg(long)]
    pub quiet: bool,
}

/// Parse a seed as decimal u64 or 0x-prefixed lowercase/uppercase hex.
fn parse_seed(s: &str) -> Result<u64, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.is_empty() || hex.len() > 16 {
            return Err("hex seed must have 1..=16 digits".into());
        }
        u64::from_str_radix(hex, 16).map_err(|e| format!("bad hex seed: {e}"))
    } else {
        s.parse::<u64>().map_err(|e| format!("bad seed: {e}"))
    }
}

pub fn parse() -> Args {
    Args::parse()
}
