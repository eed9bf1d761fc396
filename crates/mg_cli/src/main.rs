// crates/mg_cli/src/main.rs
//
// Wiring: exit codes, typed error mapping, snapshot load, engine calls,
// JSON emission. The binary is offline and deterministic: all randomness
// flows through the seeded pick RNG, so a fixed snapshot + seed reproduces
// the output byte for byte.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad arguments or a snapshot that fails shape/reference checks.
    pub const VALIDATION: i32 = 2;
    /// Filesystem errors.
    pub const IO: i32 = 4;
    /// A rule violation surfaced in --validate-only mode.
    pub const RULES: i32 = 5;
}

use std::collections::BTreeSet;
use std::process::ExitCode;

use serde::Serialize;

use mg_core::catalog::WELCOME_BREED;
use mg_core::entities::{PickedBreed, RewardOption};
use mg_core::milestones::{next_breed_milestone, next_magnet_milestone};
use mg_core::rng::PickRng;
use mg_engine::{
    calc_recommended_options, pick_breeds_for_option, pick_weighted_option_index, validate_given,
};
use mg_io::{load_snapshot, Snapshot, SnapshotError};

use args::Args;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Io(String),
    Rules(String),
}

impl From<SnapshotError> for MainError {
    fn from(e: SnapshotError) -> Self {
        match e {
            SnapshotError::Read(_) => MainError::Io(e.to_string()),
            SnapshotError::Json(_)
            | SnapshotError::UnknownBreed { .. }
            | SnapshotError::BadStars { .. } => MainError::Validation(e.to_string()),
        }
    }
}

fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
        MainError::Rules(_) => exitcodes::RULES,
    }
}

// ----------------------------- Output document -----------------------------

#[derive(Debug, Serialize)]
struct MilestoneProgress {
    reward: &'static str,
    target: u32,
    remaining: u32,
}

#[derive(Debug, Serialize)]
struct RunOutput {
    first_order: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    welcome_breed: Option<&'static str>,
    options: Vec<RewardOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommended_index: Option<usize>,
    /// Concrete picks per option, index-aligned with `options`. `null`
    /// entries mean "no breed of that tier in stock".
    picks: Vec<Vec<Option<PickedBreed>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_milestone: Option<MilestoneProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_magnet_bonus: Option<MilestoneProgress>,
}

fn main() -> ExitCode {
    let args = args::parse();
    let rc = match run(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            let msg = match &e {
                MainError::Validation(m) | MainError::Io(m) | MainError::Rules(m) => m,
            };
            eprintln!("mg: error: {msg}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

fn run(args: &Args) -> Result<(), MainError> {
    let snap = load_snapshot(&args.snapshot)?;

    let verdict = validate_given(
        &snap.given,
        snap.order_amount,
        snap.is_first_order,
        snap.lifetime_spend,
        &snap.owned,
        snap.active.as_ref(),
    );

    if args.validate_only {
        return match verdict {
            Some(v) => Err(MainError::Rules(v)),
            None => {
                if !args.quiet {
                    eprintln!("mg: no objection");
                }
                Ok(())
            }
        };
    }

    let options = calc_recommended_options(
        snap.order_amount,
        snap.is_first_order,
        snap.lifetime_spend,
        &snap.owned,
        snap.active.as_ref(),
    );

    let mut rng = PickRng::from_seed_u64(args.seed.unwrap_or(0));
    let recommended_index = if options.is_empty() {
        None
    } else {
        Some(pick_weighted_option_index(&options, &mut rng))
    };

    // Picks are computed per option, each starting from the breeds already
    // committed this session (staff will dispense at most one option).
    let picks: Vec<Vec<Option<PickedBreed>>> = options
        .iter()
        .map(|opt| {
            let mut already_picked = snap.given_breeds();
            pick_breeds_for_option(
                &opt.slots,
                &snap.owned,
                &mut already_picked,
                &snap.inventory,
                snap.active.as_ref(),
                &mut rng,
            )
        })
        .collect();

    let out = RunOutput {
        first_order: snap.is_first_order,
        welcome_breed: snap.is_first_order.then_some(WELCOME_BREED),
        options,
        recommended_index,
        picks,
        verdict,
        next_milestone: milestone_progress(&snap),
        next_magnet_bonus: magnet_bonus_progress(&snap),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&out)
    } else {
        serde_json::to_string(&out)
    }
    .map_err(|e| MainError::Validation(e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// Progress toward the next breed-count bonus, counting the breeds the
/// client will own once the in-session gives are committed.
fn milestone_progress(snap: &Snapshot) -> Option<MilestoneProgress> {
    let mut breeds: BTreeSet<&str> = snap.owned.iter().map(String::as_str).collect();
    for g in &snap.given {
        breeds.insert(g.breed.as_str());
    }
    next_breed_milestone(breeds.len() as u32).map(|(m, remaining)| MilestoneProgress {
        reward: m.reward,
        target: m.count,
        remaining,
    })
}

/// Progress toward the next magnet-count bonus, counting every magnet the
/// client holds plus the in-session gives.
fn magnet_bonus_progress(snap: &Snapshot) -> Option<MilestoneProgress> {
    let total = snap.magnets_collected + snap.given.len() as u32;
    next_magnet_milestone(total).map(|(m, remaining)| MilestoneProgress {
        reward: m.reward,
        target: m.count,
        remaining,
    })
}
