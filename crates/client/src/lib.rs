//! Headless duel runner.
//!
//! # Architecture
//!
//! ```text
//! SimConfig (environment)
//!   └─→ DuelSetup (TOML via ConfigLoader, or defaults)
//!         └─→ Duel (runtime, built from the setup)
//!               └─→ MatchSummary
//! ```
//!
//! Rendering and audio are out of scope here: the runner only steps the
//! frame loop and tallies what happened. A graphical frontend would drive
//! the same [`runtime::Duel`] and read [`duel_core::Combatant::visual`]
//! each frame instead.

pub mod config;

pub use config::SimConfig;

use std::fmt;

use anyhow::{Context, Result};
use duel_content::{ConfigLoader, DuelSetup};
use duel_core::Side;
use runtime::{DuelBuilder, Outcome};

/// Resolves the setup document and applies environment overrides.
///
/// Only controllers the runner can drive on its own are accepted.
pub fn load_setup(config: &SimConfig) -> Result<DuelSetup> {
    let mut setup = match &config.setup_path {
        Some(path) => ConfigLoader::load(path)?,
        None => DuelSetup::default(),
    };

    if let Some(seed) = config.seed {
        setup.seed = seed;
    }
    for (side, kind) in [(Side::Left, config.left), (Side::Right, config.right)] {
        if let Some(kind) = kind {
            setup.side_mut(side).controller = kind;
        }
    }

    runtime::require_headless(&setup).context("headless runs need computer controllers")?;
    Ok(setup)
}

/// Tally of one finished or abandoned match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub frames: u64,
    pub outcome: Option<Outcome>,
    pub life: [u32; 2],
    /// Hits that landed, credited to the attacker.
    pub hits: [u32; 2],
    pub blocks: [u32; 2],
    pub cues: u64,
}

impl MatchSummary {
    fn record(&mut self, report: &runtime::FrameReport) {
        self.frames = report.frame;
        self.outcome = report.outcome;
        self.cues += report.cues.len() as u64;
        for hit in &report.hits {
            let tally = if hit.blocked {
                &mut self.blocks
            } else {
                &mut self.hits
            };
            tally[index(hit.attacker)] += 1;
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self.outcome {
            Some(Outcome::Winner(side)) => format!("{side} wins"),
            Some(Outcome::Draw) => "draw".to_string(),
            None => "no result".to_string(),
        };
        write!(
            f,
            "{} after {} frames | life {}-{} | hits {}-{} | blocked {}-{}",
            result,
            self.frames,
            self.life[0],
            self.life[1],
            self.hits[0],
            self.hits[1],
            self.blocks[0],
            self.blocks[1],
        )
    }
}

fn index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

/// Runs a match until someone wins or `max_frames` run out.
pub fn simulate(setup: &DuelSetup, max_frames: u64) -> Result<MatchSummary> {
    let mut duel = DuelBuilder::from_setup(setup).build()?;
    let mut summary = MatchSummary::default();

    tracing::info!(
        left = duel.fighter(Side::Left).controller(),
        right = duel.fighter(Side::Right).controller(),
        seed = setup.seed,
        max_frames,
        "match started"
    );

    while duel.frame() < max_frames && !duel.is_over() {
        let report = duel.step();
        summary.record(&report);
    }

    for side in [Side::Left, Side::Right] {
        summary.life[index(side)] = duel.combatant(side).life();
    }
    Ok(summary)
}
