//! Headless duel runner binary.
//!
//! Plays one match between two computer controllers and prints the result.
//!
//! # Examples
//!
//! ```bash
//! # Default setup, heuristic against heuristic
//! cargo run -p duel-client
//!
//! # Custom setup, fixed seed, heuristic against random sequences
//! DUEL_CONFIG=duel.toml DUEL_SEED=7 DUEL_RIGHT=random_sequence cargo run -p duel-client
//!
//! # Per-frame decisions
//! RUST_LOG=runtime=debug cargo run -p duel-client
//! ```

use anyhow::Result;
use duel_client::{SimConfig, load_setup, simulate};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    let setup = load_setup(&config)?;

    let summary = simulate(&setup, config.max_frames)?;
    tracing::info!(frames = summary.frames, cues = summary.cues, "match finished");
    println!("{summary}");

    Ok(())
}
