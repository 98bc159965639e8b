//! Duel setup loader.

use std::path::Path;

use duel_core::{Arena, CombatantConfig};
use tracing::{debug, warn};

use crate::ai::AiProfile;
use crate::loaders::{LoadResult, read_file};
use crate::setup::DuelSetup;

/// Loader for duel setups and their parts from TOML files.
///
/// Every section has defaults, so a file only needs the values it changes;
/// an empty file yields [`DuelSetup::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a complete duel setup.
    pub fn load(path: &Path) -> LoadResult<DuelSetup> {
        let content = read_file(path)?;
        let setup = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid duel setup {}: {}", path.display(), e))?;
        debug!(path = %path.display(), seed = setup.seed, "duel setup loaded");
        Ok(setup)
    }

    /// Parses and validates a duel setup from TOML text.
    pub fn parse(content: &str) -> LoadResult<DuelSetup> {
        let setup: DuelSetup = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse duel setup TOML: {}", e))?;
        Self::validate(&setup)?;
        Ok(setup)
    }

    /// Loads only the combatant tunables.
    pub fn load_combatant(path: &Path) -> LoadResult<CombatantConfig> {
        let content = read_file(path)?;
        let config: CombatantConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combatant TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid combatant config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Loads only an AI profile.
    pub fn load_ai_profile(path: &Path) -> LoadResult<AiProfile> {
        let content = read_file(path)?;
        let profile: AiProfile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse AI profile TOML: {}", e))?;
        Self::report_ai_warnings(&profile);
        Ok(profile)
    }

    fn validate(setup: &DuelSetup) -> LoadResult<()> {
        setup
            .combatant
            .validate()
            .map_err(|e| anyhow::anyhow!("combatant: {}", e))?;
        Arena::from_config(&setup.arena).map_err(|e| anyhow::anyhow!("arena: {}", e))?;

        let shared = setup.shared_keys();
        if !shared.is_empty() {
            anyhow::bail!("keys bound to both sides: {}", shared.join(", "));
        }

        Self::report_ai_warnings(&setup.ai);
        Ok(())
    }

    fn report_ai_warnings(profile: &AiProfile) {
        for warning in profile.thresholds.warnings() {
            warn!(%warning, "suspicious AI thresholds");
        }
    }
}
