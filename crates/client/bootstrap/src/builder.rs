//! Builds a duel session from configuration and content.
use anyhow::{Context, Result};
use duel_content::ContentFactory;
use duel_core::{PcgRng, RngOracle};

use crate::config::ClientConfig;
use crate::session::DuelSession;

/// Builder that assembles content, configuration and the RNG for a session.
pub struct SessionBuilder {
    config: ClientConfig,
    rng: Option<Box<dyn RngOracle>>,
}

impl SessionBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config, rng: None }
    }

    /// Replace the default [`PcgRng`], e.g. with a scripted sequence.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn build(self) -> Result<DuelSession> {
        let content_dir = self.config.resolve_content_dir();
        tracing::debug!("Loading content from {}", content_dir.display());

        let factory = ContentFactory::new(&content_dir);
        let mut duel_config = factory
            .load_config()
            .with_context(|| format!("loading duel config from {}", content_dir.display()))?;
        let registry = factory
            .load_weapons()
            .with_context(|| format!("loading weapons from {}", content_dir.display()))?;

        if let Some(ruleset) = self.config.ruleset {
            duel_config.ruleset = ruleset;
        }

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let rng = self.rng.unwrap_or_else(|| Box::new(PcgRng));

        tracing::info!(
            ruleset = %duel_config.ruleset,
            starting_health = duel_config.starting_health,
            weapons = registry.len(),
            seed,
            "Duel session ready"
        );

        Ok(DuelSession::new(duel_config, registry, seed, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Phase, Ruleset};

    #[test]
    fn env_ruleset_overrides_content_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("duel.toml"), "ruleset = \"accuracy\"\n").unwrap();

        let config = ClientConfig {
            ruleset: Some(Ruleset::Dice),
            seed: Some(5),
            content_dir: Some(dir.path().to_path_buf()),
            ..ClientConfig::default()
        };
        let session = SessionBuilder::new(config).build().unwrap();

        assert_eq!(session.config().ruleset, Ruleset::Dice);
        assert_eq!(session.state().phase, Phase::Fighting);
        assert_eq!(session.state().game_seed, 5);
        assert_eq!(session.registry().len(), 3);
    }

    #[test]
    fn broken_content_fails_the_build() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("duel.toml"), "starting_health = \"lots\"").unwrap();

        let config = ClientConfig {
            content_dir: Some(dir.path().to_path_buf()),
            ..ClientConfig::default()
        };
        let err = SessionBuilder::new(config).build().err().unwrap();
        assert!(format!("{err:#}").contains("duel config"));
    }
}
