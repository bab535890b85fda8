//! Duel configuration loader.

use std::path::Path;

use anyhow::bail;
use duel_core::DuelConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for duel configuration from TOML files.
///
/// Missing keys fall back to [`DuelConfig::default`]. A config that could
/// never produce a decided duel is rejected: starting health must be at
/// least 1, the hit die needs at least one side and the hit threshold must
/// lie in `1..=sides`.
///
/// ```toml
/// ruleset = "dice"
/// starting_health = 100
///
/// [dice]
/// sides = 6
/// hit_threshold = 4
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<DuelConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<DuelConfig> {
        let config: DuelConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &DuelConfig) -> LoadResult<()> {
        if config.starting_health == 0 {
            bail!("starting_health must be at least 1");
        }

        let dice = &config.dice;
        if dice.sides == 0 {
            bail!("dice.sides must be at least 1");
        }
        if dice.hit_threshold == 0 || dice.hit_threshold > dice.sides {
            bail!(
                "dice.hit_threshold {} must be between 1 and {} (dice.sides)",
                dice.hit_threshold,
                dice.sides
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::Ruleset;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("ruleset = \"dice\"\n").unwrap();
        assert_eq!(config.ruleset, Ruleset::Dice);
        assert_eq!(config.starting_health, 100);
        assert_eq!(config.dice.sides, 6);
        assert_eq!(config.dice.hit_threshold, 4);
    }

    #[test]
    fn overrides_dice_parameters() {
        let config = ConfigLoader::parse(
            "ruleset = \"dice\"\nstarting_health = 50\n[dice]\nsides = 20\nhit_threshold = 11\n",
        )
        .unwrap();
        assert_eq!(config.starting_health, 50);
        assert_eq!(config.hit_die_sides(), 20);
        assert_eq!(config.dice.hit_threshold, 11);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), DuelConfig::default());
    }

    #[test]
    fn zero_starting_health_is_rejected() {
        let err = ConfigLoader::parse("ruleset = \"dice\"\nstarting_health = 0\n").unwrap_err();
        assert!(err.to_string().contains("starting_health"));
    }

    #[test]
    fn degenerate_dice_are_rejected() {
        for table in [
            "[dice]\nsides = 0\nhit_threshold = 0\n",
            "[dice]\nsides = 6\nhit_threshold = 0\n",
            "[dice]\nsides = 6\nhit_threshold = 7\n",
        ] {
            let err = ConfigLoader::parse(table).unwrap_err();
            assert!(err.to_string().contains("dice."), "{table}: {err}");
        }
    }

    #[test]
    fn threshold_equal_to_sides_is_accepted() {
        let config = ConfigLoader::parse("[dice]\nsides = 6\nhit_threshold = 6\n").unwrap();
        assert_eq!(config.dice.hit_threshold, 6);
        assert!(ConfigLoader::parse("starting_health = 1\n").is_ok());
    }

    #[test]
    fn loading_an_undecidable_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duel.toml");
        std::fs::write(&path, "[dice]\nsides = 6\nhit_threshold = 7\n").unwrap();

        let message = ConfigLoader::load(&path).unwrap_err().to_string();
        assert!(message.contains("duel.toml"));
        assert!(message.contains("hit_threshold 7"));
    }

    #[test]
    fn unknown_ruleset_is_an_error() {
        assert!(ConfigLoader::parse("ruleset = \"chess\"").is_err());
    }
}
