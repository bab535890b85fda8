//! Content factory for loading duel content from a data directory.

use std::path::{Path, PathBuf};

use duel_core::DuelConfig;

use crate::loaders::{ConfigLoader, LoadResult, WeaponLoader};
use crate::registry::WeaponRegistry;

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── duel.toml
/// └── weapons.ron
/// ```
///
/// Both files are optional; a missing file falls back to the built-in
/// defaults. A file that exists but fails to parse is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "duel.toml";
    pub const WEAPONS_FILE: &'static str = "weapons.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load duel configuration from `duel.toml`.
    pub fn load_config(&self) -> LoadResult<DuelConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(DuelConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the weapon registry from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<WeaponRegistry> {
        let path = self.data_dir.join(Self::WEAPONS_FILE);
        if !path.exists() {
            return Ok(WeaponRegistry::builtin());
        }
        WeaponLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
