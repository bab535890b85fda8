//! Weapon catalog loader.

use std::path::Path;

use duel_core::Weapon;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::registry::WeaponRegistry;

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<Weapon>,
}

/// Loader for weapon catalogs from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load a weapon catalog from a RON file.
    ///
    /// Example:
    /// ```ron
    /// (
    ///     weapons: [
    ///         (name: "Laser", damage: 20, accuracy: Some(70)),
    ///         (name: "Saw", damage: 12),
    ///     ],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<WeaponRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load weapon catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<WeaponRegistry> {
        let catalog: WeaponCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;

        WeaponRegistry::from_weapons(catalog.weapons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_optional_accuracy() {
        let registry = WeaponLoader::parse(
            r#"(
                weapons: [
                    (name: "Laser", damage: 20, accuracy: Some(70)),
                    (name: "Saw", damage: 12),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(registry.get("Laser").unwrap().accuracy, Some(70));
        assert_eq!(registry.get("Saw").unwrap().accuracy, None);
        assert_eq!(registry.get("Saw").unwrap().damage, 12);
    }

    #[test]
    fn rejects_negative_values() {
        let err = WeaponLoader::parse(r#"(weapons: [(name: "Laser", damage: -5)])"#).unwrap_err();
        assert!(err.to_string().contains("RON"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = WeaponLoader::load(Path::new("/definitely/not/here.ron")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.ron"));
    }
}
