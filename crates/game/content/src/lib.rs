//! Data-driven duel content and loaders.
//!
//! This crate houses the built-in weapon arsenal and provides loaders for
//! RON/TOML data files:
//! - Weapon catalogs (data-driven via RON)
//! - Duel configuration (data-driven via TOML)
//!
//! All loaders use duel-core types directly with serde for deserialization.

pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::{DEFAULT_WEAPONS, WeaponRegistry, WeaponSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, WeaponCatalog, WeaponLoader};
