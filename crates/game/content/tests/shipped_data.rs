use std::path::Path;

use duel_content::{ContentFactory, WeaponRegistry};
use duel_core::DuelConfig;

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

#[test]
fn shipped_weapons_match_builtin_arsenal() {
    let weapons = ContentFactory::new(data_dir()).load_weapons().unwrap();
    assert_eq!(weapons, WeaponRegistry::builtin());
}

#[test]
fn shipped_config_is_the_default() {
    let config = ContentFactory::new(data_dir()).load_config().unwrap();
    assert_eq!(config, DuelConfig::default());
}
