//! Damage calculation and application.

use crate::config::{DuelConfig, Ruleset};
use crate::env::RngOracle;
use crate::state::Weapon;

/// Damage dealt by a weapon that has already hit.
///
/// Returns `(damage, damage_roll)`. Accuracy rules deal the weapon's fixed
/// damage without rolling. Dice rules roll uniformly in `[1, max_damage]`;
/// a weapon with a maximum of 0 deals 0 without rolling.
pub fn damage_on_hit(
    config: &DuelConfig,
    weapon: &Weapon,
    rng: &(impl RngOracle + ?Sized),
    seed: u64,
) -> (u32, Option<u32>) {
    match config.ruleset {
        Ruleset::Accuracy => (weapon.damage, None),
        Ruleset::Dice if weapon.damage == 0 => (0, None),
        Ruleset::Dice => {
            let roll = rng.range(seed, 1, weapon.damage);
            (roll, Some(roll))
        }
    }
}

/// Apply damage to current health, clamped to 0.
pub fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    #[test]
    fn apply_damage_clamps_at_zero() {
        assert_eq!(apply_damage(100, 20), 80);
        assert_eq!(apply_damage(10, 30), 0);
        assert_eq!(apply_damage(0, 5), 0);
    }

    #[test]
    fn accuracy_damage_is_fixed() {
        let config = DuelConfig::accuracy();
        let missile = Weapon::new("Missile", 30, 50);
        let rng = ScriptedRng::new([1]);
        assert_eq!(damage_on_hit(&config, &missile, &rng, 0), (30, None));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn dice_damage_stays_within_weapon_maximum() {
        let config = DuelConfig::dice();
        let laser = Weapon::with_max_damage("Laser", 20);
        for seed in 0..500 {
            let (damage, roll) = damage_on_hit(&config, &laser, &PcgRng, seed);
            assert!((1..=20).contains(&damage));
            assert_eq!(roll, Some(damage));
        }
    }

    #[test]
    fn zero_max_damage_deals_nothing() {
        let config = DuelConfig::dice();
        let dud = Weapon::with_max_damage("Dud", 0);
        assert_eq!(damage_on_hit(&config, &dud, &PcgRng, 9), (0, None));
    }
}
