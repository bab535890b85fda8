//! Combat result types and attack resolution.

use crate::config::{DuelConfig, Ruleset};
use crate::env::{DuelEnv, RollContext, compute_seed};
use crate::state::{Combatant, Side, Weapon};

use super::damage::{apply_damage, damage_on_hit};
use super::hit::{check_hit, hit_threshold, roll_hit};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum AttackOutcome {
    Miss,
    Hit,
}

/// Result of a combat resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    pub hit_roll: u32,
    /// Damage die result, when damage was rolled rather than fixed.
    pub damage_roll: Option<u32>,
    /// Damage applied to the defender (0 on a miss).
    pub damage: u32,
    /// Defender health after the attack.
    pub remaining_health: u32,
    /// Human-readable description for the combat log.
    pub message: String,
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        self.outcome == AttackOutcome::Hit
    }
}

/// Seeds for the rolls made by one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackSeeds {
    pub hit: u64,
    pub damage: u64,
}

impl AttackSeeds {
    pub fn derive(game_seed: u64, nonce: u64, attacker: Side) -> Self {
        let actor = attacker.index() as u32;
        Self {
            hit: compute_seed(game_seed, nonce, actor, RollContext::Hit),
            damage: compute_seed(game_seed, nonce, actor, RollContext::Damage),
        }
    }
}

/// Resolve a complete attack sequence (hit check + damage calculation).
///
/// Pure: the defender is not mutated, the caller applies
/// [`AttackResult::remaining_health`]. The damage roll is only drawn on a hit.
/// Legality (turn order, defeated robots) is checked by the action pipeline,
/// not here.
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &Combatant,
    weapon: &Weapon,
    env: &DuelEnv<'_>,
    seeds: AttackSeeds,
) -> AttackResult {
    let config = env.config();

    let hit_roll = roll_hit(config, env.rng(), seeds.hit);
    if !check_hit(config, weapon, hit_roll) {
        let message = describe_miss(config, attacker, weapon, hit_roll);
        return AttackResult {
            outcome: AttackOutcome::Miss,
            hit_roll,
            damage_roll: None,
            damage: 0,
            remaining_health: defender.health,
            message,
        };
    }

    let (damage, damage_roll) = damage_on_hit(config, weapon, env.rng(), seeds.damage);
    let remaining_health = apply_damage(defender.health, damage);

    let mut message = describe_hit(config, attacker, weapon, hit_roll, damage);
    if remaining_health == 0 {
        message.push_str(&format!(" {} is destroyed!", defender.name));
    }

    AttackResult {
        outcome: AttackOutcome::Hit,
        hit_roll,
        damage_roll,
        damage,
        remaining_health,
        message,
    }
}

fn describe_hit(
    config: &DuelConfig,
    attacker: &Combatant,
    weapon: &Weapon,
    roll: u32,
    damage: u32,
) -> String {
    let roll_text = match config.ruleset {
        Ruleset::Accuracy => format!("{} ≤ {}", roll, hit_threshold(config, weapon)),
        Ruleset::Dice => format!("rolled {} on d{}", roll, config.dice.sides),
    };
    format!(
        "{} fires {}: {} ({})! {} damage.",
        attacker.name,
        weapon.name,
        AttackOutcome::Hit,
        roll_text,
        damage
    )
}

fn describe_miss(config: &DuelConfig, attacker: &Combatant, weapon: &Weapon, roll: u32) -> String {
    let roll_text = match config.ruleset {
        Ruleset::Accuracy => format!("{} > {}", roll, hit_threshold(config, weapon)),
        Ruleset::Dice => format!(
            "rolled {} on d{}, needs {}",
            roll, config.dice.sides, config.dice.hit_threshold
        ),
    };
    format!(
        "{} fires {}: {} ({}).",
        attacker.name,
        weapon.name,
        AttackOutcome::Miss,
        roll_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    fn robots(defender_health: u32) -> (Combatant, Combatant) {
        (
            Combatant::new("Robot Alpha", 100, Vec::new()),
            Combatant::new("Robot Beta", defender_health, Vec::new()),
        )
    }

    fn seeds() -> AttackSeeds {
        AttackSeeds::derive(1, 0, Side::Alpha)
    }

    #[test]
    fn accuracy_roll_equal_to_accuracy_hits() {
        let config = DuelConfig::accuracy();
        let rng = ScriptedRng::new([70]);
        let env = DuelEnv::new(&config, &rng);
        let (alpha, beta) = robots(100);
        let laser = Weapon::new("Laser", 20, 70);

        let result = resolve_attack(&alpha, &beta, &laser, &env, seeds());

        assert!(result.is_hit());
        assert_eq!(result.damage, 20);
        assert_eq!(result.remaining_health, 80);
        assert_eq!(result.damage_roll, None);
        assert_eq!(
            result.message,
            "Robot Alpha fires Laser: HIT (70 ≤ 70)! 20 damage."
        );
    }

    #[test]
    fn accuracy_roll_above_accuracy_misses() {
        let config = DuelConfig::accuracy();
        let rng = ScriptedRng::new([71]);
        let env = DuelEnv::new(&config, &rng);
        let (alpha, beta) = robots(100);
        let laser = Weapon::new("Laser", 20, 70);

        let result = resolve_attack(&alpha, &beta, &laser, &env, seeds());

        assert_eq!(result.outcome, AttackOutcome::Miss);
        assert_eq!(result.damage, 0);
        assert_eq!(result.remaining_health, 100);
        assert_eq!(result.message, "Robot Alpha fires Laser: MISS (71 > 70).");
    }

    #[test]
    fn dice_miss_does_not_roll_damage() {
        let config = DuelConfig::dice();
        let rng = ScriptedRng::new([2, 12]);
        let env = DuelEnv::new(&config, &rng);
        let (alpha, beta) = robots(100);
        let laser = Weapon::with_max_damage("Laser", 20);

        let result = resolve_attack(&alpha, &beta, &laser, &env, seeds());

        assert!(!result.is_hit());
        assert_eq!(rng.consumed(), 1);
        assert_eq!(
            result.message,
            "Robot Alpha fires Laser: MISS (rolled 2 on d6, needs 4)."
        );
    }

    #[test]
    fn lethal_hit_clamps_and_announces_destruction() {
        let config = DuelConfig::dice();
        let rng = ScriptedRng::new([6, 20]);
        let env = DuelEnv::new(&config, &rng);
        let (alpha, beta) = robots(5);
        let laser = Weapon::with_max_damage("Laser", 20);

        let result = resolve_attack(&alpha, &beta, &laser, &env, seeds());

        assert_eq!(result.damage, 20);
        assert_eq!(result.damage_roll, Some(20));
        assert_eq!(result.remaining_health, 0);
        assert!(result.message.ends_with("Robot Beta is destroyed!"));
    }

    #[test]
    fn health_never_drops_below_zero() {
        let (alpha, _) = robots(100);
        let heavy = Weapon::new("Railgun", 500, 100);
        for config in [DuelConfig::accuracy(), DuelConfig::dice()] {
            let env = DuelEnv::new(&config, &PcgRng);
            for health in [0, 1, 37, 100] {
                let (_, beta) = robots(health);
                for nonce in 0..50 {
                    let seeds = AttackSeeds::derive(99, nonce, Side::Alpha);
                    let result = resolve_attack(&alpha, &beta, &heavy, &env, seeds);
                    assert!(result.remaining_health <= health);
                    if !result.is_hit() {
                        assert_eq!(result.remaining_health, health);
                    }
                }
            }
        }
    }
}
