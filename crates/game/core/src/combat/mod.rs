//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All randomness comes from the [`crate::env::RngOracle`] in the supplied
//! environment, so every function here is deterministic for a given seed.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (hit check + damage)
//! - `check_hit`: Hit roll against the ruleset's threshold
//! - `damage_on_hit`: Fixed or rolled damage
//! - `apply_damage`: Health reduction (clamped to 0)

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{apply_damage, damage_on_hit};
pub use hit::{check_hit, hit_threshold, roll_hit};
pub use result::{AttackOutcome, AttackResult, AttackSeeds, resolve_attack};
