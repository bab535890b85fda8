//! A running duel: state, configuration and random source in one place.

use duel_core::{
    Action, DuelConfig, DuelDelta, DuelEngine, DuelEnv, DuelState, ExecuteError, RngOracle,
};
use duel_content::WeaponRegistry;

/// Owns the duel state and is the only path by which front-ends change it.
pub struct DuelSession {
    config: DuelConfig,
    registry: WeaponRegistry,
    state: DuelState,
    rng: Box<dyn RngOracle>,
}

impl DuelSession {
    pub fn new(
        config: DuelConfig,
        registry: WeaponRegistry,
        game_seed: u64,
        rng: Box<dyn RngOracle>,
    ) -> Self {
        let state = DuelState::with_shared_loadout(&config, registry.loadout(), game_seed);
        Self {
            config,
            registry,
            state,
            rng,
        }
    }

    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    pub fn registry(&self) -> &WeaponRegistry {
        &self.registry
    }

    pub fn state(&self) -> &DuelState {
        &self.state
    }

    /// Runs one action through the engine.
    ///
    /// Rejected actions leave the state untouched and are logged at warn
    /// level; the caller decides how to surface them.
    pub fn dispatch(&mut self, action: Action) -> Result<DuelDelta, ExecuteError> {
        let env = DuelEnv::new(&self.config, self.rng.as_ref());
        let result = DuelEngine::new(&mut self.state).execute(&env, &action);

        match &result {
            Ok(delta) => {
                if let Some(entry) = &delta.attack {
                    tracing::info!(
                        attacker = %entry.attacker,
                        hit = entry.result.is_hit(),
                        hit_roll = entry.result.hit_roll,
                        damage = entry.result.damage,
                        remaining = entry.result.remaining_health,
                        "{}",
                        entry.text()
                    );
                } else {
                    tracing::debug!(action = action.as_str(), phase = %delta.phase_after, "Action applied");
                }

                if let Some(side) = delta.destroyed() {
                    tracing::info!("{} destroyed, duel over", self.state.combatant(side).name);
                }
            }
            Err(error) => {
                tracing::warn!(
                    action = action.as_str(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Action rejected: {}",
                    error
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Phase, ScriptedRng, Side};

    #[test]
    fn dispatch_applies_and_rejects() {
        let mut session = DuelSession::new(
            DuelConfig::dice(),
            WeaponRegistry::builtin(),
            0,
            Box::new(ScriptedRng::new([5, 12])),
        );
        assert_eq!(session.state().phase, Phase::Fighting);

        let delta = session.dispatch(Action::attack(Side::Alpha, 0)).unwrap();
        assert_eq!(delta.health_after, [100, 88]);

        assert!(session.dispatch(Action::attack(Side::Alpha, 0)).is_err());
        assert_eq!(session.state().log.len(), 1);
    }

    #[test]
    fn both_robots_start_with_the_registry_loadout() {
        let session = DuelSession::new(
            DuelConfig::accuracy(),
            WeaponRegistry::builtin(),
            0,
            Box::new(duel_core::PcgRng),
        );
        for side in Side::BOTH {
            assert_eq!(
                session.state().combatant(side).weapons,
                session.registry().loadout()
            );
        }
    }
}
