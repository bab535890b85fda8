//! Read-only facts and oracles consulted by the combat pipeline.
//!
//! Actions never reach for ambient randomness or global settings; everything
//! they need is handed to them through [`DuelEnv`].
pub mod rng;

pub use rng::{PcgRng, RngOracle, RollContext, ScriptedRng, compute_seed};

use crate::config::DuelConfig;

/// Bundle of configuration and oracles passed to every transition.
#[derive(Clone, Copy)]
pub struct DuelEnv<'a> {
    config: &'a DuelConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> DuelEnv<'a> {
    pub fn new(config: &'a DuelConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &'a DuelConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl core::fmt::Debug for DuelEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DuelEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
