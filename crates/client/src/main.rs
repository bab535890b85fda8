//! Robot duel terminal client.
//!
//! Composition root: reads configuration from the environment, installs
//! file logging, builds the [`DuelSession`](client_bootstrap::DuelSession)
//! and hands it to the terminal [`EventLoop`].
//!
//! ```bash
//! # Dice rules with a fixed seed
//! DUEL_RULESET=dice DUEL_SEED=7 cargo run -p duel-client
//! ```

mod app;
mod input;
mod logging;
mod presentation;

use anyhow::Result;
use client_bootstrap::{ClientConfig, SessionBuilder};

use crate::app::App;
use crate::presentation::{EventLoop, terminal};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref(), config.session_id.as_deref())?;

    tracing::info!("Starting robot duel client");

    let session = SessionBuilder::new(config).build()?;

    let mut tui = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let mut event_loop = EventLoop::new(App::new(session));
    let result = event_loop.run(&mut tui);

    match &result {
        Ok(()) => tracing::info!("Client shutdown complete"),
        Err(error) => tracing::error!("Client stopped with error: {error:#}"),
    }

    result
}
