//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use duel_core::Ruleset;

/// Configuration required to bootstrap a duel session and its front-end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Overrides the ruleset from `duel.toml`.
    pub ruleset: Option<Ruleset>,
    /// Fixed game seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    /// Directory holding `duel.toml` and `weapons.ron`.
    pub content_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const RULESET_VAR: &'static str = "DUEL_RULESET";
    pub const SEED_VAR: &'static str = "DUEL_SEED";
    pub const CONTENT_DIR_VAR: &'static str = "DUEL_CONTENT_DIR";
    pub const SESSION_ID_VAR: &'static str = "DUEL_SESSION_ID";
    pub const LOG_DIR_VAR: &'static str = "DUEL_LOG_DIR";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_RULESET` - `accuracy` or `dice` (default: from `duel.toml`)
    /// - `DUEL_SEED` - Game seed for reproducible fights (default: random)
    /// - `DUEL_CONTENT_DIR` - Content directory (default: shipped data)
    /// - `DUEL_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `DUEL_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            ruleset: read(Self::RULESET_VAR).and_then(|v| v.trim().parse().ok()),
            seed: read(Self::SEED_VAR).and_then(|v| v.trim().parse().ok()),
            content_dir: read(Self::CONTENT_DIR_VAR).map(PathBuf::from),
            session_id: read(Self::SESSION_ID_VAR),
            log_dir: read(Self::LOG_DIR_VAR).map(PathBuf::from),
        }
    }

    /// Resolves the content directory.
    ///
    /// Tries, in order:
    /// 1. `DUEL_CONTENT_DIR`
    /// 2. Relative to the current executable (../../crates/game/content/data)
    /// 3. Relative to the current directory (crates/game/content/data)
    pub fn resolve_content_dir(&self) -> PathBuf {
        const RELATIVE: &str = "crates/game/content/data";

        if let Some(dir) = &self.content_dir {
            return dir.clone();
        }

        let from_exe = env::current_exe().ok().and_then(|exe| {
            exe.parent()
                .and_then(|p| p.parent())
                .and_then(|p| p.parent())
                .map(|root| root.join(RELATIVE))
        });

        match from_exe {
            Some(dir) if dir.exists() => dir,
            _ => env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(RELATIVE),
        }
    }
}
