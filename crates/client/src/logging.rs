//! File-based tracing setup for the terminal client.
//!
//! The TUI owns stdout, so every event goes to a per-session log file.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "client.log";

/// Get the platform-specific log directory for the duel client
///
/// - macOS: `~/Library/Caches/duelrobot/logs`
/// - Linux: `~/.cache/duelrobot/logs` (or `$XDG_CACHE_HOME/duelrobot/logs`)
/// - Windows: `%LOCALAPPDATA%\duelrobot\logs`
/// - Fallback: `/tmp/duelrobot/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "duelrobot")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/duelrobot"))
        .join("logs")
}

/// `session_<unix seconds>` when no explicit id is configured.
pub fn session_id_or_timestamp(session_id: Option<&str>) -> String {
    match session_id {
        Some(id) => id.to_owned(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            format!("session_{timestamp}")
        }
    }
}

/// Installs the global subscriber writing to `<log_dir>/<session_id>/client.log`.
///
/// The returned guard flushes the background writer on drop, so keep it
/// alive until the client exits.
pub fn setup_logging(log_dir: Option<&Path>, session_id: Option<&str>) -> Result<WorkerGuard> {
    let log_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    let session_id = session_id_or_timestamp(session_id);

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)
        .with_context(|| format!("creating log directory {}", session_log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_session_id_wins() {
        assert_eq!(session_id_or_timestamp(Some("arena")), "arena");
        assert!(session_id_or_timestamp(None).starts_with("session_"));
    }

    #[test]
    fn default_log_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }
}
