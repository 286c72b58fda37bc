//! File logging for console sessions.
//!
//! The prompt owns stdout, so tracing output goes only to a per-session file.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::CliConfig;

pub const LOG_FILE_NAME: &str = "session.log";

/// Installs the global subscriber writing to `<log dir>/<session id>/session.log`.
///
/// The returned guard flushes the writer when dropped; keep it alive for the
/// whole session.
pub fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    let session_id = config.session_id_or_timestamp();
    let session_log_dir = log_directory(config).join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!(
        "Log file: {}/{}",
        session_log_dir.display(),
        LOG_FILE_NAME
    );

    Ok(guard)
}

/// `PUZZLE_LOG_DIR` if set, otherwise the platform cache directory.
///
/// - macOS: `~/Library/Caches/box-puzzle/logs`
/// - Linux: `~/.cache/box-puzzle/logs` (or `$XDG_CACHE_HOME/box-puzzle/logs`)
/// - Windows: `%LOCALAPPDATA%\box-puzzle\cache\logs`
/// - Fallback: `/tmp/box-puzzle/logs`
pub fn log_directory(config: &CliConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }

    directories::ProjectDirs::from("", "", "box-puzzle")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/box-puzzle"))
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_dir_is_used_verbatim() {
        let config = CliConfig {
            log_dir: Some(PathBuf::from("/var/tmp/puzzle")),
            ..CliConfig::default()
        };
        assert_eq!(log_directory(&config), PathBuf::from("/var/tmp/puzzle"));
    }

    #[test]
    fn default_log_dir_ends_in_logs() {
        let dir = log_directory(&CliConfig::default());
        assert!(dir.ends_with("logs"));
    }
}
