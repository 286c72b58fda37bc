//! Console session configuration.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use puzzle_core::GameConfig;

/// Settings for one console session.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Fixed RNG seed; a clock-derived seed is used when absent.
    pub seed: Option<u64>,
    pub max_turns: u32,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: GameConfig::DEFAULT_MAX_TURNS,
            log_dir: None,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PUZZLE_SEED` - RNG seed (default: derived from the clock)
    /// - `PUZZLE_MAX_TURNS` - Number of turns, at least 1 (default: 5)
    /// - `PUZZLE_LOG_DIR` - Directory for session logs
    /// - `PUZZLE_SESSION_ID` - Log sub-directory name (default: `session_<unix time>`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("PUZZLE_SEED");

        if let Some(turns) = read_env::<u32>("PUZZLE_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }

        config.log_dir = read_env::<PathBuf>("PUZZLE_LOG_DIR");
        config.session_id = env::var("PUZZLE_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::with_max_turns(self.max_turns)
    }

    /// The configured seed, or the current time in nanoseconds.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }

    pub fn session_id_or_timestamp(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_config() {
        let config = CliConfig::default();
        assert_eq!(config.max_turns, 5);
        assert_eq!(config.game_config(), GameConfig::default());
    }

    #[test]
    fn explicit_values_win() {
        let config = CliConfig {
            seed: Some(42),
            session_id: Some("replay".into()),
            ..CliConfig::default()
        };
        assert_eq!(config.seed_or_clock(), 42);
        assert_eq!(config.session_id_or_timestamp(), "replay");
    }

    #[test]
    fn generated_session_id_has_prefix() {
        assert!(
            CliConfig::default()
                .session_id_or_timestamp()
                .starts_with("session_")
        );
    }
}
