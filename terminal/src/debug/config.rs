//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "swap_terminal=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`
    pub log_file_prefix: String,
    /// Log level filter (e.g., "swap_terminal=debug,info")
    pub log_level: String,
    /// Emit JSON lines instead of plain text
    pub json: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_prefix: "swap-terminal.log".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_dir: lookup("SWAP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file_prefix: defaults.log_file_prefix,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            json: lookup("SWAP_LOG_JSON").is_some_and(|v| v == "1"),
        }
    }

    /// Full path of today's log file prefix
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_prefix)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = DebugConfig::from_lookup(|_| None);
        assert_eq!(config, DebugConfig::default());
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_reads_overrides() {
        let config = DebugConfig::from_lookup(|name| match name {
            "SWAP_LOG_DIR" => Some("/tmp/swap".to_string()),
            "RUST_LOG" => Some("swap_terminal=debug".to_string()),
            "SWAP_LOG_JSON" => Some("1".to_string()),
            _ => None,
        });
        assert_eq!(config.log_path(), PathBuf::from("/tmp/swap/swap-terminal.log"));
        assert!(config.is_debug_enabled());
        assert!(config.json);
    }
}
