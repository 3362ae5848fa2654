//! Configuration loading
//!
//! `Config` is read from `~/.config/healthguard/config.toml` when present,
//! otherwise defaults apply. Every section and field is optional.
//!
//! ```toml
//! [guardian]
//! listen = "127.0.0.1:8000"
//! brain_url = "ws://127.0.0.1:8001"
//!
//! [brain]
//! listen = "127.0.0.1:8001"
//! knowledge_graph = "knowledge/medical.graph"
//!
//! [logging]
//! file = "/tmp/healthguard.log"
//! filter = "info,healthguard=debug"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory name under `~/.config`
pub const CONFIG_DIR_NAME: &str = "healthguard";

/// Address the guardian uses for the brain connection when none is configured
pub const DEFAULT_BRAIN_ADDRESS: &str = "medical_brain";

/// Main configuration structure loaded from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub guardian: GuardianConfig,
    pub brain: BrainConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Config::default())
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Get the config directory path (~/.config/healthguard)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }
}

/// User-facing agent settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardianConfig {
    pub listen: SocketAddr,
    /// WebSocket URL of the brain agent. Unset means standalone mode.
    pub brain_url: Option<String>,
    /// Sender id the brain connection is registered under
    pub brain_address: String,
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8000)),
            brain_url: None,
            brain_address: DEFAULT_BRAIN_ADDRESS.to_string(),
        }
    }
}

/// Analysis agent settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    pub listen: SocketAddr,
    /// Optional fact graph file
    pub knowledge_graph: Option<PathBuf>,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8001)),
            knowledge_graph: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    /// `EnvFilter` directive string
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: std::env::temp_dir().join("healthguard.log"),
            filter: "info,healthguard=debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.guardian.listen.port(), 8000);
        assert_eq!(config.brain.listen.port(), 8001);
        assert!(config.guardian.brain_url.is_none());
        assert_eq!(config.guardian.brain_address, DEFAULT_BRAIN_ADDRESS);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[guardian]
brain_url = "ws://10.0.0.2:8001"

[brain]
knowledge_graph = "knowledge/medical.graph"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.guardian.brain_url.as_deref(), Some("ws://10.0.0.2:8001"));
        assert_eq!(config.guardian.listen.port(), 8000);
        assert_eq!(
            config.brain.knowledge_graph,
            Some(PathBuf::from("knowledge/medical.graph"))
        );
        assert_eq!(config.logging.filter, "info,healthguard=debug");
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[guardian]\nlisten = 42").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
