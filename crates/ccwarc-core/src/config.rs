use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// libcurl settings for fetching `warc.paths.gz` (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Hard limit in seconds for the whole transfer, including a slow consumer.
    pub timeout_secs: u64,
    /// Abort if throughput stays below this many bytes/sec for `low_speed_time_secs`.
    pub low_speed_limit: u32,
    pub low_speed_time_secs: u64,
    /// Maximum number of redirects followed.
    pub max_redirections: u32,
    /// Bytes buffered ahead of the reader before the transfer is paused.
    pub buffer_limit: usize,
    /// Optional User-Agent header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 600,
            low_speed_limit: 1024,
            low_speed_time_secs: 60,
            max_redirections: 10,
            buffer_limit: 256 * 1024,
            user_agent: None,
        }
    }
}

impl TransportConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn low_speed_time(&self) -> Duration {
        Duration::from_secs(self.low_speed_time_secs)
    }
}

/// Global configuration loaded from `~/.config/ccwarc/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcwarcConfig {
    /// Index fetch settings; built-in defaults are used when the section is missing.
    #[serde(default)]
    pub transport: TransportConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ccwarc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CcwarcConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CcwarcConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &std::path::Path) -> Result<CcwarcConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: CcwarcConfig = toml::from_str(&data)?;
    Ok(cfg)
}
