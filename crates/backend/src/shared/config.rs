use chrono::NaiveDate;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (served as fallback)
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "dist".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}

/// How city and state are drawn for a synthetic order
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegionMode {
    /// City and state are drawn separately (pairs may not match)
    #[default]
    Independent,
    /// A city is drawn and the state follows from it
    Correlated,
}

/// Parameters of the synthetic demo dataset
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub seed: u64,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub region_mode: RegionMode,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            date_to: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            region_mode: RegionMode::Independent,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[dataset]
seed = 42
date_from = "2024-01-01"
date_to = "2024-12-31"
region_mode = "independent"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by the build script)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(config_path) = config_path_next_to_exe() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.dataset.date_from > config.dataset.date_to {
        anyhow::bail!(
            "dataset.date_from ({}) is after dataset.date_to ({})",
            config.dataset.date_from,
            config.dataset.date_to
        );
    }
    Ok(config)
}

fn config_path_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    exe_path.parent().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dataset.seed, 42);
        assert_eq!(config.dataset.date_from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(config.dataset.date_to, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(config.dataset.region_mode, RegionMode::Independent);
    }

    #[test]
    fn test_embedded_default_matches_struct_default() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.dataset, DatasetConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[dataset]\nseed = 7\nregion_mode = \"correlated\"\n").unwrap();
        assert_eq!(config.dataset.seed, 7);
        assert_eq!(config.dataset.region_mode, RegionMode::Correlated);
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let result = parse_config("[dataset]\ndate_from = \"2024-12-31\"\ndate_to = \"2024-01-01\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: "dist".to_string(),
        };
        assert_eq!(server.socket_addr().unwrap().port(), 8080);
    }
}
