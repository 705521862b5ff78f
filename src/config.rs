use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use crate::error::Result;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 0 disables the background refresh.
    #[serde(default)]
    pub refresh_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Bearer token -> user id.
    #[serde(default)]
    pub tokens: HashMap<String, String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_source_url() -> String { crate::sources::defillama::DEFAULT_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_page_size() -> usize { DEFAULT_PAGE_SIZE }
fn default_enabled() -> bool { true }
fn default_data_dir() -> String { "./data".to_string() }
fn default_sign_in_path() -> String { "/signin".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_secs: default_timeout_secs(),
            refresh_secs: 0,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            data_dir: default_data_dir(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            sign_in_path: default_sign_in_path(),
            tokens: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        if config.dashboard.page_size == 0 {
            tracing::warn!("dashboard.page_size = 0 is invalid, using {}", DEFAULT_PAGE_SIZE);
            config.dashboard.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }
}
