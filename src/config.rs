use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::models::CartItem;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// Users and carts preloaded into the in-memory order service
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for every API route, e.g. `/api/v1`
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SeedUser {
    pub user_id: u64,
    #[serde(default)]
    pub cart: Vec<CartItem>,
}

impl AppConfig {
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", config_path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let mut config: Self = serde_yaml::from_str(content)?;
        config.gateway.api_prefix = normalize_prefix(&config.gateway.api_prefix);
        Ok(config)
    }
}

/// Leading slash, no trailing slash; empty stays empty
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
