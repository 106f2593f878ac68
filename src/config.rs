use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid AUTH_MODE '{0}', expected 'api-key' or 'gateway'")]
    InvalidAuthMode(String),
}

/// Access-control strategy, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateMode {
    ApiKey,
    Gateway,
}

pub struct Config {
    pub server_port: u16,
    pub assets_dir: String,
    pub auth_mode: GateMode,
    pub api_keys: Vec<String>,
    pub api_key_header: String,
    pub gateway_headers: Vec<String>,
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let auth_mode = match env::var("AUTH_MODE")
            .unwrap_or_else(|_| "api-key".to_string())
            .as_str()
        {
            "api-key" => GateMode::ApiKey,
            "gateway" => GateMode::Gateway,
            other => return Err(ConfigError::InvalidAuthMode(other.to_string())),
        };

        Ok(Self {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            assets_dir: env::var("ASSETS_DIR").unwrap_or_else(|_| "./assets".to_string()),
            auth_mode,
            api_keys: env::var("API_KEYS")
                .unwrap_or_else(|_| "".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            api_key_header: env::var("API_KEY_HEADER")
                .unwrap_or_else(|_| "x-api-key".to_string())
                .to_lowercase(),
            gateway_headers: env::var("GATEWAY_HEADERS")
                .unwrap_or_else(|_| "x-gateway-proxy-secret,x-gateway-host".to_string())
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            rate_limit_max: env::var("RATE_LIMIT_MAX")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),
            rate_limit_window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),
        })
    }

    pub fn dataset_path(&self) -> PathBuf {
        PathBuf::from(&self.assets_dir).join("countries.json")
    }
}
