use crate::config::{Config, GateMode};
use axum::http::HeaderMap;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Invalid or missing API key")]
    InvalidApiKey,
    #[error("Request did not arrive through the upstream gateway")]
    MissingGatewayHeaders,
}

/// Access-control strategy run before any other request work.
///
/// `Ok(Some(credential))` carries the credential the rate limiter should
/// bucket on; `Ok(None)` means authorized without one (the client network
/// address is used instead).
pub trait AccessGate: Send + Sync {
    fn authorize(&self, headers: &HeaderMap) -> Result<Option<String>, GateError>;
}

/// Authorizes requests whose credential header is in a configured allow-set.
pub struct KeyedGate {
    header_name: String,
    allowed_keys: HashSet<String>,
}

impl KeyedGate {
    pub fn new(header_name: &str, keys: &[String]) -> Self {
        Self {
            header_name: header_name.to_lowercase(),
            allowed_keys: keys.iter().cloned().collect(),
        }
    }
}

impl AccessGate for KeyedGate {
    fn authorize(&self, headers: &HeaderMap) -> Result<Option<String>, GateError> {
        let key = headers
            .get(&self.header_name)
            .and_then(|value| value.to_str().ok())
            .ok_or(GateError::InvalidApiKey)?;

        if self.allowed_keys.contains(key) {
            Ok(Some(key.to_string()))
        } else {
            Err(GateError::InvalidApiKey)
        }
    }
}

/// Authorizes requests that carry every gateway-injected header.
///
/// Presence alone is the proof of arrival through the trusted upstream
/// gateway; values are not validated.
pub struct UpstreamGate {
    required_headers: Vec<String>,
}

impl UpstreamGate {
    pub fn new(required_headers: &[String]) -> Self {
        Self {
            required_headers: required_headers.iter().map(|h| h.to_lowercase()).collect(),
        }
    }
}

impl AccessGate for UpstreamGate {
    fn authorize(&self, headers: &HeaderMap) -> Result<Option<String>, GateError> {
        if self
            .required_headers
            .iter()
            .all(|name| headers.contains_key(name))
        {
            Ok(None)
        } else {
            Err(GateError::MissingGatewayHeaders)
        }
    }
}

/// Builds the gate variant the deployment configuration selected.
pub fn from_config(config: &Config) -> Arc<dyn AccessGate> {
    match config.auth_mode {
        GateMode::ApiKey => Arc::new(KeyedGate::new(&config.api_key_header, &config.api_keys)),
        GateMode::Gateway => Arc::new(UpstreamGate::new(&config.gateway_headers)),
    }
}
