//! Tests for environment-sourced configuration.
//!
//! All environment manipulation lives in a single test function so parallel
//! test threads never observe each other's variables.

use countrysrv::config::{Config, GateMode};
use std::env;

#[test]
fn configuration_from_environment() {
    env::remove_var("AUTH_MODE");
    let config = Config::from_env().unwrap();
    assert_eq!(config.auth_mode, GateMode::ApiKey);
    assert_eq!(config.server_port, 3000);
    assert_eq!(config.api_key_header, "x-api-key");
    assert_eq!(
        config.gateway_headers,
        vec![
            "x-gateway-proxy-secret".to_string(),
            "x-gateway-host".to_string()
        ]
    );
    assert_eq!(config.rate_limit_max, 60);
    assert_eq!(config.rate_limit_window_secs, 60);
    assert!(config.dataset_path().ends_with("countries.json"));

    env::set_var("AUTH_MODE", "gateway");
    let config = Config::from_env().unwrap();
    assert_eq!(config.auth_mode, GateMode::Gateway);

    env::set_var("AUTH_MODE", "both");
    assert!(Config::from_env().is_err());
    env::remove_var("AUTH_MODE");

    env::set_var("API_KEYS", " alpha , beta ,, ");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_keys, vec!["alpha".to_string(), "beta".to_string()]);
    env::remove_var("API_KEYS");
}
