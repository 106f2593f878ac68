//! Countrysrv - Country metadata lookup service
//!
//! This library provides the core functionality for countrysrv,
//! which serves country metadata (capital, currency, phone code, continent,
//! time zones) keyed by country name or ISO alpha-2 code.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::services::country::CountryService;
use crate::services::gate::AccessGate;
use crate::services::rate_limit::RateLimiter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub country_service: Arc<CountryService>,
    pub gate: Arc<dyn AccessGate>,
    pub rate_limiter: Arc<RateLimiter>,
}
