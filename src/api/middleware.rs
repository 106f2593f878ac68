use crate::services::rate_limit::ClientId;
use crate::AppState;
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Instant;
use tracing::warn;

use super::error::ApiError;

/// Authorizes the request before any other work happens.
///
/// On success the derived [`ClientId`] is attached to the request
/// extensions for the rate limiter; on failure the pipeline stops here.
pub async fn gate(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let credential = match app_state.gate.authorize(request.headers()) {
        Ok(credential) => credential,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let identity = match credential {
        Some(key) => ClientId::ApiKey(key),
        None => ClientId::from_addr(request.headers(), peer_addr(&request)),
    };
    request.extensions_mut().insert(identity);

    next.run(request).await
}

/// Bounds the per-identity request rate, after the gate and before lookup.
pub async fn rate_limit(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let identity = match request.extensions().get::<ClientId>() {
        Some(identity) => identity.clone(),
        None => ClientId::from_addr(request.headers(), peer_addr(&request)),
    };

    if !app_state.rate_limiter.admit(&identity, Instant::now()) {
        warn!(client = ?identity, "Rate limit exceeded");
        return ApiError::Throttled.into_response();
    }

    next.run(request).await
}

fn peer_addr(request: &Request) -> SocketAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0)
        .unwrap_or_else(|| SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0))
}
