use axum::http::HeaderMap;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Rate-limit bucket key, derived per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClientId {
    ApiKey(String),
    Addr(IpAddr),
}

impl ClientId {
    /// Derives the identity for requests without a credential.
    ///
    /// Prefers the first parseable `X-Forwarded-For` entry (the gateway
    /// variant sits behind a proxy), falling back to the socket peer
    /// address. IPv4-mapped IPv6 addresses collapse to their IPv4 form so a
    /// dual-stack listener does not split one client across two buckets;
    /// every other IPv6 address keeps its full 128 bits as the key.
    pub fn from_addr(headers: &HeaderMap, peer_addr: SocketAddr) -> Self {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .and_then(|entry| entry.trim().parse::<IpAddr>().ok());

        Self::Addr(canonical_ip(forwarded.unwrap_or_else(|| peer_addr.ip())))
    }
}

fn canonical_ip(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => IpAddr::V4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        },
    }
}

#[derive(Debug)]
struct Bucket {
    count: u32,
    window_start: Instant,
}

/// Fixed-window request counter keyed by client identity.
///
/// State is process-local and resets on restart.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    buckets: Mutex<HashMap<ClientId, Bucket>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Admits or throttles a request arriving at `now`.
    pub fn admit(&self, identity: &ClientId, now: Instant) -> bool {
        let mut buckets = self.buckets.lock().expect("rate limiter mutex poisoned");

        let bucket = buckets.entry(identity.clone()).or_insert(Bucket {
            count: 0,
            window_start: now,
        });

        if now.duration_since(bucket.window_start) >= self.window {
            bucket.count = 0;
            bucket.window_start = now;
        }

        if bucket.count >= self.max_requests {
            false
        } else {
            bucket.count += 1;
            true
        }
    }
}
