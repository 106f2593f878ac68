//! Tests for the fixed-window rate limiter and client identity derivation.

use axum::http::HeaderMap;
use countrysrv::services::rate_limit::{ClientId, RateLimiter};
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};

fn peer(addr: &str) -> SocketAddr {
    addr.parse().unwrap()
}

#[test]
fn admits_up_to_max_then_throttles() {
    let limiter = RateLimiter::new(3, Duration::from_secs(60));
    let identity = ClientId::ApiKey("client-a".to_string());
    let now = Instant::now();

    for _ in 0..3 {
        assert!(limiter.admit(&identity, now));
    }
    assert!(!limiter.admit(&identity, now));
}

#[test]
fn counter_resets_after_window_elapses() {
    let window = Duration::from_secs(60);
    let limiter = RateLimiter::new(2, window);
    let identity = ClientId::ApiKey("client-b".to_string());
    let start = Instant::now();

    assert!(limiter.admit(&identity, start));
    assert!(limiter.admit(&identity, start));
    assert!(!limiter.admit(&identity, start));

    let later = start + window;
    assert!(limiter.admit(&identity, later));
}

#[test]
fn buckets_are_scoped_per_identity() {
    let limiter = RateLimiter::new(1, Duration::from_secs(60));
    let now = Instant::now();

    let a = ClientId::ApiKey("key-a".to_string());
    let b = ClientId::ApiKey("key-b".to_string());

    assert!(limiter.admit(&a, now));
    assert!(!limiter.admit(&a, now));
    assert!(limiter.admit(&b, now));
}

#[test]
fn distinct_ipv6_addresses_get_distinct_buckets() {
    // Same /64 prefix, different interface identifiers.
    let first = ClientId::from_addr(&HeaderMap::new(), peer("[2001:db8:1:1::1]:443"));
    let second = ClientId::from_addr(&HeaderMap::new(), peer("[2001:db8:1:1::2]:443"));
    assert_ne!(first, second);

    let limiter = RateLimiter::new(1, Duration::from_secs(60));
    let now = Instant::now();
    assert!(limiter.admit(&first, now));
    assert!(!limiter.admit(&first, now));
    assert!(limiter.admit(&second, now));
}

#[test]
fn ipv4_mapped_ipv6_collapses_to_ipv4() {
    let mapped = ClientId::from_addr(&HeaderMap::new(), peer("[::ffff:203.0.113.7]:1234"));
    let plain = ClientId::from_addr(&HeaderMap::new(), peer("203.0.113.7:5678"));
    assert_eq!(mapped, plain);
}

#[test]
fn forwarded_header_takes_precedence_over_peer_address() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", "203.0.113.9, 10.0.0.1".parse().unwrap());

    let identity = ClientId::from_addr(&headers, peer("127.0.0.1:80"));
    assert_eq!(
        identity,
        ClientId::Addr("203.0.113.9".parse::<IpAddr>().unwrap())
    );
}

#[test]
fn unparseable_forwarded_header_falls_back_to_peer() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", "not-an-address".parse().unwrap());

    let identity = ClientId::from_addr(&headers, peer("192.0.2.4:80"));
    assert_eq!(
        identity,
        ClientId::Addr("192.0.2.4".parse::<IpAddr>().unwrap())
    );
}

#[test]
fn forwarded_ipv6_keeps_full_address() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", "2001:db8::42".parse().unwrap());

    let identity = ClientId::from_addr(&headers, peer("127.0.0.1:80"));
    assert_eq!(
        identity,
        ClientId::Addr("2001:db8::42".parse::<IpAddr>().unwrap())
    );
}
