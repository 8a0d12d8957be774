use std::{
    net::{IpAddr, Ipv4Addr},
    time::{Duration, Instant},
};

use dashmap::DashMap;
use rocket::{
    State,
    http::Status,
    outcome::try_outcome,
    request::{self, FromRequest, Request},
};
use tracing::warn;

use crate::config::env_or;

#[derive(Debug)]
struct TokenBucket {
    last_refill: Instant,
    tokens: u32,
    capacity: u32,
    refill_interval: Duration,
}

impl TokenBucket {
    fn new(capacity: u32, refill_interval: Duration) -> Self {
        Self {
            last_refill: Instant::now(),
            tokens: capacity,
            capacity,
            refill_interval,
        }
    }

    fn try_consume(&mut self) -> bool {
        self.refill();
        if self.tokens > 0 {
            self.tokens -= 1;
            true
        } else {
            false
        }
    }

    /// Tops the bucket back up to capacity once per elapsed interval.
    fn refill(&mut self) {
        if self.last_refill.elapsed() >= self.refill_interval {
            self.tokens = self.capacity;
            self.last_refill = Instant::now();
        }
    }
}

/// Per-client limit on game creation.
#[derive(Debug)]
pub struct RateLimiter {
    buckets: DashMap<IpAddr, TokenBucket>,
    capacity: u32,
    refill_interval: Duration,
}

impl RateLimiter {
    pub fn new(capacity: u32, refill_interval: Duration) -> Self {
        Self {
            buckets: DashMap::new(),
            capacity,
            refill_interval,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            env_or("RATE_LIMIT_GAMES_PER_MINUTE", 10),
            Duration::from_secs(60),
        )
    }

    pub fn check(&self, client_ip: &ClientIp) -> Result<(), Status> {
        let mut bucket = self
            .buckets
            .entry(client_ip.0)
            .or_insert_with(|| TokenBucket::new(self.capacity, self.refill_interval));

        if bucket.try_consume() {
            Ok(())
        } else {
            warn!("Rate limit exceeded for client {}", client_ip.0);
            Err(Status::TooManyRequests)
        }
    }
}

#[derive(Debug)]
pub struct ClientIp(pub IpAddr);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientIp {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let ip = req
            .headers()
            .get_one("X-Forwarded-For")
            .and_then(|header| header.split(',').next())
            .and_then(|ip| ip.trim().parse().ok())
            .or_else(|| {
                req.headers()
                    .get_one("X-Real-IP")
                    .and_then(|ip| ip.parse().ok())
            })
            .or_else(|| req.client_ip())
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));

        request::Outcome::Success(ClientIp(ip))
    }
}

/// Request guard that admits a game creation if the client still has budget.
#[derive(Debug)]
pub struct CreationPermit;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CreationPermit {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let client_ip = try_outcome!(req.guard::<ClientIp>().await);
        let rate_limiter = try_outcome!(req.guard::<&State<RateLimiter>>().await);

        match rate_limiter.check(&client_ip) {
            Ok(()) => request::Outcome::Success(CreationPermit),
            Err(status) => request::Outcome::Error((status, ())),
        }
    }
}
