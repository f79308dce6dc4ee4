//! In-memory rate limiting for download requests.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`.
//! Each client IP may issue at most `limit` downloads per `window`; older
//! timestamps are pruned lazily on the next check for that client. At most
//! once per window every client is pruned and clients left with no requests
//! are dropped, so the map only holds recently active addresses.

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limit exceeded (max {limit} requests/{window_secs}s)")]
    Exceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Default)]
struct Windows {
    clients: HashMap<IpAddr, VecDeque<Instant>>,
    last_sweep: Option<Instant>,
}

impl Windows {
    /// Drop clients with no requests inside `window`, at most once per window.
    fn sweep_stale(&mut self, now: Instant, window: Duration) {
        match self.last_sweep {
            Some(last) if now.duration_since(last) < window => return,
            Some(_) => self.clients.retain(|_, deque| {
                prune_window(deque, now, window);
                !deque.is_empty()
            }),
            None => {}
        }
        self.last_sweep = Some(now);
    }
}

#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<Mutex<Windows>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self { requests: Arc::new(Mutex::new(Windows::default())), limit, window }
    }

    /// Check the client's window, then record the request if allowed.
    pub fn check_and_record(&self, client: IpAddr) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, client: IpAddr, now: Instant) -> Result<(), RateLimitError> {
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        requests.sweep_stale(now, self.window);
        let deque = requests.clients.entry(client).or_default();
        prune_window(deque, now, self.window);
        if deque.len() >= self.limit {
            return Err(RateLimitError::Exceeded { limit: self.limit, window_secs: self.window.as_secs() });
        }
        deque.push_back(now);
        Ok(())
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clients
            .len()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) >= window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
