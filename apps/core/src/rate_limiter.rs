//! Submission Throttle - Sliding-window rate limiting for feedback intake.
//!
//! Tracks submission timestamps per client identifier (an IP address, or
//! "local" when none is known) and rejects submissions once the window is
//! full. State lives in memory only and resets on restart.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Idle clients are pruned once the map grows past this size
const MAX_TRACKED_CLIENTS: usize = 1024;

/// A sliding-window rate limiter keyed by client identifier.
pub struct SubmissionThrottle {
    /// Submission timestamps per client, pruned lazily
    windows: HashMap<String, Vec<Instant>>,
    /// Maximum submissions allowed within the window
    limit: usize,
    /// Length of the sliding window
    window: Duration,
}

impl SubmissionThrottle {
    /// Create a throttle with a one-minute window
    pub fn per_minute(limit: usize) -> Self {
        Self::new(limit, Duration::from_secs(60))
    }

    /// Create a throttle with an explicit window
    pub fn new(limit: usize, window: Duration) -> Self {
        SubmissionThrottle {
            windows: HashMap::new(),
            limit,
            window,
        }
    }

    /// Record a submission attempt for the given client.
    ///
    /// Returns `true` and records the attempt when the client is under the
    /// limit, `false` when its window is already full.
    pub fn try_acquire(&mut self, client: &str) -> bool {
        let now = Instant::now();

        if self.windows.len() > MAX_TRACKED_CLIENTS {
            self.evict_idle(now);
        }

        // Instant cannot represent times before process start
        let window_start = now.checked_sub(self.window);

        let timestamps = self.windows.entry(client.to_string()).or_default();
        if let Some(start) = window_start {
            timestamps.retain(|&t| t > start);
        }

        if timestamps.len() < self.limit {
            timestamps.push(now);
            true
        } else {
            false
        }
    }

    /// Drop clients whose last submission is well outside the window
    fn evict_idle(&mut self, now: Instant) {
        let horizon = self.window * 5;
        self.windows.retain(|_, timestamps| {
            timestamps
                .last()
                .is_some_and(|&t| now.duration_since(t) < horizon)
        });
    }

    /// Number of clients currently tracked
    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_allows_submissions_within_limit() {
        let mut throttle = SubmissionThrottle::new(5, Duration::from_secs(1));
        for _ in 0..5 {
            assert!(throttle.try_acquire("client1"));
        }
        assert!(!throttle.try_acquire("client1"));
    }

    #[test]
    fn test_window_slides_past_old_submissions() {
        let mut throttle = SubmissionThrottle::new(2, Duration::from_millis(50));
        assert!(throttle.try_acquire("client2"));
        assert!(throttle.try_acquire("client2"));
        assert!(!throttle.try_acquire("client2"));

        thread::sleep(Duration::from_millis(60));

        assert!(throttle.try_acquire("client2"));
    }

    #[test]
    fn test_clients_are_limited_independently() {
        let mut throttle = SubmissionThrottle::new(1, Duration::from_secs(1));
        assert!(throttle.try_acquire("10.0.0.1"));
        assert!(!throttle.try_acquire("10.0.0.1"));
        assert!(throttle.try_acquire("10.0.0.2"));
    }

    #[test]
    fn test_evicts_long_idle_clients() {
        let mut throttle = SubmissionThrottle::new(5, Duration::from_millis(10));
        assert!(throttle.try_acquire("a"));
        assert!(throttle.try_acquire("b"));

        // Horizon is five windows, so 60ms leaves a and b stale
        thread::sleep(Duration::from_millis(60));
        assert!(throttle.try_acquire("c"));

        throttle.evict_idle(Instant::now());
        assert_eq!(throttle.tracked_clients(), 1);
    }
}
