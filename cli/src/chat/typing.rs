//! # Typing Delay
//!
//! File: cli/src/chat/typing.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The pause before the assistant's reply appears, so it reads like someone
//! typing. Purely cosmetic: the reply is already decided before the wait
//! starts. The default is one second plus up to one more second of random
//! jitter.
//!
use rand::Rng;
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    base: Duration,
    jitter: Duration,
}

impl TypingDelay {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    pub fn from_millis(base_ms: u64, jitter_ms: u64) -> Self {
        Self::new(Duration::from_millis(base_ms), Duration::from_millis(jitter_ms))
    }

    /// No pause at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// `base` plus a uniformly random share of `jitter`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.jitter.is_zero() {
            return self.base;
        }
        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        self.base + Duration::from_millis(rng.random_range(0..=jitter_ms))
    }

    /// Sleeps for one sampled delay.
    pub async fn wait(&self) {
        let delay = self.sample(&mut rand::rng());
        trace!("Simulating typing for {:?}", delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self::from_millis(1000, 1000)
    }
}
