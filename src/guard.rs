//! Sliding-window admission guard with a per-client cooldown.
//!
//! Every generation endpoint asks the guard whether a client may proceed
//! before the upstream model is called. State lives in memory for the life
//! of the process and resets on restart; admission is advisory, not a
//! durability guarantee. Single-process deployment is assumed.

use std::time::{Duration, Instant};

use axum::http::HeaderMap;
use dashmap::DashMap;
use thiserror::Error;

/// Bucket used when no client address can be derived from the request.
/// Everything that lands here shares one request log.
pub const FALLBACK_CLIENT: &str = "unknown";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window must be greater than zero")]
    ZeroWindow,
    #[error("max_requests must be at least 1")]
    ZeroMaxRequests,
}

/// Immutable limits for the protected operation. Validated on construction;
/// a bad value is a deployment error, not a per-request condition. A zero
/// cooldown is valid (the window bound alone applies).
#[derive(Debug, Clone, Copy)]
pub struct GuardConfig {
    window: Duration,
    max_requests: usize,
    cooldown: Duration,
}

impl GuardConfig {
    pub fn new(
        window: Duration,
        max_requests: usize,
        cooldown: Duration,
    ) -> Result<Self, ConfigError> {
        if window.is_zero() {
            return Err(ConfigError::ZeroWindow);
        }
        if max_requests == 0 {
            return Err(ConfigError::ZeroMaxRequests);
        }
        Ok(Self {
            window,
            max_requests,
            cooldown,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    CooldownActive,
    WindowExceeded,
}

/// Outcome of one admission check. Rejection is a normal result the caller
/// branches on, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Admitted,
    Rejected {
        reason: RejectReason,
        /// Waiting this long guarantees the next evaluation is admitted,
        /// assuming no other traffic on the same key in the meantime.
        retry_after: Duration,
    },
}

/// Per-client logs of admitted-request timestamps, keyed by [`client_key`].
pub struct AdmissionGuard {
    config: GuardConfig,
    clients: DashMap<String, Vec<Instant>>,
}

impl AdmissionGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config,
            clients: DashMap::new(),
        }
    }

    /// Decides whether `client_key` may issue a request at `now`, recording
    /// the timestamp on admission. The caller injects `now` so tests can
    /// drive the clock.
    ///
    /// The prune/check/append sequence for one key runs under the map
    /// entry's write lock: concurrent evaluations for the same key are
    /// serialized and cannot both slip under the limit. An admission never
    /// rolls back if the downstream call later fails.
    pub fn evaluate(&self, client_key: &str, now: Instant) -> Decision {
        self.sweep(now);

        let key = if client_key.is_empty() {
            FALLBACK_CLIENT
        } else {
            client_key
        };
        let mut entry = self.clients.entry(key.to_string()).or_default();
        let log = entry.value_mut();

        if let Some(cutoff) = now.checked_sub(self.config.window) {
            log.retain(|ts| *ts > cutoff);
        }

        // Cooldown before capacity: in a bursty retry loop it gives the
        // tighter, more immediately actionable estimate.
        if let Some(last) = log.last().copied() {
            let since_last = now.saturating_duration_since(last);
            if since_last < self.config.cooldown {
                return Decision::Rejected {
                    reason: RejectReason::CooldownActive,
                    retry_after: self.config.cooldown - since_last,
                };
            }
        }

        if log.len() >= self.config.max_requests {
            // Appends happen in clock order, so the front is the oldest.
            let oldest = log[0];
            return Decision::Rejected {
                reason: RejectReason::WindowExceeded,
                retry_after: self.config.window - now.saturating_duration_since(oldest),
            };
        }

        log.push(now);
        Decision::Admitted
    }

    /// Drops aged-out timestamps for every client and removes clients whose
    /// log emptied, so one-off callers do not accumulate. Runs on every
    /// evaluation.
    pub fn sweep(&self, now: Instant) {
        let Some(cutoff) = now.checked_sub(self.config.window) else {
            return;
        };
        self.clients.retain(|_, log| {
            log.retain(|ts| *ts > cutoff);
            !log.is_empty()
        });
    }

    /// Number of clients currently holding at least one in-window timestamp.
    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }
}

/// Best-effort client identity: first address in `x-forwarded-for`, then
/// `x-real-ip`, then the shared fallback bucket. Not authenticated.
pub fn client_key(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }
    FALLBACK_CLIENT.to_string()
}

// Ceiling to whole milliseconds, never zero.
fn ceil_millis(d: Duration) -> u64 {
    (d.as_nanos().div_ceil(1_000_000)).max(1) as u64
}

/// Client-facing 429 body text. Seconds are rounded up so a caller who
/// waits the stated time is eligible again.
pub fn retry_message(retry_after: Duration) -> String {
    let secs = ceil_millis(retry_after).div_ceil(1000);
    let plural = if secs == 1 { "" } else { "s" };
    format!("Too many requests. Try again in {secs} second{plural}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(window_ms: u64, max_requests: usize, cooldown_ms: u64) -> GuardConfig {
        GuardConfig::new(
            Duration::from_millis(window_ms),
            max_requests,
            Duration::from_millis(cooldown_ms),
        )
        .unwrap()
    }

    fn guard(window_ms: u64, max_requests: usize, cooldown_ms: u64) -> AdmissionGuard {
        AdmissionGuard::new(config(window_ms, max_requests, cooldown_ms))
    }

    // Far enough ahead that `now - window` never underflows an Instant.
    fn base() -> Instant {
        Instant::now() + Duration::from_secs(24 * 3600)
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    fn rejected(reason: RejectReason, retry_ms: u64) -> Decision {
        Decision::Rejected {
            reason,
            retry_after: Duration::from_millis(retry_ms),
        }
    }

    #[test]
    fn admits_until_window_is_full() {
        let g = guard(60_000, 3, 0);
        let t0 = base();
        for i in 0..3 {
            assert_eq!(g.evaluate("1.2.3.4", at(t0, i)), Decision::Admitted);
        }
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 3)),
            rejected(RejectReason::WindowExceeded, 59_997)
        );
    }

    #[test]
    fn cooldown_rejects_even_under_capacity() {
        let g = guard(60_000, 20, 2_500);
        let t0 = base();
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 0)), Decision::Admitted);
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 1_000)),
            rejected(RejectReason::CooldownActive, 1_500)
        );
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 2_500)), Decision::Admitted);
    }

    #[test]
    fn window_expiry_restores_capacity() {
        let g = guard(60_000, 1, 0);
        let t0 = base();
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 0)), Decision::Admitted);
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 59_999)),
            rejected(RejectReason::WindowExceeded, 1)
        );
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 60_001)), Decision::Admitted);
    }

    #[test]
    fn keys_are_independent() {
        let g = guard(60_000, 1, 0);
        let t0 = base();
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 0)), Decision::Admitted);
        assert_eq!(g.evaluate("5.6.7.8", at(t0, 0)), Decision::Admitted);
        assert!(matches!(
            g.evaluate("1.2.3.4", at(t0, 1)),
            Decision::Rejected { .. }
        ));
        assert!(matches!(
            g.evaluate("5.6.7.8", at(t0, 2)),
            Decision::Rejected { .. }
        ));
    }

    #[test]
    fn one_shot_clients_are_garbage_collected() {
        let g = guard(60_000, 20, 0);
        let t0 = base();
        for i in 0..10_000 {
            assert_eq!(g.evaluate(&format!("10.0.{}.{}", i / 256, i % 256), t0), Decision::Admitted);
        }
        assert_eq!(g.tracked_clients(), 10_000);

        g.sweep(at(t0, 60_001));
        assert_eq!(g.tracked_clients(), 0);
    }

    #[test]
    fn evaluation_sweeps_other_clients() {
        let g = guard(60_000, 20, 0);
        let t0 = base();
        g.evaluate("1.2.3.4", at(t0, 0));
        g.evaluate("5.6.7.8", at(t0, 1));
        assert_eq!(g.tracked_clients(), 2);

        // A fresh client arriving after expiry drops the stale entries.
        g.evaluate("9.9.9.9", at(t0, 60_002));
        assert_eq!(g.tracked_clients(), 1);
    }

    #[test]
    fn waiting_exactly_retry_after_admits() {
        // Cooldown rejection.
        let g = guard(60_000, 20, 2_500);
        let t0 = base();
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 0)), Decision::Admitted);
        let Decision::Rejected { retry_after, .. } = g.evaluate("1.2.3.4", at(t0, 1_000)) else {
            panic!("expected rejection");
        };
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 1_000) + retry_after),
            Decision::Admitted
        );

        // Window rejection.
        let g = guard(60_000, 1, 0);
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 0)), Decision::Admitted);
        let Decision::Rejected { retry_after, .. } = g.evaluate("1.2.3.4", at(t0, 30_000)) else {
            panic!("expected rejection");
        };
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 30_000) + retry_after),
            Decision::Admitted
        );
    }

    #[test]
    fn full_window_scenario() {
        // 20 spaced admissions fill the window; the 21st must wait for the
        // oldest timestamp to age out.
        let g = guard(60_000, 20, 2_500);
        let t0 = base();
        for i in 0..20 {
            assert_eq!(g.evaluate("1.2.3.4", at(t0, i * 2_500)), Decision::Admitted);
        }
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 50_000)),
            rejected(RejectReason::WindowExceeded, 10_000)
        );
    }

    #[test]
    fn cooldown_is_checked_before_capacity() {
        let g = guard(60_000, 1, 2_500);
        let t0 = base();
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 0)), Decision::Admitted);
        // Both constraints are violated here; cooldown wins.
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 1_000)),
            rejected(RejectReason::CooldownActive, 1_500)
        );
    }

    #[test]
    fn rejection_does_not_record_a_timestamp() {
        let g = guard(60_000, 20, 5_000);
        let t0 = base();
        assert_eq!(g.evaluate("1.2.3.4", at(t0, 0)), Decision::Admitted);
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 1_000)),
            rejected(RejectReason::CooldownActive, 4_000)
        );
        // Retry delay still counts from the admitted request, not the
        // rejected one.
        assert_eq!(
            g.evaluate("1.2.3.4", at(t0, 2_000)),
            rejected(RejectReason::CooldownActive, 3_000)
        );
    }

    #[test]
    fn empty_key_shares_the_fallback_bucket() {
        let g = guard(60_000, 1, 0);
        let t0 = base();
        assert_eq!(g.evaluate("", at(t0, 0)), Decision::Admitted);
        assert!(matches!(
            g.evaluate(FALLBACK_CLIENT, at(t0, 1)),
            Decision::Rejected {
                reason: RejectReason::WindowExceeded,
                ..
            }
        ));
    }

    #[test]
    fn config_is_validated() {
        assert!(matches!(
            GuardConfig::new(Duration::ZERO, 20, Duration::ZERO),
            Err(ConfigError::ZeroWindow)
        ));
        assert!(matches!(
            GuardConfig::new(Duration::from_millis(60_000), 0, Duration::ZERO),
            Err(ConfigError::ZeroMaxRequests)
        ));
        assert!(GuardConfig::new(Duration::from_millis(60_000), 1, Duration::ZERO).is_ok());
    }

    #[test]
    fn retry_message_rounds_up_and_pluralizes() {
        assert_eq!(
            retry_message(Duration::from_millis(1_500)),
            "Too many requests. Try again in 2 seconds."
        );
        assert_eq!(
            retry_message(Duration::from_millis(1_000)),
            "Too many requests. Try again in 1 second."
        );
        assert_eq!(
            retry_message(Duration::from_millis(10_000)),
            "Too many requests. Try again in 10 seconds."
        );
        // Sub-millisecond remainders still tell the caller to wait.
        assert_eq!(
            retry_message(Duration::from_micros(100)),
            "Too many requests. Try again in 1 second."
        );
    }

    #[test]
    fn client_key_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "1.2.3.4, 5.6.7.8".parse().unwrap());
        headers.insert("x-real-ip", "9.9.9.9".parse().unwrap());
        assert_eq!(client_key(&headers), "1.2.3.4");
    }

    #[test]
    fn client_key_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "  ".parse().unwrap());
        headers.insert("x-real-ip", "9.9.9.9".parse().unwrap());
        assert_eq!(client_key(&headers), "9.9.9.9");

        assert_eq!(client_key(&HeaderMap::new()), FALLBACK_CLIENT);
    }
}
