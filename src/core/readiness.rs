//! Bounded polling of a health-check operation.
//!
//! The prober answers one question: has the backing service become
//! available within a fixed number of attempts? Transport errors and
//! not-ready responses are treated the same way and only ever surface as
//! a single [`ReadinessOutcome::TimedOut`].

use anyhow::{Result, bail};
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Message the health endpoint returns once the service is ready.
pub const READY_SENTINEL: &str = "OK";

/// Response of a single health-check call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

impl HealthStatus {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.message == READY_SENTINEL
    }
}

/// Terminal result of one probing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessOutcome {
    Ready,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    max_attempts: u32,
    delay: Duration,
}

impl ProbeConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 15;
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(max_attempts: u32, delay: Duration) -> Result<Self> {
        if max_attempts == 0 {
            bail!("Probe requires at least one attempt");
        }
        Ok(Self {
            max_attempts,
            delay,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }
}

/// Polls `health_check` until it reports ready or the attempt budget runs out
///
/// # Parameters
/// - `health_check`: Closure returning a future for one health-check call
/// - `config`: Attempt budget and delay between attempts
///
/// # Returns
/// [`ReadinessOutcome::Ready`] as soon as a call returns the `"OK"` sentinel,
/// [`ReadinessOutcome::TimedOut`] after `max_attempts` unsuccessful calls.
/// No delay follows the final attempt.
pub async fn probe<F, Fut>(mut health_check: F, config: &ProbeConfig) -> ReadinessOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<HealthStatus>>,
{
    let mut attempts = 0;
    loop {
        match health_check().await {
            Ok(status) if status.is_ready() => {
                info!(attempt = attempts + 1, "Service is ready");
                return ReadinessOutcome::Ready;
            }
            Ok(status) => {
                debug!(
                    "Attempt {}/{}: service not ready ({})",
                    attempts + 1,
                    config.max_attempts,
                    status.message
                );
            }
            Err(err) => {
                debug!(
                    "Attempt {}/{} failed: {}",
                    attempts + 1,
                    config.max_attempts,
                    err
                );
            }
        }

        attempts += 1;
        if attempts >= config.max_attempts {
            warn!(attempts, "Service did not become ready");
            return ReadinessOutcome::TimedOut;
        }
        tokio::time::sleep(config.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// Replays a scripted sequence of health-check results, counting calls.
    /// Once the script is exhausted every call fails.
    #[derive(Clone)]
    struct ScriptedCheck {
        script: Arc<Mutex<VecDeque<Result<HealthStatus>>>>,
        calls: Arc<AtomicU32>,
    }

    impl ScriptedCheck {
        fn new(script: Vec<Result<HealthStatus>>) -> Self {
            Self {
                script: Arc::new(Mutex::new(script.into())),
                calls: Arc::new(AtomicU32::new(0)),
            }
        }

        fn always_failing() -> Self {
            Self::new(Vec::new())
        }

        async fn call(&self) -> Result<HealthStatus> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("connection refused")))
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn config(max_attempts: u32, delay_ms: u64) -> ProbeConfig {
        ProbeConfig::new(max_attempts, Duration::from_millis(delay_ms)).unwrap()
    }

    #[tokio::test]
    async fn test_times_out_after_exactly_max_attempts() {
        for n in [1, 2, 5, 15] {
            let check = ScriptedCheck::always_failing();
            let outcome = probe(|| check.call(), &config(n, 0)).await;

            assert_eq!(outcome, ReadinessOutcome::TimedOut);
            assert_eq!(check.calls(), n);
        }
    }

    #[tokio::test]
    async fn test_non_ok_message_counts_as_not_ready() {
        let check = ScriptedCheck::new(vec![
            Ok(HealthStatus::new("STARTING")),
            Ok(HealthStatus::new("ok")),
            Ok(HealthStatus::new("")),
        ]);
        let outcome = probe(|| check.call(), &config(3, 0)).await;

        assert_eq!(outcome, ReadinessOutcome::TimedOut);
        assert_eq!(check.calls(), 3);
    }

    #[tokio::test]
    async fn test_ready_on_first_attempt() {
        let check = ScriptedCheck::new(vec![Ok(HealthStatus::new("OK"))]);
        let outcome = probe(|| check.call(), &config(10, 0)).await;

        assert_eq!(outcome, ReadinessOutcome::Ready);
        assert_eq!(check.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_then_not_ok_then_ok_is_ready() {
        let check = ScriptedCheck::new(vec![
            Err(anyhow!("connection reset")),
            Ok(HealthStatus::new("NOT_OK")),
            Ok(HealthStatus::new("OK")),
        ]);
        let outcome = probe(|| check.call(), &config(3, 0)).await;

        assert_eq!(outcome, ReadinessOutcome::Ready);
        assert_eq!(check.calls(), 3);
    }

    #[tokio::test]
    async fn test_always_failing_with_two_attempts_times_out() {
        let check = ScriptedCheck::always_failing();
        let outcome = probe(|| check.call(), &config(2, 0)).await;

        assert_eq!(outcome, ReadinessOutcome::TimedOut);
        assert_eq!(check.calls(), 2);
    }

    #[tokio::test]
    async fn test_transport_errors_do_not_abort_run() {
        let check = ScriptedCheck::new(vec![
            Err(anyhow!("timeout")),
            Err(anyhow!("dns failure")),
            Err(anyhow!("connection refused")),
            Ok(HealthStatus::new("OK")),
        ]);
        let outcome = probe(|| check.call(), &config(5, 0)).await;

        assert_eq!(outcome, ReadinessOutcome::Ready);
        assert_eq!(check.calls(), 4);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let probe_config = config(4, 0);

        let first = ScriptedCheck::always_failing();
        let first_outcome = probe(|| first.call(), &probe_config).await;
        let second = ScriptedCheck::always_failing();
        let second_outcome = probe(|| second.call(), &probe_config).await;

        assert_eq!(first_outcome, ReadinessOutcome::TimedOut);
        assert_eq!(second_outcome, ReadinessOutcome::TimedOut);
        assert_eq!(first.calls(), second.calls());
        assert_eq!(first.calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_between_attempts_but_not_after_last() {
        let check = ScriptedCheck::always_failing();
        let start = tokio::time::Instant::now();
        let outcome = probe(|| check.call(), &config(3, 1500)).await;

        assert_eq!(outcome, ReadinessOutcome::TimedOut);
        // Two gaps between three attempts, none after the last one
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(4500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_after_success() {
        let check = ScriptedCheck::new(vec![
            Ok(HealthStatus::new("NOT_OK")),
            Ok(HealthStatus::new("OK")),
        ]);
        let start = tokio::time::Instant::now();
        let outcome = probe(|| check.call(), &config(10, 2000)).await;

        assert_eq!(outcome, ReadinessOutcome::Ready);
        assert_eq!(check.calls(), 2);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2000));
        assert!(elapsed < Duration::from_millis(4000));
    }

    #[test]
    fn test_probe_config_rejects_zero_attempts() {
        let result = ProbeConfig::new(0, Duration::ZERO);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("at least one attempt")
        );
    }

    #[test]
    fn test_probe_config_default() {
        let config = ProbeConfig::default();
        assert_eq!(config.max_attempts(), 15);
        assert_eq!(config.delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_health_status_deserialization_ignores_unknown_fields() {
        let status: HealthStatus =
            serde_json::from_str(r#"{"message": "OK", "version": "1.2"}"#).unwrap();
        assert!(status.is_ready());
    }
}
