use super::StateHolder;
use crate::core::readiness::{ProbeConfig, ReadinessOutcome};
use crate::core::usecase::CheckApiHealth;
use tokio::sync::watch;
use tracing::info;

pub const NOT_RESPONDING: &str = "API service is not responding. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadinessState {
    Checking,
    Ready,
    Error(String),
}

impl From<ReadinessOutcome> for ReadinessState {
    fn from(outcome: ReadinessOutcome) -> Self {
        match outcome {
            ReadinessOutcome::Ready => ReadinessState::Ready,
            ReadinessOutcome::TimedOut => ReadinessState::Error(NOT_RESPONDING.to_string()),
        }
    }
}

/// Gates the data screens until the service answers its health check.
///
/// `Ready` and `Error` are terminal for a run; calling [`check`](Self::check)
/// again starts a fresh run with the same probe config.
pub struct ReadinessGate {
    use_case: CheckApiHealth,
    config: ProbeConfig,
    state: StateHolder<ReadinessState>,
}

impl ReadinessGate {
    pub fn new(use_case: CheckApiHealth, config: ProbeConfig) -> Self {
        Self {
            use_case,
            config,
            state: StateHolder::new(ReadinessState::Checking),
        }
    }

    pub async fn check(&self) -> ReadinessState {
        self.state.set(ReadinessState::Checking);
        info!(
            max_attempts = self.config.max_attempts(),
            "Checking API health"
        );

        let outcome = self.use_case.wait_until_ready(&self.config).await;
        let state = ReadinessState::from(outcome);
        self.state.set(state.clone());
        state
    }

    pub fn state(&self) -> ReadinessState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ReadinessState> {
        self.state.subscribe()
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}
