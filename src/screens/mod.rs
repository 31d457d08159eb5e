//! Per-screen state holders.
//!
//! Each screen owns a [`StateHolder`] and publishes every transition through
//! a `tokio::sync::watch` channel. Renderers either read the current value
//! or subscribe and wait for changes.

pub mod advisor;
pub mod benchmark;
pub mod funds;
pub mod splash;

use anyhow::Result;
use tokio::sync::watch;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Loading / success / error state shared by the data screens.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => ViewState::Success(value),
            Err(e) => ViewState::Error(error_message(&e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Human-readable text for an error, including its causes.
pub fn error_message(error: &anyhow::Error) -> String {
    let message = format!("{error:#}");
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

/// Single-writer observable value.
pub struct StateHolder<S> {
    tx: watch::Sender<S>,
}

impl<S: Clone> StateHolder<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn set(&self, state: S) {
        self.tx.send_replace(state);
    }

    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }
}
