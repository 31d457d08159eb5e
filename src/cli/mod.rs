pub mod advisor;
pub mod benchmark;
pub mod funds;
pub mod health;
pub mod overview;
pub mod setup;
pub mod ui;

use crate::screens::ViewState;
use anyhow::{Result, bail};

/// Unwraps a finished screen state. The error is left for the caller to
/// report.
pub(crate) fn view_result<T>(state: ViewState<T>) -> Result<T> {
    match state {
        ViewState::Success(value) => Ok(value),
        ViewState::Error(message) => bail!(message),
        ViewState::Loading => bail!("Screen is still loading"),
    }
}
