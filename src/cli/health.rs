use super::ui;
use crate::screens::splash::{ReadinessGate, ReadinessState};
use anyhow::{Result, bail};

/// Runs one readiness probe behind a spinner.
async fn check_with_spinner(gate: &ReadinessGate) -> ReadinessState {
    let pb = ui::new_spinner("Waiting for the fund service...");
    let state = gate.check().await;
    pb.finish_and_clear();
    state
}

/// `health` command: reports whether the service is ready.
pub async fn run(gate: &ReadinessGate) -> Result<()> {
    match check_with_spinner(gate).await {
        ReadinessState::Ready => {
            println!("{}", ui::style_text("Service is ready", ui::StyleType::Success));
            Ok(())
        }
        ReadinessState::Error(message) => bail!(message),
        ReadinessState::Checking => bail!("Readiness check did not complete"),
    }
}

/// Blocks the data commands until the service is ready.
pub async fn ensure_ready(gate: &ReadinessGate) -> Result<()> {
    match check_with_spinner(gate).await {
        ReadinessState::Ready => Ok(()),
        ReadinessState::Error(message) => bail!(message),
        ReadinessState::Checking => bail!("Readiness check did not complete"),
    }
}
