use super::{StateHolder, ViewState};
use crate::core::fund::FundMetrics;
use crate::core::usecase::GetTopFunds;
use anyhow::anyhow;
use tokio::sync::watch;

pub type FundListState = ViewState<Vec<FundMetrics>>;

pub struct FundListModel {
    use_case: GetTopFunds,
    state: StateHolder<FundListState>,
}

impl FundListModel {
    pub fn new(use_case: GetTopFunds) -> Self {
        Self {
            use_case,
            state: StateHolder::new(ViewState::Loading),
        }
    }

    /// Fetches the fund list. An empty list is reported as an error.
    pub async fn load(&self) -> FundListState {
        self.state.set(ViewState::Loading);

        let result = self.use_case.execute().await.and_then(|funds| {
            if funds.is_empty() {
                Err(anyhow!("No funds found"))
            } else {
                Ok(funds)
            }
        });
        let state = ViewState::from_result(result);
        self.state.set(state.clone());
        state
    }

    pub async fn refresh(&self) -> FundListState {
        self.load().await
    }

    pub fn state(&self) -> FundListState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<FundListState> {
        self.state.subscribe()
    }
}
