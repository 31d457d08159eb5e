use super::{StateHolder, ViewState};
use crate::core::fund::BenchmarkAnalysisResponse;
use crate::core::usecase::GetBenchmarkAnalysis;
use tokio::sync::watch;

pub type BenchmarkState = ViewState<BenchmarkAnalysisResponse>;

pub struct BenchmarkModel {
    use_case: GetBenchmarkAnalysis,
    state: StateHolder<BenchmarkState>,
}

impl BenchmarkModel {
    pub fn new(use_case: GetBenchmarkAnalysis) -> Self {
        Self {
            use_case,
            state: StateHolder::new(ViewState::Loading),
        }
    }

    pub async fn load(&self) -> BenchmarkState {
        self.state.set(ViewState::Loading);
        let state = ViewState::from_result(self.use_case.execute().await);
        self.state.set(state.clone());
        state
    }

    pub async fn refresh(&self) -> BenchmarkState {
        self.load().await
    }

    pub fn state(&self) -> BenchmarkState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<BenchmarkState> {
        self.state.subscribe()
    }
}
