//! Single-endpoint operations used by the screens.
//!
//! Each use case performs exactly one call against the [`FundApi`] and hands
//! back the decoded record. Failures stay in the returned `Result`; nothing
//! is retried here.

use super::fund::{
    AdvisorQuery, BenchmarkAnalysisResponse, FundApi, FundMetrics, SmartAdvisorResponse,
};
use super::readiness::{ProbeConfig, ReadinessOutcome, probe};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

pub struct GetTopFunds {
    api: Arc<dyn FundApi>,
}

impl GetTopFunds {
    pub fn new(api: Arc<dyn FundApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self) -> Result<Vec<FundMetrics>> {
        let funds = self
            .api
            .get_top_funds()
            .await
            .context("Failed to load top small cap funds")?;
        debug!(count = funds.len(), "Loaded top small cap funds");
        Ok(funds)
    }
}

pub struct GetBenchmarkAnalysis {
    api: Arc<dyn FundApi>,
}

impl GetBenchmarkAnalysis {
    pub fn new(api: Arc<dyn FundApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self) -> Result<BenchmarkAnalysisResponse> {
        let analysis = self
            .api
            .get_benchmark()
            .await
            .context("Failed to load benchmark analysis")?;
        debug!(
            benchmark = %analysis.benchmark,
            funds = analysis.funds.len(),
            "Loaded benchmark analysis"
        );
        Ok(analysis)
    }
}

pub struct GetSmartAdvisor {
    api: Arc<dyn FundApi>,
}

impl GetSmartAdvisor {
    pub fn new(api: Arc<dyn FundApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, query: &AdvisorQuery) -> Result<SmartAdvisorResponse> {
        let advice = self
            .api
            .get_smart_advisor(query)
            .await
            .context("Failed to load smart advisor recommendations")?;
        debug!(
            recommended = advice.recommended_funds.len(),
            "Loaded smart advisor recommendations"
        );
        Ok(advice)
    }
}

pub struct CheckApiHealth {
    api: Arc<dyn FundApi>,
}

impl CheckApiHealth {
    pub fn new(api: Arc<dyn FundApi>) -> Self {
        Self { api }
    }

    pub async fn wait_until_ready(&self, config: &ProbeConfig) -> ReadinessOutcome {
        probe(|| self.api.check_health(), config).await
    }
}
