use crate::core::config::ApiConfig;
use crate::core::fund::{
    AdvisorQuery, BenchmarkAnalysisResponse, FundApi, FundMetrics, SmartAdvisorResponse,
};
use crate::core::readiness::HealthStatus;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// [`FundApi`] backed by the analytics REST service.
pub struct HttpFundApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFundApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fundscope/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = format!("{}{}", self.base_url, path);
        Url::parse(&url).with_context(|| format!("Invalid API url: {url}"))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text from {url}"))?;

        if !status.is_success() {
            return Err(anyhow!("Request to {} failed with status {}", url, status));
        }

        match serde_json::from_str(&response_text) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!(
                    error = ?e,
                    response = %response_text,
                    "Failed to parse API response"
                );
                Err(e).with_context(|| format!("Failed to parse response from {url}"))
            }
        }
    }
}

#[async_trait]
impl FundApi for HttpFundApi {
    async fn get_top_funds(&self) -> Result<Vec<FundMetrics>> {
        let url = self.endpoint("/top5smallcap")?;
        self.get_json(url).await
    }

    async fn get_benchmark(&self) -> Result<BenchmarkAnalysisResponse> {
        let url = self.endpoint("/top5smallcap-benchmark")?;
        self.get_json(url).await
    }

    async fn get_smart_advisor(&self, query: &AdvisorQuery) -> Result<SmartAdvisorResponse> {
        let mut url = self.endpoint("/smart-advisor")?;
        url.query_pairs_mut()
            .extend_pairs(query.to_query_pairs());
        self.get_json(url).await
    }

    async fn check_health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("/")?;
        self.get_json(url).await
    }
}
