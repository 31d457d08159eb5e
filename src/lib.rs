pub mod cli;
pub mod core;
pub mod providers;
pub mod screens;

use crate::core::config::AppConfig;
use crate::core::usecase::{CheckApiHealth, GetBenchmarkAnalysis, GetSmartAdvisor, GetTopFunds};
use crate::core::{AdvisorQuery, FundApi, ProbeConfig, SortField};
use crate::providers::HttpFundApi;
use crate::screens::advisor::SmartAdvisorModel;
use crate::screens::benchmark::BenchmarkModel;
use crate::screens::funds::FundListModel;
use crate::screens::splash::ReadinessGate;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Health,
    Funds { sort: SortField },
    Benchmark,
    Advisor(AdvisorQuery),
    Overview { sort: SortField },
}

/// Every screen model, wired to one shared API client.
pub struct App {
    pub readiness: ReadinessGate,
    pub funds: FundListModel,
    pub benchmark: BenchmarkModel,
    pub advisor: SmartAdvisorModel,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let api: Arc<dyn FundApi> = Arc::new(HttpFundApi::new(&config.api)?);
        Ok(Self::with_api(api, config.probe.to_probe_config()?))
    }

    pub fn with_api(api: Arc<dyn FundApi>, probe: ProbeConfig) -> Self {
        Self {
            readiness: ReadinessGate::new(CheckApiHealth::new(Arc::clone(&api)), probe),
            funds: FundListModel::new(GetTopFunds::new(Arc::clone(&api))),
            benchmark: BenchmarkModel::new(GetBenchmarkAnalysis::new(Arc::clone(&api))),
            advisor: SmartAdvisorModel::new(GetSmartAdvisor::new(api)),
        }
    }
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    skip_health: bool,
) -> Result<()> {
    info!("fundscope starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let app = App::new(&config)?;

    if command == AppCommand::Health {
        return cli::health::run(&app.readiness).await;
    }
    if !skip_health {
        cli::health::ensure_ready(&app.readiness).await?;
    }

    match command {
        AppCommand::Health => Ok(()),
        AppCommand::Funds { sort } => cli::funds::run(&app.funds, sort).await,
        AppCommand::Benchmark => cli::benchmark::run(&app.benchmark).await,
        AppCommand::Advisor(query) => cli::advisor::run(&app.advisor, query).await,
        AppCommand::Overview { sort } => cli::overview::run(&app, sort).await,
    }
}
