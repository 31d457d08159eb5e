//! Core business logic abstractions

pub mod config;
pub mod format;
pub mod fund;
pub mod log;
pub mod readiness;
pub mod usecase;

// Re-export main types for cleaner imports
pub use fund::{
    AdvisorQuery, BenchmarkAnalysisResponse, FundApi, FundMetrics, InvestmentHorizon,
    RiskTolerance, SharpeCategory, SmartAdvisorResponse, SortField,
};
pub use readiness::{HealthStatus, ProbeConfig, ReadinessOutcome};
