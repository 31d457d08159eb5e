//! Fund records returned by the analytics service and the API abstraction

use super::readiness::HealthStatus;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FundMetrics {
    pub scheme_code: i64,
    pub fund_name: String,
    #[serde(default)]
    pub recommendation: String,
    pub returns_3m_pct: Option<f64>,
    pub returns_6m_pct: Option<f64>,
    pub returns_1y_pct: Option<f64>,
    pub cagr_full_pct: Option<f64>,
    pub cagr_1y_pct: Option<f64>,
    pub cagr_2y_pct: Option<f64>,
    pub cagr_3y_pct: Option<f64>,
    pub cagr_5y_pct: Option<f64>,
    pub volatility_pct: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub max_drawdown_pct: Option<f64>,
}

impl FundMetrics {
    pub fn sharpe_category(&self) -> SharpeCategory {
        SharpeCategory::from_ratio(self.sharpe_ratio)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkFundMetrics {
    pub scheme_code: i64,
    pub fund_name: String,
    pub returns_3m_pct: Option<f64>,
    pub returns_6m_pct: Option<f64>,
    pub returns_1y_pct: Option<f64>,
    pub cagr_full_pct: Option<f64>,
    pub cagr_1y_pct: Option<f64>,
    pub cagr_2y_pct: Option<f64>,
    pub cagr_3y_pct: Option<f64>,
    pub cagr_5y_pct: Option<f64>,
    pub volatility_pct: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub max_drawdown_pct: Option<f64>,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationGuide {
    #[serde(rename = "STRONG BUY")]
    pub strong_buy: String,
    #[serde(rename = "BUY")]
    pub buy: String,
    #[serde(rename = "HOLD")]
    pub hold: String,
    #[serde(rename = "AVOID")]
    pub avoid: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkAnalysisResponse {
    pub funds: Vec<BenchmarkFundMetrics>,
    pub benchmark: String,
    pub analysis_note: String,
    pub recommendation_guide: RecommendationGuide,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecommendedFundMetrics {
    pub scheme_code: i64,
    pub fund_name: String,
    pub alpha_pct: Option<f64>,
    pub volatility_pct: Option<f64>,
    pub risk_score: Option<i64>,
    pub sharpe_ratio: Option<f64>,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisSummary {
    pub total_funds_analyzed: Option<i64>,
    pub funds_with_positive_alpha: Option<i64>,
    pub average_alpha_pct: Option<f64>,
    pub average_volatility_pct: Option<f64>,
    pub market_outperformance: Option<String>,
}

impl Default for AnalysisSummary {
    fn default() -> Self {
        Self {
            total_funds_analyzed: Some(0),
            funds_with_positive_alpha: Some(0),
            average_alpha_pct: None,
            average_volatility_pct: None,
            market_outperformance: Some(String::new()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvestmentStrategy {
    pub primary_recommendation: String,
    pub strategy: String,
    pub horizon_note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioAllocation {
    pub small_cap_funds: String,
    pub large_cap_funds: String,
    pub recommendation: String,
    pub top_fund_suggestion: String,
}

/// Filters the service reports it used for a recommendation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FiltersApplied {
    pub risk_tolerance: String,
    pub investment_horizon: String,
    pub min_alpha_pct: f64,
    pub max_volatility_pct: f64,
}

impl Default for FiltersApplied {
    fn default() -> Self {
        Self {
            risk_tolerance: RiskTolerance::default().to_string(),
            investment_horizon: InvestmentHorizon::default().to_string(),
            min_alpha_pct: 0.0,
            max_volatility_pct: 25.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmartAdvisorResponse {
    pub recommended_funds: Vec<RecommendedFundMetrics>,
    pub analysis_summary: AnalysisSummary,
    pub investment_strategy: InvestmentStrategy,
    pub portfolio_allocation: PortfolioAllocation,
    pub market_outlook: String,
    pub risk_warnings: Vec<String>,
    pub filters_applied: FiltersApplied,
}

/// Quality bucket derived from a fund's Sharpe ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SharpeCategory {
    Excellent,
    Good,
    Poor,
    Unknown,
}

impl SharpeCategory {
    const EXCELLENT_THRESHOLD: f64 = 1.0;
    const GOOD_THRESHOLD: f64 = 0.5;

    pub fn from_ratio(ratio: Option<f64>) -> Self {
        match ratio {
            None => SharpeCategory::Unknown,
            Some(r) if r >= Self::EXCELLENT_THRESHOLD => SharpeCategory::Excellent,
            Some(r) if r >= Self::GOOD_THRESHOLD => SharpeCategory::Good,
            Some(_) => SharpeCategory::Poor,
        }
    }
}

impl Display for SharpeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SharpeCategory::Excellent => "Excellent",
                SharpeCategory::Good => "Good",
                SharpeCategory::Poor => "Poor",
                SharpeCategory::Unknown => "Unknown",
            }
        )
    }
}

/// Field the fund list can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Cagr5y,
    Cagr3y,
    Cagr1y,
    SharpeRatio,
}

impl SortField {
    pub fn value_of(&self, fund: &FundMetrics) -> Option<f64> {
        match self {
            SortField::Cagr5y => fund.cagr_5y_pct,
            SortField::Cagr3y => fund.cagr_3y_pct,
            SortField::Cagr1y => fund.cagr_1y_pct,
            SortField::SharpeRatio => fund.sharpe_ratio,
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortField::Cagr5y => "cagr5y",
                SortField::Cagr3y => "cagr3y",
                SortField::Cagr1y => "cagr1y",
                SortField::SharpeRatio => "sharpe",
            }
        )
    }
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cagr5y" | "5y" => Ok(SortField::Cagr5y),
            "cagr3y" | "3y" => Ok(SortField::Cagr3y),
            "cagr1y" | "1y" => Ok(SortField::Cagr1y),
            "sharpe" | "sharpe_ratio" => Ok(SortField::SharpeRatio),
            _ => Err(anyhow::anyhow!("Invalid sort field: {}", s)),
        }
    }
}

/// Sorts funds descending by `field`; funds without a value go last.
/// The sort is stable, so ties keep their original order.
pub fn sort_funds(funds: &mut [FundMetrics], field: SortField) {
    funds.sort_by(|a, b| {
        match (field.value_of(a), field.value_of(b)) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskTolerance::Conservative => "conservative",
                RiskTolerance::Moderate => "moderate",
                RiskTolerance::Aggressive => "aggressive",
            }
        )
    }
}

impl FromStr for RiskTolerance {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(RiskTolerance::Conservative),
            "moderate" => Ok(RiskTolerance::Moderate),
            "aggressive" => Ok(RiskTolerance::Aggressive),
            _ => Err(anyhow::anyhow!("Invalid risk tolerance: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvestmentHorizon {
    ShortTerm,
    MediumTerm,
    #[default]
    LongTerm,
}

impl Display for InvestmentHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InvestmentHorizon::ShortTerm => "short_term",
                InvestmentHorizon::MediumTerm => "medium_term",
                InvestmentHorizon::LongTerm => "long_term",
            }
        )
    }
}

impl FromStr for InvestmentHorizon {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "short_term" | "short" => Ok(InvestmentHorizon::ShortTerm),
            "medium_term" | "medium" => Ok(InvestmentHorizon::MediumTerm),
            "long_term" | "long" => Ok(InvestmentHorizon::LongTerm),
            _ => Err(anyhow::anyhow!("Invalid investment horizon: {}", s)),
        }
    }
}

/// Parameters of a smart advisor request. Absent thresholds are not sent.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorQuery {
    pub risk_tolerance: RiskTolerance,
    pub investment_horizon: InvestmentHorizon,
    pub min_alpha: Option<f64>,
    pub max_volatility: Option<f64>,
}

impl Default for AdvisorQuery {
    fn default() -> Self {
        Self {
            risk_tolerance: RiskTolerance::default(),
            investment_horizon: InvestmentHorizon::default(),
            min_alpha: Some(0.0),
            max_volatility: Some(25.0),
        }
    }
}

impl AdvisorQuery {
    /// Query parameters in wire order, skipping absent thresholds.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("risk_tolerance", self.risk_tolerance.to_string()),
            ("investment_horizon", self.investment_horizon.to_string()),
        ];
        if let Some(min_alpha) = self.min_alpha {
            pairs.push(("min_alpha", min_alpha.to_string()));
        }
        if let Some(max_volatility) = self.max_volatility {
            pairs.push(("max_volatility", max_volatility.to_string()));
        }
        pairs
    }
}

#[async_trait]
pub trait FundApi: Send + Sync {
    async fn get_top_funds(&self) -> Result<Vec<FundMetrics>>;
    async fn get_benchmark(&self) -> Result<BenchmarkAnalysisResponse>;
    async fn get_smart_advisor(&self, query: &AdvisorQuery) -> Result<SmartAdvisorResponse>;
    async fn check_health(&self) -> Result<HealthStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fund(name: &str, cagr_5y: Option<f64>, sharpe: Option<f64>) -> FundMetrics {
        FundMetrics {
            scheme_code: 1,
            fund_name: name.to_string(),
            recommendation: String::new(),
            returns_3m_pct: None,
            returns_6m_pct: None,
            returns_1y_pct: None,
            cagr_full_pct: None,
            cagr_1y_pct: None,
            cagr_2y_pct: None,
            cagr_3y_pct: None,
            cagr_5y_pct: cagr_5y,
            volatility_pct: None,
            sharpe_ratio: sharpe,
            max_drawdown_pct: None,
        }
    }

    fn names(funds: &[FundMetrics]) -> Vec<&str> {
        funds.iter().map(|f| f.fund_name.as_str()).collect()
    }

    #[test]
    fn test_sharpe_category() {
        assert_eq!(SharpeCategory::from_ratio(Some(1.2)), SharpeCategory::Excellent);
        assert_eq!(SharpeCategory::from_ratio(Some(1.0)), SharpeCategory::Excellent);
        assert_eq!(SharpeCategory::from_ratio(Some(0.6)), SharpeCategory::Good);
        assert_eq!(SharpeCategory::from_ratio(Some(0.5)), SharpeCategory::Good);
        assert_eq!(SharpeCategory::from_ratio(Some(0.2)), SharpeCategory::Poor);
        assert_eq!(SharpeCategory::from_ratio(Some(-0.4)), SharpeCategory::Poor);
        assert_eq!(SharpeCategory::from_ratio(None), SharpeCategory::Unknown);
        assert_eq!(
            fund("A", None, Some(0.7)).sharpe_category(),
            SharpeCategory::Good
        );
    }

    #[test]
    fn test_sort_descending_with_missing_values_last() {
        let mut funds = vec![
            fund("low", Some(10.0), None),
            fund("missing", None, Some(2.0)),
            fund("high", Some(30.0), Some(0.1)),
            fund("negative", Some(-5.0), Some(1.1)),
        ];

        sort_funds(&mut funds, SortField::Cagr5y);
        assert_eq!(names(&funds), vec!["high", "low", "negative", "missing"]);

        sort_funds(&mut funds, SortField::SharpeRatio);
        assert_eq!(names(&funds), vec!["missing", "negative", "high", "low"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut funds = vec![
            fund("first", Some(12.0), None),
            fund("second", Some(12.0), None),
            fund("none-a", None, None),
            fund("none-b", None, None),
        ];
        sort_funds(&mut funds, SortField::Cagr5y);
        assert_eq!(names(&funds), vec!["first", "second", "none-a", "none-b"]);
    }

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!("cagr5y".parse::<SortField>().unwrap(), SortField::Cagr5y);
        assert_eq!("3Y".parse::<SortField>().unwrap(), SortField::Cagr3y);
        assert_eq!("sharpe".parse::<SortField>().unwrap(), SortField::SharpeRatio);
        assert!("alpha".parse::<SortField>().is_err());
        assert_eq!(SortField::default(), SortField::Cagr5y);
    }

    #[test]
    fn test_advisor_query_pairs_skip_absent_thresholds() {
        let query = AdvisorQuery {
            risk_tolerance: RiskTolerance::Aggressive,
            investment_horizon: InvestmentHorizon::ShortTerm,
            min_alpha: None,
            max_volatility: Some(18.5),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("risk_tolerance", "aggressive".to_string()),
                ("investment_horizon", "short_term".to_string()),
                ("max_volatility", "18.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_advisor_enum_parsing() {
        assert_eq!(
            "Conservative".parse::<RiskTolerance>().unwrap(),
            RiskTolerance::Conservative
        );
        assert_eq!(
            "medium-term".parse::<InvestmentHorizon>().unwrap(),
            InvestmentHorizon::MediumTerm
        );
        assert!("reckless".parse::<RiskTolerance>().is_err());
        assert!("forever".parse::<InvestmentHorizon>().is_err());
    }

    #[test]
    fn test_fund_metrics_deserialization_with_missing_fields() {
        let json = r#"{
            "scheme_code": 125354,
            "fund_name": "Axis Small Cap Fund",
            "cagr_5y_pct": 28.41,
            "sharpe_ratio": null,
            "unexpected": "ignored"
        }"#;
        let fund: FundMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(fund.scheme_code, 125354);
        assert_eq!(fund.recommendation, "");
        assert_eq!(fund.cagr_5y_pct, Some(28.41));
        assert!(fund.sharpe_ratio.is_none());
        assert!(fund.volatility_pct.is_none());
        assert_eq!(fund.sharpe_category(), SharpeCategory::Unknown);
    }

    #[test]
    fn test_smart_advisor_response_defaults() {
        let response: SmartAdvisorResponse = serde_json::from_str("{}").unwrap();
        assert!(response.recommended_funds.is_empty());
        assert!(response.risk_warnings.is_empty());
        assert_eq!(response.analysis_summary.total_funds_analyzed, Some(0));
        assert_eq!(response.filters_applied.risk_tolerance, "moderate");
        assert_eq!(response.filters_applied.investment_horizon, "long_term");
        assert_eq!(response.filters_applied.min_alpha_pct, 0.0);
        assert_eq!(response.filters_applied.max_volatility_pct, 25.0);
    }

    #[test]
    fn test_recommendation_guide_keys() {
        let json = r#"{
            "STRONG BUY": "Sharpe > 1",
            "BUY": "Sharpe > 0.5",
            "HOLD": "Sharpe > 0",
            "AVOID": "Negative Sharpe"
        }"#;
        let guide: RecommendationGuide = serde_json::from_str(json).unwrap();
        assert_eq!(guide.strong_buy, "Sharpe > 1");
        assert_eq!(guide.avoid, "Negative Sharpe");
    }
}
