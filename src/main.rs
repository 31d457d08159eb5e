use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fundscope::core::log::init_logging;
use fundscope::core::{AdvisorQuery, InvestmentHorizon, RiskTolerance, SortField};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Do not wait for the service health check before fetching data
    #[arg(long, global = true)]
    skip_health: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Check whether the fund service is ready
    Health,
    /// Display the top small cap funds
    Funds {
        /// Field to sort by: cagr5y, cagr3y, cagr1y or sharpe
        #[arg(short, long, default_value = "cagr5y")]
        sort: SortField,
    },
    /// Display the benchmark comparison
    Benchmark,
    /// Get fund recommendations for a risk profile
    Advisor {
        /// conservative, moderate or aggressive
        #[arg(short, long, default_value = "moderate")]
        risk: RiskTolerance,
        /// short_term, medium_term or long_term
        #[arg(long, default_value = "long_term")]
        horizon: InvestmentHorizon,
        /// Minimum alpha in percent [default: 0]
        #[arg(long, allow_negative_numbers = true, conflicts_with = "no_min_alpha")]
        min_alpha: Option<f64>,
        /// Maximum volatility in percent [default: 25]
        #[arg(long, allow_negative_numbers = true, conflicts_with = "no_max_volatility")]
        max_volatility: Option<f64>,
        /// Do not send a minimum alpha
        #[arg(long)]
        no_min_alpha: bool,
        /// Do not send a maximum volatility
        #[arg(long)]
        no_max_volatility: bool,
        /// Send neither the alpha nor the volatility limit
        #[arg(long)]
        no_limits: bool,
    },
    /// Display funds and benchmark together
    Overview {
        /// Field to sort the fund list by
        #[arg(short, long, default_value = "cagr5y")]
        sort: SortField,
    },
}

/// Resolves one optional advisor limit: dropped when disabled, otherwise the
/// given value or the form default.
fn advisor_limit(value: Option<f64>, default: f64, disabled: bool) -> Option<f64> {
    if disabled {
        None
    } else {
        Some(value.unwrap_or(default))
    }
}

impl From<Commands> for fundscope::AppCommand {
    fn from(cmd: Commands) -> fundscope::AppCommand {
        match cmd {
            Commands::Health => fundscope::AppCommand::Health,
            Commands::Funds { sort } => fundscope::AppCommand::Funds { sort },
            Commands::Benchmark => fundscope::AppCommand::Benchmark,
            Commands::Advisor {
                risk,
                horizon,
                min_alpha,
                max_volatility,
                no_min_alpha,
                no_max_volatility,
                no_limits,
            } => {
                let defaults = AdvisorQuery::default();
                fundscope::AppCommand::Advisor(AdvisorQuery {
                    risk_tolerance: risk,
                    investment_horizon: horizon,
                    min_alpha: advisor_limit(
                        min_alpha,
                        defaults.min_alpha.unwrap_or_default(),
                        no_min_alpha || no_limits,
                    ),
                    max_volatility: advisor_limit(
                        max_volatility,
                        defaults.max_volatility.unwrap_or_default(),
                        no_max_volatility || no_limits,
                    ),
                })
            }
            Commands::Overview { sort } => fundscope::AppCommand::Overview { sort },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fundscope::cli::setup::setup(),
        Some(cmd) => {
            fundscope::run_command(cmd.into(), cli.config_path.as_deref(), cli.skip_health).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundscope::AppCommand;

    fn advisor_query(args: &[&str]) -> AdvisorQuery {
        let argv = ["fundscope", "advisor"].into_iter().chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("Failed to parse arguments");
        match cli.command.map(AppCommand::from) {
            Some(AppCommand::Advisor(query)) => query,
            _ => panic!("Expected advisor command"),
        }
    }

    #[test]
    fn test_advisor_defaults() {
        let query = advisor_query(&[]);
        assert_eq!(query.risk_tolerance, RiskTolerance::Moderate);
        assert_eq!(query.investment_horizon, InvestmentHorizon::LongTerm);
        assert_eq!(query.min_alpha, Some(0.0));
        assert_eq!(query.max_volatility, Some(25.0));
    }

    #[test]
    fn test_advisor_sends_max_volatility_without_min_alpha() {
        let query = advisor_query(&["--no-min-alpha", "--max-volatility", "18"]);
        assert_eq!(query.min_alpha, None);
        assert_eq!(query.max_volatility, Some(18.0));

        let query = advisor_query(&["--no-max-volatility"]);
        assert_eq!(query.min_alpha, Some(0.0));
        assert_eq!(query.max_volatility, None);
    }

    #[test]
    fn test_advisor_accepts_negative_alpha() {
        let query = advisor_query(&["--min-alpha", "-1.5", "--risk", "aggressive"]);
        assert_eq!(query.min_alpha, Some(-1.5));
        assert_eq!(query.risk_tolerance, RiskTolerance::Aggressive);
    }

    #[test]
    fn test_advisor_no_limits_drops_both() {
        let query = advisor_query(&["--no-limits"]);
        assert_eq!(query.min_alpha, None);
        assert_eq!(query.max_volatility, None);
    }

    #[test]
    fn test_advisor_conflicting_flags_are_rejected() {
        let result = Cli::try_parse_from([
            "fundscope",
            "advisor",
            "--min-alpha",
            "2",
            "--no-min-alpha",
        ]);
        assert!(result.is_err());
    }
}
