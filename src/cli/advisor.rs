use super::ui;
use crate::core::fund::{AdvisorQuery, SmartAdvisorResponse};
use crate::core::format::{MISSING_VALUE, format_pct};
use crate::screens::advisor::{AdvisorState, SmartAdvisorModel};
use anyhow::{Result, bail};
use comfy_table::Cell;

fn labelled(label: &str, value: &str) -> String {
    let value = if value.is_empty() { MISSING_VALUE } else { value };
    format!("{}: {}\n", ui::style_text(label, ui::StyleType::Label), value)
}

pub fn display_advice(advice: &SmartAdvisorResponse) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Smart Advisor Recommendations", ui::StyleType::Title)
    );

    if advice.recommended_funds.is_empty() {
        output.push_str(&ui::style_text(
            "No funds matched the selected filters.",
            ui::StyleType::Subtle,
        ));
        output.push('\n');
    } else {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Fund"),
            ui::header_cell("Alpha"),
            ui::header_cell("Volatility"),
            ui::header_cell("Risk"),
            ui::header_cell("Sharpe"),
            ui::header_cell("Call"),
        ]);
        for fund in &advice.recommended_funds {
            table.add_row(vec![
                Cell::new(&fund.fund_name),
                ui::pct_cell(fund.alpha_pct),
                ui::volatility_cell(fund.volatility_pct),
                Cell::new(
                    fund.risk_score
                        .map_or(MISSING_VALUE.to_string(), |r| r.to_string()),
                ),
                ui::sharpe_cell(fund.sharpe_ratio),
                ui::recommendation_cell(fund.recommendation.as_deref()),
            ]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }

    let summary = &advice.analysis_summary;
    output.push_str(&format!(
        "\n{}\n",
        ui::style_text("Analysis Summary", ui::StyleType::Title)
    ));
    output.push_str(&labelled(
        "Funds analyzed",
        &summary
            .total_funds_analyzed
            .map_or(String::new(), |n| n.to_string()),
    ));
    output.push_str(&labelled(
        "Positive alpha",
        &summary
            .funds_with_positive_alpha
            .map_or(String::new(), |n| n.to_string()),
    ));
    output.push_str(&labelled(
        "Average alpha",
        &format_pct(summary.average_alpha_pct, 2),
    ));
    output.push_str(&labelled(
        "Average volatility",
        &format_pct(summary.average_volatility_pct, 2),
    ));
    output.push_str(&labelled(
        "Market outperformance",
        summary.market_outperformance.as_deref().unwrap_or_default(),
    ));

    let strategy = &advice.investment_strategy;
    output.push_str(&format!(
        "\n{}\n",
        ui::style_text("Investment Strategy", ui::StyleType::Title)
    ));
    output.push_str(&labelled("Primary", &strategy.primary_recommendation));
    output.push_str(&labelled("Strategy", &strategy.strategy));
    output.push_str(&labelled("Horizon", &strategy.horizon_note));

    let allocation = &advice.portfolio_allocation;
    output.push_str(&format!(
        "\n{}\n",
        ui::style_text("Portfolio Allocation", ui::StyleType::Title)
    ));
    output.push_str(&labelled("Small cap", &allocation.small_cap_funds));
    output.push_str(&labelled("Large cap", &allocation.large_cap_funds));
    output.push_str(&labelled("Recommendation", &allocation.recommendation));
    output.push_str(&labelled("Top pick", &allocation.top_fund_suggestion));

    output.push_str(&format!(
        "\n{}\n",
        ui::style_text("Market Outlook", ui::StyleType::Title)
    ));
    output.push_str(&format!("{}\n", advice.market_outlook));

    if !advice.risk_warnings.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            ui::style_text("Risk Warnings", ui::StyleType::Title)
        ));
        for warning in &advice.risk_warnings {
            output.push_str(&format!(
                "{} {}\n",
                ui::style_text("!", ui::StyleType::Error),
                warning
            ));
        }
    }

    let filters = &advice.filters_applied;
    output.push_str(&format!(
        "\n{}",
        ui::style_text(
            &format!(
                "Filters: risk={}, horizon={}, min alpha={}, max volatility={}",
                filters.risk_tolerance,
                filters.investment_horizon,
                format_pct(Some(filters.min_alpha_pct), 1),
                format_pct(Some(filters.max_volatility_pct), 1)
            ),
            ui::StyleType::Subtle
        )
    ));

    output
}

pub async fn run(model: &SmartAdvisorModel, query: AdvisorQuery) -> Result<()> {
    model.set_risk_tolerance(query.risk_tolerance);
    model.set_investment_horizon(query.investment_horizon);
    model.set_min_alpha(query.min_alpha);
    model.set_max_volatility(query.max_volatility);

    match model.get_recommendations().await {
        AdvisorState::Success(advice) => {
            println!("{}", display_advice(&advice));
            Ok(())
        }
        AdvisorState::Error(message) => bail!(message),
        AdvisorState::Form | AdvisorState::Loading => {
            bail!("Smart advisor request did not complete")
        }
    }
}
