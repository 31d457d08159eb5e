use super::{ui, view_result};
use crate::core::fund::BenchmarkAnalysisResponse;
use crate::screens::benchmark::BenchmarkModel;
use anyhow::Result;
use comfy_table::Cell;

pub fn display_benchmark(analysis: &BenchmarkAnalysisResponse) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Fund"),
        ui::header_cell("Return 3M"),
        ui::header_cell("Return 1Y"),
        ui::header_cell("CAGR 3Y"),
        ui::header_cell("CAGR 5Y"),
        ui::header_cell("Volatility"),
        ui::header_cell("Sharpe"),
        ui::header_cell("Max DD"),
        ui::header_cell("Call"),
    ]);

    for fund in &analysis.funds {
        table.add_row(vec![
            Cell::new(&fund.fund_name),
            ui::pct_cell(fund.returns_3m_pct),
            ui::pct_cell(fund.returns_1y_pct),
            ui::pct_cell(fund.cagr_3y_pct),
            ui::pct_cell(fund.cagr_5y_pct),
            ui::volatility_cell(fund.volatility_pct),
            ui::sharpe_cell(fund.sharpe_ratio),
            ui::pct_cell(fund.max_drawdown_pct),
            ui::recommendation_cell(fund.recommendation.as_deref()),
        ]);
    }

    let guide = &analysis.recommendation_guide;
    let mut guide_table = ui::new_styled_table();
    guide_table.set_header(vec![ui::header_cell("Call"), ui::header_cell("Meaning")]);
    for (call, meaning) in [
        ("STRONG BUY", &guide.strong_buy),
        ("BUY", &guide.buy),
        ("HOLD", &guide.hold),
        ("AVOID", &guide.avoid),
    ] {
        guide_table.add_row(vec![ui::recommendation_cell(Some(call)), Cell::new(meaning)]);
    }

    let mut output = format!(
        "Benchmark: {}\n\n",
        ui::style_text(&analysis.benchmark, ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}\n{}\n\n",
        ui::style_text("Analysis", ui::StyleType::Label),
        analysis.analysis_note
    ));
    output.push_str(&guide_table.to_string());
    output
}

pub async fn run(model: &BenchmarkModel) -> Result<()> {
    let analysis = view_result(model.load().await)?;
    println!("{}", display_benchmark(&analysis));
    Ok(())
}
