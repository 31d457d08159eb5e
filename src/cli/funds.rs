use super::{ui, view_result};
use crate::core::fund::{FundMetrics, SortField, sort_funds};
use crate::screens::funds::FundListModel;
use anyhow::Result;
use comfy_table::Cell;

pub fn display_fund_table(funds: &[FundMetrics], sort: SortField) -> String {
    let mut sorted = funds.to_vec();
    sort_funds(&mut sorted, sort);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Fund"),
        ui::header_cell("CAGR 1Y"),
        ui::header_cell("CAGR 3Y"),
        ui::header_cell("CAGR 5Y"),
        ui::header_cell("Return 6M"),
        ui::header_cell("Volatility"),
        ui::header_cell("Sharpe"),
        ui::header_cell("Max DD"),
        ui::header_cell("Call"),
    ]);

    for fund in &sorted {
        table.add_row(vec![
            Cell::new(&fund.fund_name),
            ui::pct_cell(fund.cagr_1y_pct),
            ui::pct_cell(fund.cagr_3y_pct),
            ui::pct_cell(fund.cagr_5y_pct),
            ui::pct_cell(fund.returns_6m_pct),
            ui::volatility_cell(fund.volatility_pct),
            ui::sharpe_cell(fund.sharpe_ratio),
            ui::pct_cell(fund.max_drawdown_pct),
            ui::recommendation_cell(Some(&fund.recommendation)),
        ]);
    }

    let mut output = format!(
        "{}\n{}\n\n",
        ui::style_text("Top Small Cap Funds", ui::StyleType::Title),
        ui::style_text(&format!("Sorted by {sort}"), ui::StyleType::Subtle)
    );
    output.push_str(&table.to_string());
    output
}

pub async fn run(model: &FundListModel, sort: SortField) -> Result<()> {
    let funds = view_result(model.load().await)?;
    println!("{}", display_fund_table(&funds, sort));
    Ok(())
}
