use super::{benchmark, funds, ui, view_result};
use crate::App;
use crate::core::SortField;
use anyhow::{Result, bail};
use futures::join;
use tracing::warn;

/// Loads the fund list and the benchmark analysis concurrently and prints
/// whichever succeeded. Fails if either screen ended in error.
pub async fn run(app: &App, sort: SortField) -> Result<()> {
    let (fund_state, benchmark_state) = join!(app.funds.load(), app.benchmark.load());

    let mut failures = Vec::new();

    match view_result(fund_state) {
        Ok(list) => println!("{}", funds::display_fund_table(&list, sort)),
        Err(e) => failures.push(e),
    }
    ui::print_separator();
    match view_result(benchmark_state) {
        Ok(analysis) => println!("{}", benchmark::display_benchmark(&analysis)),
        Err(e) => failures.push(e),
    }

    if failures.is_empty() {
        return Ok(());
    }
    for failure in &failures {
        warn!(error = %failure, "Overview section failed");
    }
    let reasons: Vec<String> = failures.iter().map(|e| format!("{e:#}")).collect();
    bail!(
        "{} of 2 overview sections failed: {}",
        failures.len(),
        reasons.join("; ")
    )
}
