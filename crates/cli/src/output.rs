//! Plain-text views of a portfolio: the summary and analytics screens.

use std::fmt::{self, Write as _};

use portfolio_tracker_core::export::format::{
    format_amount_whole, format_currency, format_gain_loss, format_percentage, truncate_chars,
};
use portfolio_tracker_core::models::analytics::{
    AllocationSlice, AssetTypePerformance, HoldingAnalytics, PortfolioSummary,
};

const EMPTY_SUMMARY: &str =
    "No holdings in your portfolio yet. Add holdings with `portfolio add` or `portfolio import`.";
const EMPTY_ANALYTICS: &str = "Add holdings to view analytics";

const HOLDING_HEADERS: [&str; 10] = [
    "#",
    "Asset ID",
    "Asset Name",
    "Type",
    "Quantity",
    "Purchase Price",
    "Current Price",
    "Purchase Date",
    "Value",
    "Gain/Loss",
];
const CAGR_HEADERS: [&str; 4] = ["Asset Name", "Type", "CAGR", "Total Gain/Loss"];

/// Render rows as a left-aligned text table with a dashed rule under the header.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = render_line(headers.to_vec());
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    out.push('\n');
    for row in rows {
        out.push_str(&render_line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

/// The "Portfolio Summary" screen.
pub fn render_summary(
    summary: &PortfolioSummary,
    allocation: &[AllocationSlice],
    symbol: &str,
    today: &str,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", summary.name)?;
    writeln!(out, "{}", "=".repeat(summary.name.chars().count().max(1)))?;

    if summary.holdings.is_empty() {
        writeln!(out, "{EMPTY_SUMMARY}")?;
        return Ok(out);
    }

    writeln!(
        out,
        "Total Value:         {}",
        format_currency(symbol, summary.total_value)
    )?;
    writeln!(out, "Number of Holdings:  {}", summary.holding_count)?;
    writeln!(out, "Last Updated:        {today}")?;
    writeln!(out)?;

    writeln!(out, "Holdings")?;
    let rows: Vec<Vec<String>> = summary
        .holdings
        .iter()
        .enumerate()
        .map(|(i, row)| holding_row(i, row, symbol))
        .collect();
    out.push_str(&table(&HOLDING_HEADERS, &rows));
    writeln!(out)?;

    writeln!(out, "Asset Allocation")?;
    let total = format_amount_whole(summary.total_value);
    writeln!(out, "Total {symbol}{total}")?;
    for slice in allocation {
        writeln!(
            out,
            "  {}: {:.1}% ({})",
            slice.asset_type,
            slice.percentage,
            format_currency(symbol, slice.value)
        )?;
    }
    Ok(out)
}

fn holding_row(index: usize, row: &HoldingAnalytics, symbol: &str) -> Vec<String> {
    let h = &row.holding;
    vec![
        index.to_string(),
        h.asset_id.clone(),
        h.asset_name.clone(),
        h.asset_type.clone(),
        format!("{:.2}", h.quantity),
        format_currency(symbol, h.purchase_price),
        format_currency(symbol, h.current_price),
        h.purchase_date.clone().unwrap_or_default(),
        format_currency(symbol, row.value),
        format_gain_loss(symbol, row.gain_loss),
    ]
}

/// The "Analytics" screen.
pub fn render_analytics(
    summary: &PortfolioSummary,
    ranking: &[HoldingAnalytics],
    top: usize,
    by_type: &[AssetTypePerformance],
    symbol: &str,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Analytics")?;
    writeln!(out, "=========")?;

    if summary.holdings.is_empty() {
        writeln!(out, "{EMPTY_ANALYTICS}")?;
        return Ok(out);
    }

    writeln!(
        out,
        "Total Investment:  {}",
        format_currency(symbol, summary.total_investment)
    )?;
    writeln!(
        out,
        "Current Value:     {}",
        format_currency(symbol, summary.total_value)
    )?;
    writeln!(
        out,
        "Total Gain/Loss:   {} ({})",
        format_currency(symbol, summary.total_gain_loss),
        format_percentage(summary.gain_loss_pct)
    )?;
    if let Some(best) = &summary.best_performer {
        writeln!(
            out,
            "Best Performer:    {} ({})",
            truncate_chars(&best.holding.asset_name, 15),
            format_currency(symbol, best.gain_loss)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "CAGR Analysis")?;
    let rows: Vec<Vec<String>> = ranking
        .iter()
        .map(|r| {
            vec![
                r.holding.asset_name.clone(),
                r.holding.asset_type.clone(),
                format_percentage(r.cagr),
                format_currency(symbol, r.gain_loss),
            ]
        })
        .collect();
    out.push_str(&table(&CAGR_HEADERS, &rows));
    writeln!(out)?;

    writeln!(out, "Top Performers (CAGR)")?;
    for r in ranking.iter().take(top) {
        let marker = if r.cagr > 0.0 { "+" } else { "-" };
        writeln!(
            out,
            "  {marker} {}: {}",
            truncate_chars(&r.holding.asset_name, 20),
            format_percentage(r.cagr)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Asset Type Performance")?;
    for perf in by_type {
        let marker = if perf.mean_cagr > 0.0 { "+" } else { "-" };
        writeln!(
            out,
            "  {marker} {}: {:.2}% avg CAGR, {} total gain/loss",
            perf.asset_type,
            perf.mean_cagr,
            format_currency(symbol, perf.total_gain_loss)
        )?;
    }
    Ok(out)
}
