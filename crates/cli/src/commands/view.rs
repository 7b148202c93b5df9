use chrono::Local;

use crate::error::CliError;
use crate::output;

use super::Context;

pub fn summary(ctx: &Context) -> Result<String, CliError> {
    let tracker = ctx.load()?;
    let summary = tracker.summary();
    let allocation = tracker.allocation();

    if ctx.json {
        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "summary": summary,
            "allocation": allocation,
        }))?);
    }

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let rendered = output::render_summary(
        &summary,
        &allocation,
        &ctx.settings.currency_symbol,
        &today,
    )?;
    Ok(rendered)
}

pub fn analytics(ctx: &Context) -> Result<String, CliError> {
    let tracker = ctx.load()?;
    let summary = tracker.summary();
    let ranking = tracker.cagr_ranking();
    let by_type = tracker.asset_type_performance();

    if ctx.json {
        let top = tracker.top_performers(ctx.settings.top_performers);
        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "summary": summary,
            "cagr_ranking": ranking,
            "top_performers": top,
            "asset_type_performance": by_type,
        }))?);
    }

    let rendered = output::render_analytics(
        &summary,
        &ranking,
        ctx.settings.top_performers,
        &by_type,
        &ctx.settings.currency_symbol,
    )?;
    Ok(rendered)
}
