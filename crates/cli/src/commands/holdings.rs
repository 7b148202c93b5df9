use chrono::Local;
use portfolio_tracker_core::services::portfolio_service::NewHolding;

use crate::cli::{AddArgs, RemoveArgs, RenameArgs, RepriceArgs};
use crate::error::CliError;

use super::Context;

pub fn add(ctx: &Context, args: &AddArgs) -> Result<String, CliError> {
    let entry = NewHolding {
        asset_type: args.asset_type.clone(),
        asset_id: args.asset_id.clone(),
        asset_name: args.asset_name.clone(),
        quantity: args.quantity,
        purchase_price: args.purchase_price,
        purchase_date: args
            .purchase_date
            .unwrap_or_else(|| Local::now().date_naive()),
    };

    ctx.update(|tracker| {
        tracker.add_holding(entry)?;
        Ok(format!(
            "Successfully added {} to portfolio!",
            args.asset_name
        ))
    })
}

pub fn rename(ctx: &Context, args: &RenameArgs) -> Result<String, CliError> {
    ctx.update(|tracker| {
        tracker.rename(&args.name)?;
        Ok(format!("Portfolio renamed to {}", tracker.name()))
    })
}

pub fn reprice(ctx: &Context, args: &RepriceArgs) -> Result<String, CliError> {
    ctx.update(|tracker| {
        tracker.reprice(args.index, args.price)?;
        let holding = &tracker.holdings()[args.index];
        Ok(format!(
            "{} ({}) now priced at {}",
            holding.asset_name, holding.asset_id, holding.current_price
        ))
    })
}

pub fn remove(ctx: &Context, args: &RemoveArgs) -> Result<String, CliError> {
    ctx.update(|tracker| {
        let removed = tracker.remove_holding(args.index)?;
        Ok(format!(
            "Removed {} ({})",
            removed.asset_name, removed.asset_id
        ))
    })
}
