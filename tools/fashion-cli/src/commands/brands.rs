//! Brands command.

use anyhow::Result;
use fashion_data::ProductFetcher;

use crate::context::Context;

/// Run the brands command.
pub async fn run(ctx: &Context) -> Result<()> {
    let fetcher = ProductFetcher::new(ctx.api_client()?);

    let spinner = ctx.output.spinner("Loading brands...");
    let brands = fetcher.brands().await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&brands);
        return Ok(());
    }

    if brands.is_empty() {
        ctx.output.warn("No brands available.");
        return Ok(());
    }

    ctx.output.header(&format!("Brands ({})", brands.len()));
    for brand in &brands {
        ctx.output.list_item(brand);
    }

    Ok(())
}
