//! Browse command: fetch a page and run it through the view pipeline.

use anyhow::{Context as _, Result};
use fashion_catalog::search::FilterToggles;
use fashion_view::markup::{format_date, format_price};
use fashion_view::{Controls, DocumentRenderer, RenderedView, ViewController};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::Output;

const PAGE_TITLE: &str = "Clear Fashion";

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let view_config = &ctx.config.view;
    let controls = Controls::default()
        .with_page_size(args.size.unwrap_or(view_config.page_size))
        .with_brand(args.brand.clone())
        .with_filters(FilterToggles {
            recent_only: args.recent,
            reasonable_price_only: args.reasonable,
            favorites_only: args.favorites,
        })
        .with_sort(args.sort.or(view_config.sort));

    ctx.output.debug(&format!("Fetching from {}", ctx.config.api.base_url));

    let mut controller =
        ViewController::new(ctx.api_client()?, ctx.favorites_store()?, DocumentRenderer::new())
            .with_settings(view_config.filter_settings())
            .with_controls(controls);

    let spinner = ctx.output.spinner("Loading products...");
    let view = controller.load(args.page).await;
    spinner.finish_and_clear();

    if let Some(reason) = &view.fallback {
        ctx.output.warn(&format!("Could not fetch products: {}", reason));
    }

    if let Some(path) = &args.html {
        let path = ctx.resolve_path(path);
        let html = controller.renderer().to_html(PAGE_TITLE);
        std::fs::write(&path, html)
            .with_context(|| format!("Failed to write page: {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    let favorites = controller.favorites().list_favorites();
    print_products(&ctx.output, &view, |id| favorites.contains(id));
    print_indicators(&ctx.output, &view);

    Ok(())
}

fn print_products(
    output: &Output,
    view: &RenderedView,
    is_favorite: impl Fn(&fashion_catalog::ProductId) -> bool,
) {
    let pagination = &view.pagination;
    output.header(&format!(
        "Page {} of {} ({} products)",
        pagination.current_page, pagination.page_count, pagination.count
    ));

    if view.products.is_empty() {
        output.info("No products to show.");
        return;
    }

    let widths = [1, 14, 36, 8, 10, 36];
    output.table_row(&["", "BRAND", "NAME", "PRICE", "RELEASED", "ID"], &widths);
    for product in &view.products {
        let star = if is_favorite(&product.id) { "★" } else { " " };
        let price = format_price(Some(product.price));
        output.table_row(
            &[
                star,
                &product.brand,
                &product.name,
                &price,
                &product.released,
                product.id.as_str(),
            ],
            &widths,
        );
    }
}

fn print_indicators(output: &Output, view: &RenderedView) {
    let indicators = &view.indicators;
    let or_dash = |s: String| if s.is_empty() { "-".to_string() } else { s };

    output.header("Indicators");
    output.kv("Products", &view.pagination.count.to_string());
    output.kv("New products", &indicators.new_count.to_string());
    output.kv("p50 price", &or_dash(format_price(indicators.p50)));
    output.kv("p90 price", &or_dash(format_price(indicators.p90)));
    output.kv("p95 price", &or_dash(format_price(indicators.p95)));
    output.kv("Last released", &or_dash(format_date(indicators.last_released)));
}
