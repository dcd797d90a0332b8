//! Favorites commands.

use anyhow::{Context as _, Result};
use fashion_catalog::ProductId;

use super::{FavoritesArgs, FavoritesCommand};
use crate::context::Context;

/// Run the favorites command.
pub async fn run(args: FavoritesArgs, ctx: &Context) -> Result<()> {
    match args.command {
        FavoritesCommand::Toggle { id } => toggle(&id, ctx),
        FavoritesCommand::List => list(ctx),
    }
}

fn toggle(id: &str, ctx: &Context) -> Result<()> {
    let id = ProductId::new(id.trim());
    let store = ctx.favorites_store()?;
    let now_favorite = store
        .toggle(&id)
        .with_context(|| format!("Failed to update favorites for {}", id))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "id": id, "favorite": now_favorite }));
    } else if now_favorite {
        ctx.output.success(&format!("★ {} added to favorites", id));
    } else {
        ctx.output.success(&format!("☆ {} removed from favorites", id));
    }

    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let favorites = ctx.favorites_store()?.list_favorites();

    if ctx.output.is_json() {
        ctx.output.json(&favorites);
        return Ok(());
    }

    if favorites.is_empty() {
        ctx.output.info("No favorites yet.");
        ctx.output.info("Run `fashion favorites toggle <ID>` to add one.");
        return Ok(());
    }

    ctx.output.header(&format!("Favorites ({})", favorites.len()));
    for id in favorites.iter() {
        ctx.output.list_item(id.as_str());
    }

    Ok(())
}
