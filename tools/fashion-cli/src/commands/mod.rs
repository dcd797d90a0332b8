//! CLI command implementations.

pub mod brands;
pub mod browse;
pub mod config;
pub mod favorites;

use clap::{Args, Subcommand};
use fashion_catalog::search::SortKey;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Products per page (default: from config).
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Only show this brand.
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Only recently released products.
    #[arg(long)]
    pub recent: bool,

    /// Only reasonably priced products.
    #[arg(long)]
    pub reasonable: bool,

    /// Only favorite products.
    #[arg(long)]
    pub favorites: bool,

    /// Sort key: price-asc, price-desc, date-asc, date-desc.
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Write the rendered page to this file.
    #[arg(long)]
    pub html: Option<String>,
}

/// Arguments for the favorites command.
#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesCommand,
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// Add or remove a product from the favorites.
    Toggle {
        /// Product id.
        id: String,
    },
    /// List favorite product ids.
    List,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
