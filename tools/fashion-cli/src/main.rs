//! Fashion CLI - browse the Clear Fashion product catalogue.
//!
//! Commands:
//! - `fashion browse` - Fetch a page, filter, sort and show indicators
//! - `fashion favorites` - Toggle and list favorite products
//! - `fashion brands` - List known brands
//! - `fashion config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fashion_observability::LogLevel;

use commands::{BrowseArgs, ConfigArgs, FavoritesArgs};

/// Fashion CLI - Browse, filter and bookmark fashion products
#[derive(Parser)]
#[command(name = "fashion")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a page of products with filters, sorting and indicators
    Browse(BrowseArgs),

    /// Manage favorite products
    Favorites(FavoritesArgs),

    /// List brands
    Brands,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut logging = ctx.config.logging;
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    if let Err(e) = fashion_observability::init(logging) {
        ctx.output.debug(&e.to_string());
    }

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Favorites(args) => commands::favorites::run(args, &ctx).await,
        Commands::Brands => commands::brands::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
