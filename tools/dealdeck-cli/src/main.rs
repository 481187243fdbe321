//! DealDeck CLI - Command line deal browser.
//!
//! Commands:
//! - `dealdeck browse` - Filter, sort, and search the deal catalog
//! - `dealdeck show` - Show one deal with related deals
//! - `dealdeck categories` - List category and sort labels

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::{BrowseArgs, ShowArgs};

/// DealDeck CLI - Browse the deal catalog
#[derive(Parser)]
#[command(name = "dealdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output (library debug logs)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Number of deals in the sample feed
    #[arg(long, global = true, default_value_t = dealdeck_feed::DEFAULT_FEED_SIZE)]
    count: usize,

    /// Seed for the sample feed
    #[arg(long, global = true, default_value_t = dealdeck_feed::DEFAULT_SEED)]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort, and search the catalog
    Browse(BrowseArgs),

    /// Show one deal in detail
    Show(ShowArgs),

    /// List available categories and sort options
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::new(cli.count, cli.seed, output);

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
