//! Ratekit CLI - exercise the review bridge against a simulated host
//!
//! Maps the bridge's command surface onto clap subcommands so the
//! whole decision tree (availability, token caching, launch, store
//! fallback) can be driven from a terminal.

mod commands;
mod sim;

use clap::{Parser, Subcommand};
use ratekit_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ReviewArgs, StoreArgs, SupportedArgs};

/// Ratekit: in-app review bridge demo dispatcher
#[derive(Parser, Debug)]
#[command(name = "ratekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Store application package identifier (overrides config and env)
    #[arg(long, global = true, env = "RATEKIT_STORE_PACKAGE")]
    store_package: Option<String>,

    /// Minimum platform version (overrides config and env)
    #[arg(long, global = true, env = "RATEKIT_MIN_PLATFORM_VERSION")]
    min_platform_version: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Probe whether the native review dialog is supported
    Supported(SupportedArgs),

    /// Attempt the native review flow
    Review(ReviewArgs),

    /// Open the store listing
    Store(StoreArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config =
        Config::load_with_overrides(cli.store_package.clone(), cli.min_platform_version)?;

    if cli.verbose {
        tracing::info!(
            store_package = %config.availability.store_package,
            min_platform_version = config.availability.min_platform_version,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Supported(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Review(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Store(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config) => {
            println!("Ratekit Configuration");
            println!("=====================");
            println!();
            println!("Availability:");
            println!("  store_package: {}", config.availability.store_package);
            println!(
                "  min_platform_version: {}",
                config.availability.min_platform_version
            );
            println!();
            println!("Store listing:");
            println!("  native_uri: {}", config.store.native_uri);
            println!("  web_uri: {}", config.store.web_uri);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Ratekit - in-app review bridge demo dispatcher");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
