mod export;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopdump")]
#[command(about = "Export all active Shopify products to a CSV file")]
struct Cli {
    /// Destination CSV file. Defaults to `SHOPDUMP_OUTPUT_PATH` or `products.csv`.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = shopdump_core::load_app_config().context("failed to load configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(?config, "configuration loaded");

    let output = cli.output.unwrap_or_else(|| config.output_path.clone());
    let client = shopdump_scraper::ShopifyGraphqlClient::new(&config)
        .context("failed to build Shopify GraphQL client")?;

    let saved = export::export_products(&client, &output).await?;
    if saved == 0 {
        println!("No products fetched; {} was not written", output.display());
    } else {
        println!("Saved {saved} products to {}", output.display());
    }

    Ok(())
}
