use anyhow::{Context, Result};
use clap::Parser;

use off_cli::api::OffClient;
use off_cli::cli::{Cli, Commands};
use off_cli::config::AppConfig;
use off_cli::model::Lookup;
use off_cli::output;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "off_cli=debug"
    } else {
        "off_cli=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = AppConfig::load(cli.country, cli.timeout, cli.debug)?;

    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted.");
        std::process::exit(130);
    })
    .context("Failed to set Ctrl+C handler")?;

    let client = OffClient::new(&config)?;

    match cli.command {
        Commands::Search { query, limit } => {
            cmd_search(&client, &query, limit).await?;
        }
        Commands::Product { barcode } => {
            cmd_product(&client, &barcode).await?;
        }
    }

    Ok(())
}

async fn cmd_search(client: &OffClient, query: &str, limit: usize) -> Result<()> {
    let mut result = client.search(query).await.context("Search failed")?;

    if result.hits.is_empty() {
        anyhow::bail!("No search results found for: {}", query);
    }

    result.hits.truncate(limit);
    print!("{}", output::format_search_results(&result));
    Ok(())
}

async fn cmd_product(client: &OffClient, barcode: &str) -> Result<()> {
    let outcome = client
        .product_by_barcode(barcode)
        .await
        .context("Product lookup failed")?;

    match outcome {
        Lookup::Found(product) => print!("{}", output::format_product(&product)),
        Lookup::NotFound => {
            anyhow::bail!("Product not found in Open Food Facts: {}", barcode)
        }
    }

    Ok(())
}
