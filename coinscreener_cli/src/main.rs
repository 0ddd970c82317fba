mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use coinscreener_lib::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "coinscreener")]
#[command(about = "Screen Upbit KRW markets and rank them by jump ratio")]
struct Cli {
    /// Output format: table, json, markdown, or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the KRW universe and print two recommendation lists
    Recommend(commands::recommend::RecommendArgs),
    /// List the tradable KRW markets
    Markets(commands::markets::MarketsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coinscreener=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" => OutputFormat::Markdown,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let client = Client::new()?;

    match &cli.command {
        Commands::Recommend(args) => commands::recommend::run(args, &client, &format).await?,
        Commands::Markets(args) => commands::markets::run(args, &client, &format).await?,
    }

    Ok(())
}
