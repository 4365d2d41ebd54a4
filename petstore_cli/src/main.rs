mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use petstore_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "petstore")]
#[command(about = "Create, fetch and update pets in a pet store service")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Service base URL (overrides PETSTORE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides PETSTORE_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new pet
    Add(commands::add::AddArgs),
    /// Fetch a pet by id
    Get(commands::get::GetArgs),
    /// Replace a pet by id
    Update(commands::update::UpdateArgs),
}

fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(ref url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("petstore=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_name(&cli.output);

    let config = build_config(&cli);
    tracing::debug!("Using pet store at {}", config.base_url);
    let client = Client::from_config(&config)?;

    match &cli.command {
        Commands::Add(args) => commands::add::run(args, &client, &format).await?,
        Commands::Get(args) => commands::get::run(args, &client, &format).await?,
        Commands::Update(args) => commands::update::run(args, &client, &format).await?,
    }

    Ok(())
}
