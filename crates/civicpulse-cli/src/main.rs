mod report;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "civicpulse-cli")]
#[command(about = "CivicPulse command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search across all platforms and print the derived dashboard.
    Query {
        /// Search query sent to every platform adapter.
        query: String,
        /// Per-platform result limit override.
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Query { query, limit }) => report::run_query(&query, limit).await?,
        None => println!("civicpulse-cli: try `query <text>`"),
    }

    Ok(())
}
