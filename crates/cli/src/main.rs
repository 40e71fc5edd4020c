use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "plantarium")]
#[command(about = "Plant catalog HTTP service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// SQLite database path (defaults to the platform data directory)
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
    /// Load the baseline catalog and exit
    Seed {
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
    /// Print one plant record as JSON
    Get {
        name: String,
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
}

pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plantarium")
        .join("plants.db")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, host, db_path } => commands::serve::run(port, host, db_path).await,
        Commands::Seed { db_path } => commands::seed::run(db_path).await,
        Commands::Get { name, db_path } => commands::get::run(&name, db_path).await,
    }
}
