mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "flipsight")]
#[command(about = "Marketplace flip-research toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the enrichment service: sweep now, then on the configured cadence.
    Run,
    /// Run one sweep over every tracked product and exit.
    Sweep,
    /// Enrich a single tracked product and print its summary.
    Target {
        /// Product id to enrich.
        #[arg(long)]
        id: i64,
    },
    /// Database housekeeping.
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Verify the database is reachable.
    Ping,
    /// Apply pending schema migrations.
    Migrate,
    /// Insert the starter product list.
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = flipsight_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run => commands::run(&config).await,
        Commands::Sweep => commands::sweep(&config).await,
        Commands::Target { id } => commands::target(&config, id).await,
        Commands::Db { command } => match command {
            DbCommands::Ping => commands::db_ping(&config).await,
            DbCommands::Migrate => commands::db_migrate(&config).await,
            DbCommands::Seed => commands::db_seed(&config).await,
        },
    }
}
