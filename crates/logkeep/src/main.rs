mod commands;

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use logkeep::config::DEFAULT_CONFIG_FILE;

// ============================================================================
// CLI Types
// ============================================================================

/// Logkeep - keeps a JSON log collection in a single file and serves it over HTTP
#[derive(Parser, Debug)]
#[command(version = logkeep::build_info::VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "LOGKEEP_CONFIG")]
        config: String,

        /// Host to bind to (overrides config file)
        #[arg(long, env = "LOGKEEP_HOST")]
        host: Option<IpAddr>,

        /// Port to listen on (overrides config file)
        #[arg(short, long, env = "LOGKEEP_PORT")]
        port: Option<u16>,

        /// Log file (overrides config file). If relative, it is resolved relative to the config file directory.
        #[arg(long, env = "LOGKEEP_LOGS_FILE")]
        logs_file: Option<PathBuf>,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            logs_file,
        } => commands::serve::run(&config, host, port, logs_file.as_deref()).await,
    }
}

// ============================================================================
// Initialization
// ============================================================================

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
