use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod serve;
pub mod update;

use crate::core::{AppConfig, init_tracing};

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve {},
    /// Install the latest release and exit
    Update {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Set the server host address
    #[arg(long, global = true, default_value = "0.0.0.0")]
    host: String,

    /// Set the server port
    #[arg(long, global = true, default_value = "80")]
    port: String,

    /// Also write logs to this file, rotated daily
    #[arg(long, global = true)]
    logfile: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    let _guard = init_tracing(args.logfile.as_deref());
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Update {}) => {
            update::run(&config).await?;
        }
        Some(Command::Serve {}) | None => {
            serve::run(args.host, args.port, config).await?;
        }
    }

    Ok(())
}
