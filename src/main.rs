//! cs-branch host CLI
//!
//! - `serve`: serve the compiled UI bundle
//! - `check`: validate the built-in content catalog
//! - `init-config`: print a default configuration file

use anyhow::Context;
use clap::{Parser, Subcommand};
use cs_branch::catalog::Catalog;
use cs_branch::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use cs_branch::server::{serve, AppState};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cs-branch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "IEEE CS Student Branch website host")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built UI bundle
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Bundle directory
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Validate the content catalog and print a summary
    Check {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a default config file
    InitConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::InitConfig { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{content}"),
            }
        }

        Commands::Serve { host, port, dist } => {
            let mut config = load_config(cli.config)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            tracing::info!(
                "Starting cs-branch host v{} (bundle {:?})",
                env!("CARGO_PKG_VERSION"),
                config.server.dist_dir
            );
            serve(AppState::new(config.server)).await?;
        }

        Commands::Check { json } => {
            load_config(cli.config)?;
            let catalog = Catalog::builtin();
            catalog.validate().context("Catalog validation failed")?;
            let summary = catalog.summary();

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                tracing::info!("Catalog OK: {}", summary);
            }
        }
    }

    Ok(())
}

/// Resolve the config file, install logging from it, then log how it was
/// resolved
fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let resolved = Config::resolve(path.as_deref())?;
    init_tracing(&resolved.config.logging);
    for note in &resolved.notes {
        note.log();
    }
    Ok(resolved.config)
}

/// Install the global subscriber; `RUST_LOG` wins over the config level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
