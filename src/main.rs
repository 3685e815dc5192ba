use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filmdiary::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "filmdiary",
    version,
    about = "Scrape a Letterboxd film diary into normalized JSON",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the config file
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl one user's diary and print it as JSON
    Diary {
        /// Letterboxd username
        username: String,

        /// Write the JSON array to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Serve the diary JSON endpoint over HTTP
    Serve {
        /// Bind host; overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Bind port; overrides the config file
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    match cli.command {
        Commands::Diary {
            username,
            output,
            pretty,
        } => {
            tracing::info!(username = %username, output = ?output, "Starting diary command");
            commands::diary(&config, &username, output, pretty).await?;
        }

        Commands::Serve { .. } => {
            tracing::info!(
                host = %config.server.host,
                port = config.server.port,
                "Starting serve command"
            );
            commands::serve(&config).await?;
        }
    }

    Ok(())
}

/// Config file and environment first, then command-line flags, then validation
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(format) = &cli.log_format {
        config.logging.format.clone_from(format);
    }
    if let Commands::Serve { host, port } = &cli.command {
        if let Some(host) = host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }

    config.validate().context("Invalid command-line options")?;
    Ok(config)
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("filmdiary=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("filmdiary={level},warn")))
    };

    // Logs go to stderr so `diary` output on stdout stays clean JSON
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("filmdiary").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_log_format_flag_is_validated() {
        assert!(load_config(&cli(&["--log-format", "yaml", "diary", "dave"])).is_err());
    }

    #[test]
    fn test_log_format_flag_overrides_config() {
        let config = load_config(&cli(&["--log-format", "json", "diary", "dave"])).unwrap();
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_serve_flags_override_config() {
        let config = load_config(&cli(&["serve", "--host", "0.0.0.0", "--port", "8080"])).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_serve_port_zero_rejected() {
        assert!(load_config(&cli(&["serve", "--port", "0"])).is_err());
    }
}
