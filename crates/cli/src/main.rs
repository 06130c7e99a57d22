mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hub::Catalog;
use mcp::Server;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use error::{Error, Result};

const CONFIG_FILE: &str = "hub-mcp.toml";
const DEFAULT_LOG_FILTER: &str = "hub=info,mcp=info,hub_mcp=info";

#[derive(Parser)]
#[command(name = "hub-mcp")]
#[command(about = "Docker Hub API exposed as MCP tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Override the upstream base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the tool catalog over MCP on stdio
    Serve,
    /// List every tool with its endpoint
    Tools,
    /// Invoke a single tool and print the result
    Call {
        /// Tool name, as listed by `tools`
        tool: String,
        /// Arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries the protocol.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) | None => cmd_serve(&cli.config, cli.base_url).await,
        Some(Commands::Tools) => cmd_tools(),
        Some(Commands::Call { tool, args }) => {
            cmd_call(&cli.config, cli.base_url, &tool, args.as_deref()).await
        }
    }
}

fn load_catalog(path: &Path, base_url: Option<String>) -> Result<Catalog> {
    let mut config = Config::load_or_default(path)?.with_env();
    if let Some(url) = base_url {
        config.api.base_url = Some(url);
    }
    let api = config.api_config()?;
    tracing::debug!(config = ?api, "loaded configuration");
    Ok(Catalog::new(api))
}

async fn cmd_serve(path: &Path, base_url: Option<String>) -> Result<()> {
    let catalog = load_catalog(path, base_url)?;
    tracing::info!(tools = catalog.len(), "serving on stdio");

    Server::new("hub-mcp", env!("CARGO_PKG_VERSION"), catalog)
        .serve_stdio()
        .await?;

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

fn cmd_tools() -> Result<()> {
    println!("{:<72}  {:<6}  PATH", "NAME", "METHOD");
    println!("{}", "-".repeat(110));
    for d in hub::catalog::descriptors() {
        println!("{:<72}  {:<6}  {}", d.name, d.method, d.path);
        println!("    {}", d.description);
    }

    Ok(())
}

async fn cmd_call(
    path: &Path,
    base_url: Option<String>,
    tool: &str,
    args: Option<&str>,
) -> Result<()> {
    let catalog = load_catalog(path, base_url)?;
    let args = args
        .map(serde_json::from_str)
        .transpose()
        .map_err(Error::InvalidArgs)?;

    let outcome = catalog.invoke(tool, args).await?;
    println!("{}", outcome.text());

    if outcome.is_error() {
        return Err(Error::CallFailed {
            tool: tool.to_string(),
            kind: outcome.kind(),
        });
    }
    Ok(())
}
