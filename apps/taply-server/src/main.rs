use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tower_http::timeout::TimeoutLayer;

use profiles::domain::service::Service;
use profiles::infra::storage::json_store::JsonProfileStore;
use runtime::{AppConfig, CliArgs};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Taply Server - JSON-file-backed profile store for digital business cards
#[derive(Parser)]
#[command(name = "taply-server")]
#[command(about = "Taply Server - profile store for digital business cards")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Figment skips missing YAML files silently, so an explicit --config
    // pointing nowhere must fail up front instead.
    if let Some(path) = cli.config.as_deref() {
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
    }

    // CLI args passed down to config
    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;

    // Apply CLI overrides (port / verbosity)
    config.apply_cli_overrides(&args);

    // Initialize logging
    runtime::init_logging_from_config(
        config.logging.as_ref(),
        std::path::Path::new(&config.server.home_dir),
    );
    tracing::info!("Taply Server starting");

    // Print config and exit if requested
    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Execute command
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config).await,
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    let data_file = config.data_file_path();
    tracing::info!("Profiles document: {}", data_file.display());

    let store = JsonProfileStore::new(data_file, config.store.serialize_writes);
    let service = Arc::new(Service::new(Arc::new(store)));

    let mut app = profiles::api::rest::routes::router(service, config.server.port);
    if config.server.timeout_sec > 0 {
        app = app.layer(TimeoutLayer::new(Duration::from_secs(
            config.server.timeout_sec,
        )));
    }

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Taply profile store running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Taply Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

async fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    // AppConfig::load_* already normalized & created home_dir
    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Server config:");
    println!("{}", config.to_yaml()?);

    Ok(())
}
