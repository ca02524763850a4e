//! Command line entry point for the chess-ratings tool
//!
//! Loads the player registry and the game list, computes the live rating
//! trajectory for one player and prints it as a table or as JSON.

use anyhow::Result;
use chess_ratings::config::AppConfig;
use chess_ratings::data::{load_dataset, RecordStore};
use chess_ratings::report::{render_table, Report};
use chess_ratings::TrajectoryEngine;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Chess Ratings - live ELO rating trajectory for a club player
#[derive(Parser)]
#[command(
    name = "chess-ratings",
    version,
    about = "Compute a chess player's live ELO rating across their recorded games",
    long_about = "Looks up a player in a game record CSV, resolves opponent ratings from the \
                 player registry (falling back to the rating stored with the game), and applies \
                 ELO updates with tiered K-factors game by game."
)]
struct Args {
    /// Player to search for, as "First Last"
    #[arg(value_name = "NAME")]
    name: String,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Player registry override
    #[arg(long, value_name = "PATH", help = "Override players CSV path")]
    players: Option<PathBuf>,

    /// Game list override
    #[arg(long, value_name = "PATH", help = "Override games CSV path")]
    games: Option<PathBuf>,

    /// Fixed K-factor
    #[arg(
        short,
        long,
        value_name = "K",
        help = "Use a fixed K-factor instead of rating tiers"
    )]
    k_factor: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without loading data")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(players) = &args.players {
        config.data.players_path = players.clone();
    }

    if let Some(games) = &args.games {
        config.data.games_path = games.clone();
    }

    if let Some(k) = args.k_factor {
        config.rating.k_factor_override = Some(k);
    }

    chess_ratings::config::validate_config(&config)?;
    Ok(config)
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let engine = TrajectoryEngine::new(config.rating.clone())?;
    let dataset = load_dataset(&config.data.players_path, &config.data.games_path)?;
    let store = RecordStore::new(dataset);

    let result = store.search(&args.name, &engine)?;
    info!(
        "Found {} game(s) for '{}'",
        result.steps.len(),
        result.player_name
    );

    let report = Report::from(&result);
    match args.format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let span = tracing::info_span!("service", name = %config.service.name);
    let _guard = span.enter();

    if args.dry_run {
        info!("Configuration validation successful");
        info!("   Players: {}", config.data.players_path.display());
        info!("   Games: {}", config.data.games_path.display());
        info!("   K-factor override: {:?}", config.rating.k_factor_override);
        return Ok(());
    }

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
