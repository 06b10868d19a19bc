//! # Serpentine Main Entry Point
//!
//! Parses the command line, builds the game configuration and runs the
//! macroquad scene loop.

use clap::Parser;
use macroquad::prelude::*;
use serpentine::{
    DiceMode, GameConfig, InputHandler, PlayerMode, SceneManager, SerpentineError,
    SerpentineResult, TurnController,
};
#[cfg(not(feature = "dev-tools"))]
use log::{error, info};
#[cfg(feature = "dev-tools")]
use tracing::{error, info, Level};

/// Command line arguments for Serpentine.
#[derive(Parser, Debug)]
#[command(name = "serpentine")]
#[command(about = "Snakes and ladders with animated moves")]
#[command(version)]
struct Args {
    /// Random seed for reproducible dice
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON game configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Start with two dice
    #[arg(long)]
    double_dice: bool,

    /// Number of players (1 or 2)
    #[arg(short, long)]
    players: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Serpentine")]
async fn main() -> SerpentineResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Serpentine v{}", serpentine::VERSION);

    if let Err(e) = run_game(&args).await {
        error!("Game stopped: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> SerpentineResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .map_err(|e| SerpentineError::ConfigError(format!("logging: {}", e)))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .try_init()
            .map_err(|e| SerpentineError::ConfigError(format!("logging: {}", e)))?;
    }

    Ok(())
}

/// Applies command line overrides on top of the file or default config.
fn build_config(args: &Args) -> SerpentineResult<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GameConfig::from_file(path)?
        }
        None => GameConfig::default(),
    };

    if args.double_dice {
        config.dice_mode = DiceMode::Double;
    }
    if let Some(count) = args.players {
        config.player_mode = PlayerMode::from_count(count)?;
    }

    config.validate()?;
    Ok(config)
}

/// Runs the main game loop with macroquad graphics.
async fn run_game(args: &Args) -> SerpentineResult<()> {
    let config = build_config(args)?;

    let controller = match args.seed {
        Some(seed) => {
            info!("Using dice seed {}", seed);
            TurnController::with_seed(config, seed)?
        }
        None => TurnController::initialize(config)?,
    };

    request_new_screen_size(1100.0, 820.0);
    next_frame().await;

    let mut scenes = SceneManager::new(controller, InputHandler::new())?;
    scenes.run().await?;

    info!("Game loop ended");
    Ok(())
}
