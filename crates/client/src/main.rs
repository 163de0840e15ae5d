//! `athly`: pitcher self-tracking from the terminal.
//!
//! Each invocation opens the stored document, performs one action and exits.
mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_core::{AthlyContext, ClientConfig};
use commands::{
    BullpenCommand, GameCommand, Home, PlayerCommand, Report, Reset, SyncData, WorkoutCommand,
};

/// Log games, bullpen sessions and workouts, and review daily totals
#[derive(Parser)]
#[command(name = "athly")]
#[command(about = "Pitcher self-tracking", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the stored document (overrides ATHLY_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Backend base URL (overrides ATHLY_BACKEND_BASE)
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the linked player and what to do next
    Home(Home),

    /// Game appearances
    #[command(subcommand)]
    Game(GameCommand),

    /// Bullpen sessions
    #[command(subcommand)]
    Bullpen(BullpenCommand),

    /// Workouts
    #[command(subcommand)]
    Workout(WorkoutCommand),

    /// Daily totals across all records
    Report(Report),

    /// Search and link a KBO player
    #[command(subcommand)]
    Player(PlayerCommand),

    /// Sync game data for the linked player
    Sync(SyncData),

    /// Delete all stored records and the linked player
    Reset(Reset),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(base) = cli.backend {
        config.kbo.backend_base = Some(base);
    }

    let _guard = logging::setup(&config.log_dir())?;

    let mut ctx = AthlyContext::from_config(&config)?;

    match cli.command {
        Command::Home(cmd) => cmd.execute(&ctx),
        Command::Game(cmd) => cmd.execute(&mut ctx),
        Command::Bullpen(cmd) => cmd.execute(&mut ctx),
        Command::Workout(cmd) => cmd.execute(&mut ctx),
        Command::Report(cmd) => cmd.execute(&ctx),
        Command::Player(cmd) => cmd.execute(&mut ctx).await,
        Command::Sync(cmd) => cmd.execute(&ctx).await,
        Command::Reset(cmd) => cmd.execute(&mut ctx),
    }
}
