//! # Slide2048 Main Entry Point
//!
//! Parses the command line, sets up logging, and runs the terminal game loop.

use clap::Parser;
use log::{error, info};
use slide2048::{GameSettings, GameState, GameResult, InputHandler, PlayerInput, TextDisplay};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command line arguments for slide2048.
#[derive(Parser, Debug)]
#[command(name = "slide2048")]
#[command(about = "The 2048 sliding-tile puzzle in your terminal")]
#[command(version)]
struct Args {
    /// JSON settings file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board dimension
    #[arg(long)]
    size: Option<usize>,

    /// Tile value that wins the game
    #[arg(long)]
    win_value: Option<u32>,

    /// Random seed for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep playing after reaching the win value
    #[arg(long)]
    keep_playing: bool,

    /// Disable vi-style movement keys (hjkl)
    #[arg(long)]
    no_vi_keys: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

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
            .with_writer(io::stderr)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}

/// Merges the settings file with command line overrides.
fn load_settings(args: &Args) -> GameResult<GameSettings> {
    let mut settings = match &args.config {
        Some(path) => GameSettings::from_json_file(path)?,
        None => GameSettings::default(),
    };

    if let Some(size) = args.size {
        settings.board_size = size;
    }
    if let Some(win_value) = args.win_value {
        settings.win_value = win_value;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if args.keep_playing {
        settings.continue_after_win = true;
    }

    settings.validate()?;
    Ok(settings)
}

/// Runs the read-command / apply / redraw loop until quit or end of input.
fn run(args: &Args) -> GameResult<()> {
    let settings = load_settings(args)?;
    info!("Starting slide2048 v{}", slide2048::VERSION);

    let mut state = GameState::new(settings)?;
    let input_handler = InputHandler {
        vi_keys_enabled: !args.no_vi_keys,
    };
    let display = TextDisplay::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n", input_handler.help_text())?;
    writeln!(stdout, "{}", display.render(&state))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(input) = input_handler.parse(&line) else {
            writeln!(stdout, "Unknown command {:?}; type ? for help", line.trim())?;
            continue;
        };

        match input {
            PlayerInput::Quit => break,
            PlayerInput::Help => writeln!(stdout, "{}", input_handler.help_text())?,
            _ => {
                state.handle_input(input)?;
                writeln!(stdout, "{}", display.render(&state))?;
            }
        }
        stdout.flush()?;
    }

    let stats = &state.statistics;
    info!(
        "Session ended: {} moves, best score {}, highest tile {}",
        stats.moves_made, stats.best_score, stats.highest_tile
    );
    writeln!(stdout, "Final score: {}", state.board().score())?;
    Ok(())
}
