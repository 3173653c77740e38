use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use duel_snake::app::App;
use duel_snake::config::{GameConfig, THEME_CLASSIC};
use duel_snake::error::AppError;
use duel_snake::game::Round;
use duel_snake::grid::Grid;
use duel_snake::input::InputHandler;
use duel_snake::logging::init_file_logging;
use duel_snake::renderer::{self, ViewInfo};
use duel_snake::terminal_runtime::TerminalSession;
use tracing::{debug, info};

/// Upper bound on how long one loop iteration waits for input, so the
/// screen keeps refreshing while no tick is scheduled.
const MAX_INPUT_WAIT: Duration = Duration::from_millis(50);

/// Snake duel against a breadth-first-search opponent.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square grid.
    #[arg(long = "grid-size")]
    grid_size: Option<u16>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,

    /// Append diagnostic logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("duel-snake: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let config = resolve_config(&cli)?;
    info!(?config, "configuration loaded");

    let grid = Grid::new(config.grid_size);
    let round = match config.seed {
        Some(seed) => Round::new_with_seed(grid, seed),
        None => Round::new(grid),
    };
    let mut app = App::new(round, Duration::from_millis(config.tick_interval_ms));

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    while !app.should_quit() {
        session.draw(|frame| {
            renderer::render(
                frame,
                app.round(),
                ViewInfo {
                    theme: &THEME_CLASSIC,
                    show_start_screen: app.is_start_screen(),
                },
            )
        })?;

        let wait = app
            .scheduler()
            .time_until_due(Instant::now())
            .map_or(MAX_INPUT_WAIT, |remaining| remaining.min(MAX_INPUT_WAIT));
        if let Some(game_input) = input.poll_input(wait)? {
            debug!(?game_input, "input");
            app.handle_input(game_input, Instant::now());
        }

        app.update(Instant::now());
    }

    info!(
        score_user = app.round().state().score_user,
        score_ai = app.round().state().score_ai,
        "session ended"
    );
    Ok(())
}

/// Layers defaults, the config file and command-line overrides.
fn resolve_config(cli: &Cli) -> Result<GameConfig, AppError> {
    let mut config = GameConfig::load(cli.config.as_deref())?;

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    Ok(config.validate()?)
}
