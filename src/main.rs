use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{BOARD_HEIGHT, BOARD_WIDTH, INPUT_POLL_MS, TICK_INTERVAL_MS};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about = "Grid-aligned Snake in the terminal")]
struct Cli {
    /// File the game log is written to.
    #[arg(long = "log-file", default_value = "grid-snake.log")]
    log_file: PathBuf,

    /// Minimum level written to the log file.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    WriteLogger::init(cli.log_level, Config::default(), File::create(&cli.log_file)?)?;
    info!("starting grid-snake on a {BOARD_WIDTH}x{BOARD_HEIGHT} board");

    install_panic_hook();
    run(cli.seed)?;

    info!("exiting");
    Ok(())
}

fn run(seed: Option<u64>) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new(Duration::from_millis(INPUT_POLL_MS));
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(BOARD_WIDTH, BOARD_HEIGHT, seed),
        None => GameState::new(BOARD_WIDTH, BOARD_HEIGHT),
    };

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        session.draw(&state)?;

        if let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }

            let was_running = state.is_running();
            state.apply_input(game_input);

            // Resuming or restarting starts a fresh tick period.
            if !was_running && state.is_running() {
                last_tick = Instant::now();
            }
        }

        if state.is_running() && last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
