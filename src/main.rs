use std::fs::File;
use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use torus_snake::config::{
    theme_by_name, GameConfig, Theme, DEFAULT_TICK_INTERVAL_MS, DEFAULT_TILE_COUNT,
    GRID_CELL_SIZE_PX, MIN_TICK_INTERVAL_MS, THEMES,
};
use torus_snake::engine::{GameEngine, Phase};
use torus_snake::input::{InputEvent, InputHandler};
use torus_snake::renderer;
use torus_snake::scheduler::TickScheduler;
use torus_snake::terminal_runtime::{restore_terminal_best_effort, TerminalSession};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(16);
const LOG_FILE_NAME: &str = "torus-snake.log";

#[derive(Debug, Parser)]
#[command(name = "torus-snake", about = "Snake on a wrap-around grid")]
struct Cli {
    /// Cells per axis of the square grid.
    #[arg(long, default_value_t = DEFAULT_TILE_COUNT,
          value_parser = clap::value_parser!(u16).range(4..=64))]
    tile_count: u16,

    /// Initial tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS,
          value_parser = clap::value_parser!(u64).range(MIN_TICK_INTERVAL_MS..=1000))]
    tick_ms: u64,

    /// Seed for deterministic food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme name.
    #[arg(long, default_value = "garden")]
    theme: String,

    /// Log at debug level instead of info.
    #[arg(long)]
    debug: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug)?;

    let Some(theme) = theme_by_name(&cli.theme) else {
        let available: Vec<&str> = THEMES.iter().map(|theme| theme.name).collect();
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "unknown theme {:?}; available: {}",
                cli.theme,
                available.join(", ")
            ),
        ));
    };

    install_panic_hook();

    let config = GameConfig {
        tile_count: cli.tile_count,
        cell_size_px: GRID_CELL_SIZE_PX,
        tick_interval_ms: cli.tick_ms,
    };
    let engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(config, seed),
        None => GameEngine::new(config),
    };

    info!(
        "starting torus-snake: grid {0}x{0}, tick {1} ms",
        cli.tile_count, cli.tick_ms
    );
    run(engine, theme)
}

fn run(mut engine: GameEngine, theme: &Theme) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let input = InputHandler::new(INPUT_POLL_TIMEOUT);
    let mut scheduler = TickScheduler::new(engine.tick_interval());

    loop {
        let snapshot = engine.snapshot();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, theme))?;

        if let Some(event) = input.poll_event()? {
            match event {
                InputEvent::Quit => break,
                InputEvent::StartOrRestart => {
                    engine.start();
                    scheduler.reconfigure(engine.tick_interval(), Instant::now());
                }
                InputEvent::Direction(direction) => {
                    // start() discards the pending request; the first tick
                    // after any start moves right.
                    engine.request_direction(direction);
                    if engine.phase != Phase::Running {
                        engine.start();
                        scheduler.reconfigure(engine.tick_interval(), Instant::now());
                    }
                }
            }
        }

        if scheduler.poll(Instant::now()) {
            engine.tick();
            match engine.phase {
                Phase::GameOver => scheduler.stop(),
                Phase::Running if engine.tick_interval() != scheduler.interval() => {
                    scheduler.reconfigure(engine.tick_interval(), Instant::now());
                }
                _ => {}
            }
        }
    }

    info!("quitting, final score {}", engine.score);
    Ok(())
}

fn init_logging(debug: bool) -> io::Result<()> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Stdout belongs to the TUI; logs go to a file in the working directory.
    let file = File::create(LOG_FILE_NAME)?;
    if let Err(error) = WriteLogger::init(level, LogConfig::default(), file) {
        eprintln!("logging disabled: {error}");
    }

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_best_effort();
        default_hook(panic_info);
    }));
}
