//! Headless match-3 simulator (default binary).
//!
//! Builds a board from a config file, flags or a fixed layout, then plays a
//! number of turns with a timed view, feeding swipes picked at random. Swaps
//! that make a match are preferred when one exists. The board is printed
//! after every turn.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use match3::core::{has_matches, Board, GameConfig, Layout, SeedMode, TimedView, TurnStateMachine};
use match3::types::{Direction, Position, Swipe};

/// Ticks a single turn may take before the run is aborted
const MAX_TICKS_PER_TURN: u32 = 100_000;

#[derive(Debug, Parser)]
#[command(name = "match3-sim", about = "Play a headless match-3 game")]
struct Cli {
    #[arg(long, help = "JSON game config file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Fixed seed (defaults to the config, then the clock)")]
    seed: Option<u64>,

    #[arg(long, help = "Board columns")]
    width: Option<usize>,

    #[arg(long, help = "Board rows")]
    height: Option<usize>,

    #[arg(long, help = "Number of piece types")]
    palette: Option<u8>,

    #[arg(long, help = "Comma-separated initial layout, top row first")]
    layout: Option<PathBuf>,

    #[arg(long, default_value = "10", help = "Turns to play")]
    turns: u32,

    #[arg(long, default_value = "2", help = "Ticks per move animation")]
    move_ticks: u32,

    #[arg(long, default_value = "1", help = "Ticks per fade animation")]
    fade_ticks: u32,

    #[arg(long, help = "Print JSON snapshots instead of the ASCII board")]
    json: bool,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut config = load_config(&cli)?;
    let layout = match &cli.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading layout {}", path.display()))?;
            let layout = Layout::parse(&text, config.palette_size)
                .with_context(|| format!("parsing layout {}", path.display()))?;
            if cli.width.is_none() {
                config.width = layout.width();
            }
            if cli.height.is_none() {
                config.height = layout.height();
            }
            Some(layout)
        }
        None => None,
    };

    let mut game = match &layout {
        Some(layout) => TurnStateMachine::with_layout(config, layout),
        None => TurnStateMachine::new(config),
    }
    .context("building the board")?;
    info!(seed = game.seed(), fix_iterations = game.fix_iterations(), "game ready");

    let mut view = TimedView::new(cli.move_ticks, cli.fade_ticks);
    let mut picker = StdRng::seed_from_u64(game.seed().rotate_left(17));
    let mut input: VecDeque<Swipe> = VecDeque::new();
    let mut snapshot = game.snapshot();

    print_snapshot(&snapshot, cli.json)?;
    for _ in 0..cli.turns {
        input.push_back(pick_swipe(game.board(), &mut picker));

        let mut ticks = 0u32;
        loop {
            view.advance();
            game.tick(&mut view, &mut input);
            ticks += 1;
            if game.is_waiting() && input.is_empty() {
                break;
            }
            if ticks >= MAX_TICKS_PER_TURN {
                bail!("turn did not settle after {ticks} ticks");
            }
        }

        game.snapshot_into(&mut snapshot);
        print_snapshot(&snapshot, cli.json)?;
    }

    if !cli.json {
        println!("turns: {}  score: {}  ticks: {}", game.turns(), game.score(), game.ticks());
    }
    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = match std::env::var("RUST_LOG") {
        Ok(spec) => EnvFilter::from_str(&spec).context("parsing RUST_LOG")?,
        Err(_) => EnvFilter::default().add_directive(level.into()),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = SeedMode::Fixed(seed);
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(palette) = cli.palette {
        config.palette_size = palette;
    }
    Ok(config)
}

/// Pick a swipe, preferring swaps that create a match
fn pick_swipe(board: &Board, rng: &mut StdRng) -> Swipe {
    let mut scoring = Vec::new();
    let mut scratch = board.clone();
    for pos in board.positions() {
        for dir in [Direction::Right, Direction::Up] {
            let other = pos.step(dir);
            if !board.contains(other) {
                continue;
            }
            scratch.swap(pos, other);
            if has_matches(&scratch) {
                scoring.push((pos, dir));
            }
            scratch.swap(pos, other);
        }
    }

    let (origin, dir) = match scoring.choose(rng) {
        Some(&pick) => pick,
        None => {
            let x = rng.gen_range(0..board.width() as i32);
            let y = rng.gen_range(0..board.height() as i32);
            let dir = [Direction::Right, Direction::Left, Direction::Up, Direction::Down]
                .choose(rng)
                .copied()
                .unwrap_or(Direction::Right);
            (Position::new(x, y), dir)
        }
    };
    let (dx, dy) = dir.delta();
    Swipe::new(origin, dx as f32, dy as f32)
}

fn print_snapshot(snapshot: &match3::core::GameSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot).context("encoding snapshot")?);
    } else {
        let last = snapshot.last_turn.as_ref();
        println!(
            "turn {} score {} chain {} hash {:016x}",
            snapshot.turns,
            snapshot.score,
            last.map_or(0, |t| t.chain),
            snapshot.board_hash
        );
        print!("{}", snapshot.to_ascii());
    }
    Ok(())
}
