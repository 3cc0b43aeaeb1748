//! Pocket Games - Unified CLI
//!
//! Solver queries, puzzle checks and scripted play from the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, EightPuzzleCommand, Slides, TictactoeCommand, WaterJugCommand};
use pocket_games::{
    choose_solvable, generate_solvable, self_play, BestMoveReport, Board, EightPuzzleSession,
    GamesConfig, JugConfiguration, JugOperation, JugOutcome, JugPlayReport, JugReport,
    JugSession, JugStep, SlideReport, SlidingPuzzle, Solver, TicTacToePlayer, Tiles, TilesReport,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pocket_games=debug".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GamesConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;
    let json = cli.json;

    match cli.command {
        Command::Tictactoe(TictactoeCommand::BestMove { board, player }) => {
            run_best_move(&config, board, player, json)
        }
        Command::Tictactoe(TictactoeCommand::SelfPlay { games, seed, solver }) => {
            run_self_play(&config, games, seed, solver, json)
        }
        Command::EightPuzzle(EightPuzzleCommand::Shuffle { seed }) => run_shuffle(seed, json),
        Command::EightPuzzle(EightPuzzleCommand::Check { tiles }) => run_check_tiles(tiles, json),
        Command::EightPuzzle(EightPuzzleCommand::Play { tiles, slides }) => {
            run_slides(tiles, slides, json)
        }
        Command::WaterJug(WaterJugCommand::Check {
            capacity_a,
            capacity_b,
            target,
        }) => run_check_jugs(capacity_a, capacity_b, target, json),
        Command::WaterJug(WaterJugCommand::Random { seed }) => run_random_jugs(&config, seed, json),
        Command::WaterJug(WaterJugCommand::Play {
            capacity_a,
            capacity_b,
            target,
            operations,
        }) => run_play_jugs(capacity_a, capacity_b, target, operations, json),
    }
}

/// Prints `report` as JSON or text.
fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Seeded generator, or one seeded from the OS.
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "Using seeded generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

/// Print the solver's move for a board
#[instrument(skip(config))]
fn run_best_move(
    config: &GamesConfig,
    board: Board,
    player: Option<TicTacToePlayer>,
    json: bool,
) -> Result<()> {
    let player = player.unwrap_or_else(|| board.to_move());
    let solver = Solver::new(*config.solver());
    emit(&BestMoveReport::new(&solver, board, player), json)
}

/// Play the solver against a random opponent
#[instrument(skip(config))]
fn run_self_play(
    config: &GamesConfig,
    games: Option<u32>,
    seed: Option<u64>,
    solver_mark: TicTacToePlayer,
    json: bool,
) -> Result<()> {
    let games = games.unwrap_or(*config.self_play_games());
    info!(games, %solver_mark, "Starting self-play");
    let tally = self_play(Solver::new(*config.solver()), solver_mark, games, rng_from(seed))?;
    emit(&tally, json)
}

/// Generate a random solvable 8-puzzle
#[instrument]
fn run_shuffle(seed: Option<u64>, json: bool) -> Result<()> {
    let tiles = generate_solvable(&mut rng_from(seed));
    emit(&TilesReport::from(tiles), json)
}

/// Check an 8-puzzle arrangement
#[instrument]
fn run_check_tiles(tiles: [u8; 9], json: bool) -> Result<()> {
    let tiles = Tiles::new(tiles)?;
    emit(&TilesReport::from(tiles), json)
}

/// Apply slides to an 8-puzzle arrangement
#[instrument]
fn run_slides(tiles: [u8; 9], slides: Slides, json: bool) -> Result<()> {
    let mut session = EightPuzzleSession::with_puzzle(SlidingPuzzle::new(Tiles::new(tiles)?));
    for (row, col) in slides.0 {
        session
            .slide(row, col)
            .with_context(|| format!("Sliding ({}, {})", row, col))?;
    }
    let report = SlideReport {
        puzzle: *session.puzzle(),
        moves: session.move_count(),
        solved: session.is_completed(),
    };
    emit(&report, json)
}

/// Check a water jug puzzle
#[instrument]
fn run_check_jugs(capacity_a: u32, capacity_b: u32, target: u32, json: bool) -> Result<()> {
    let config = JugConfiguration::new(capacity_a, capacity_b, target)?;
    emit(&JugReport::from(config), json)
}

/// Pick a random solvable water jug preset
#[instrument(skip(config))]
fn run_random_jugs(config: &GamesConfig, seed: Option<u64>, json: bool) -> Result<()> {
    let chosen = choose_solvable(config.jug_presets(), &mut rng_from(seed));
    emit(&JugReport::from(chosen), json)
}

/// Apply operations to a water jug puzzle
#[instrument]
fn run_play_jugs(
    capacity_a: u32,
    capacity_b: u32,
    target: u32,
    operations: Vec<JugOperation>,
    json: bool,
) -> Result<()> {
    let config = JugConfiguration::new(capacity_a, capacity_b, target)?;
    let mut session = JugSession::new(config);
    let mut steps = Vec::with_capacity(operations.len());

    for operation in operations {
        let outcome = session
            .perform(operation)
            .with_context(|| format!("Performing {}", operation))?;
        let (state, counted) = match outcome {
            JugOutcome::Moved(state) => (state, true),
            JugOutcome::Unchanged(state) => (state, false),
            JugOutcome::Solved { state, .. } => (state, true),
        };
        steps.push(JugStep {
            operation,
            state,
            counted,
        });
    }

    let report = JugPlayReport {
        config,
        steps,
        moves: session.move_count(),
        solved: session.is_solved(),
    };
    emit(&report, json)
}
