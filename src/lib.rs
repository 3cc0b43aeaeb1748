//! Pocket Games library - small games with exact solvers
//!
//! Bundles three independent cores behind one front end.
//!
//! # Architecture
//!
//! - **Tic-tac-toe**: perfect-play solver and game session ([`pocket_tictactoe`])
//! - **8-puzzle**: inversion-parity checker, generator and session ([`pocket_sliding`])
//! - **Water jug**: GCD checker, jug operations and session ([`pocket_water_jug`])
//! - **Arena**: full solver games against other contenders
//! - **Config**: TOML settings shared by the command-line front end
//!
//! # Example
//!
//! ```
//! use pocket_games::{self_play, Solver, TicTacToePlayer};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let tally = self_play(Solver::default(), TicTacToePlayer::O, 10, StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(tally.opponent_wins, 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod arena;
mod config;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, GamesConfig};

// Crate-level exports - Match runner
pub use arena::{play_match, self_play, Contender, MatchError, MatchRecord, PerfectPlayer, RandomPlayer, Tally};

// Crate-level exports - Reports
pub use report::{BestMoveReport, JugPlayReport, JugReport, JugStep, SlideReport, TilesReport};

// Crate-level exports - Game types (tic-tac-toe)
pub use pocket_tictactoe::{
    best_move, is_full, is_winning_move, Analysis, Board, Game, GameMode, GameResult, Move,
    MoveError, MoveReason, Position, Solver, SolverConfig, Square,
    Player as TicTacToePlayer,
};

// Crate-level exports - 8-puzzle
pub use pocket_sliding::{
    generate_solvable, is_solvable as is_sliding_puzzle_solvable, EightPuzzleSession,
    SlideError, SlideOutcome, SlidingPuzzle, Tiles, TilesError,
};

// Crate-level exports - Water jug
pub use pocket_water_jug::{
    apply as apply_jug_operation, choose_solvable, is_solvable as is_jug_puzzle_solvable,
    JugConfiguration, JugError, JugOperation, JugOutcome, JugSession, JugState,
};

pub use pocket_sliding;
pub use pocket_tictactoe;
pub use pocket_water_jug;
