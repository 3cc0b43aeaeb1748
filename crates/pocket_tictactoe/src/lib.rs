//! Pure tic-tac-toe game logic.
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Position`], [`Move`]
//! - **Rules**: win and draw detection in [`rules`]
//! - **Solver**: perfect play via [`best_move`] or a configured [`Solver`]
//! - **Game**: a move-validating session in [`Game`]
//!
//! # Example
//!
//! ```
//! use pocket_tictactoe::{best_move, Board, Player, Position};
//!
//! let board = Board::parse("XX_OO____").unwrap();
//! assert_eq!(best_move(&board, Player::X), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
mod solver;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameMode};
pub use position::Position;
pub use rules::{check_winner, game_result, is_full, is_winning_move};
pub use solver::{best_move, Analysis, MoveReason, Solver, SolverConfig};
pub use types::{Board, BoardParseError, GameResult, Player, Square};
