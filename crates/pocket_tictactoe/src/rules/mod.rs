//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the solver and the game
//! session share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, is_winning_move};

use super::{Board, GameResult};
use tracing::instrument;

/// Derives the result of a board from its marks.
#[instrument]
pub fn game_result(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Win(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
