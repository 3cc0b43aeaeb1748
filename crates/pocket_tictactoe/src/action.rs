//! Moves and the reasons a move is refused.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// One mark placed on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Mark being placed.
    pub player: Player,
    /// Target cell.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.player, self.position)
    }
}

/// Why [`Game::play`](crate::Game::play) refused a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("{} is already taken", _0)]
    SquareOccupied(Position),

    /// A win or draw has been reached.
    #[display("The game has finished")]
    GameOver,

    /// The other mark is due to move.
    #[display("{} is not the player to move", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}
