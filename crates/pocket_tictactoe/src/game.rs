//! Game session for tic-tac-toe.

use super::action::{Move, MoveError};
use super::rules::game_result;
use super::solver::Solver;
use super::{Board, GameResult, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits across the board from player X.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two people share the board.
    #[default]
    VsFriend,
    /// The solver plays O.
    VsComputer,
}

impl GameMode {
    /// The mark played by the computer in this mode, if any.
    pub fn computer(self) -> Option<Player> {
        match self {
            GameMode::VsFriend => None,
            GameMode::VsComputer => Some(Player::O),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the board for one game. The result is recomputed from the board
/// after every move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    mode: GameMode,
    result: GameResult,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            mode,
            result: GameResult::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true if the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        !self.result.is_over() && self.mode.computer() == Some(self.to_move)
    }

    /// Places the current player's mark at `position`.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, position: Position) -> Result<GameResult, MoveError> {
        self.play(Move::new(self.to_move, position))
    }

    /// Applies a move after validating it.
    #[instrument(skip(self), fields(player = ?action.player, position = %action.position))]
    pub fn play(&mut self, action: Move) -> Result<GameResult, MoveError> {
        if self.result.is_over() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        self.board.place(action.position, action.player);
        self.history.push(action);
        self.result = game_result(&self.board);
        if !self.result.is_over() {
            self.to_move = self.to_move.opponent();
        } else {
            info!(result = %self.result, moves = self.history.len(), "Game finished");
        }
        Ok(self.result)
    }

    /// Lets the solver play for the player to move.
    ///
    /// Returns the move made, or `None` if the game is already over.
    #[instrument(skip(self, solver))]
    pub fn solver_move(&mut self, solver: &Solver) -> Result<Option<Move>, MoveError> {
        if self.result.is_over() {
            return Ok(None);
        }
        let Some(position) = solver.best_move(&self.board, self.to_move) else {
            return Ok(None);
        };
        let action = Move::new(self.to_move, position);
        debug!(%action, "Solver move");
        self.play(action)?;
        Ok(Some(action))
    }

    /// Starts over with an empty board in the same mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
