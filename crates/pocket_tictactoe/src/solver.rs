//! Perfect-play move selection.
//!
//! The solver answers "what is the best move for this player?" with a
//! fixed chain of rules: take an immediate win, block an immediate loss,
//! apply the opening and fork heuristics, and otherwise run an exhaustive
//! minimax search with alpha-beta pruning.
//!
//! Search happens on a stack-local copy of the caller's board. Each trial
//! mark is placed, scored recursively and cleared again before the next
//! candidate is tried, so no board is allocated per node.

use super::rules::{check_winner, is_full, is_winning_move};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Score of a win found at search depth zero.
const WIN_SCORE: i32 = 10;

/// Which heuristic shortcuts the solver may take before searching.
///
/// Immediate wins and blocks are always taken. The remaining shortcuts
/// reproduce the classic opening play; with them off every other move is
/// chosen by the exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Prefer the center, then a corner, while at most two marks are placed.
    #[serde(default = "default_enabled")]
    pub opening_heuristics: bool,

    /// Prefer an edge when holding the center against two opposing corners.
    #[serde(default = "default_enabled")]
    pub fork_guard: bool,
}

fn default_enabled() -> bool {
    true
}

impl SolverConfig {
    /// Configuration that decides every non-forced move by search alone.
    pub fn search_only() -> Self {
        Self {
            opening_heuristics: false,
            fork_guard: false,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening_heuristics: default_enabled(),
            fork_guard: default_enabled(),
        }
    }
}

/// The rule that decided a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveReason {
    /// The move completes three in a row.
    #[display("immediate win")]
    ImmediateWin,
    /// The move denies the opponent an immediate win.
    #[display("block")]
    Block,
    /// Opening play: the center was free.
    #[display("opening center")]
    OpeningCenter,
    /// Opening play: the opponent holds the center, take a corner.
    #[display("opening corner")]
    OpeningCorner,
    /// Holding the center against two corners: take an edge.
    #[display("fork guard")]
    ForkGuard,
    /// Chosen by minimax search.
    #[display("minimax search")]
    Search,
}

/// A chosen move and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The chosen cell.
    pub position: Position,
    /// The rule that picked it.
    pub reason: MoveReason,
    /// Minimax score of the move, present when search decided it.
    pub score: Option<i32>,
    /// Positions visited by the search (zero for shortcut rules).
    pub nodes: u64,
}

/// Tic-tac-toe solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the best move for `player`, or `None` on a full board.
    pub fn best_move(&self, board: &Board, player: Player) -> Option<Position> {
        self.analyze(board, player).map(|analysis| analysis.position)
    }

    /// Chooses a move for `player` and reports which rule chose it.
    ///
    /// Returns `None` if the board has no empty square. The caller's board
    /// is never modified.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn analyze(&self, board: &Board, player: Player) -> Option<Analysis> {
        let mut scratch = *board;
        let empty = scratch.empty_count();
        if empty == 0 {
            debug!("Board is full, no move available");
            return None;
        }

        if let Some(position) = find_completing_move(&mut scratch, player) {
            debug!(%position, "Found winning move");
            return Some(shortcut(position, MoveReason::ImmediateWin));
        }

        if let Some(position) = find_completing_move(&mut scratch, player.opponent()) {
            debug!(%position, "Found blocking move");
            return Some(shortcut(position, MoveReason::Block));
        }

        if self.config.opening_heuristics && empty >= 7 {
            if scratch.is_empty(Position::Center) {
                debug!("Strategic move: taking center");
                return Some(shortcut(Position::Center, MoveReason::OpeningCenter));
            }
            if scratch.get(Position::Center) == Square::Occupied(player.opponent())
                && let Some(corner) = first_empty(&scratch, &Position::CORNERS)
            {
                debug!(position = %corner, "Strategic move: taking corner");
                return Some(shortcut(corner, MoveReason::OpeningCorner));
            }
        }

        if self.config.fork_guard && scratch.get(Position::Center) == Square::Occupied(player) {
            let opposing_corners = Position::CORNERS
                .iter()
                .filter(|c| scratch.get(**c) == Square::Occupied(player.opponent()))
                .count();
            if opposing_corners >= 2
                && let Some(edge) = first_empty(&scratch, &Position::EDGES)
            {
                debug!(position = %edge, opposing_corners, "Fork prevention: choosing edge");
                return Some(shortcut(edge, MoveReason::ForkGuard));
            }
        }

        let mut search = Search::new(&mut scratch, player);
        let (position, score) = search.best_root_move()?;
        debug!(%position, score, nodes = search.nodes, "Search chose move");
        Some(Analysis {
            position,
            reason: MoveReason::Search,
            score: Some(score),
            nodes: search.nodes,
        })
    }
}

/// Returns the best move for `player` using the default solver.
///
/// `None` means the board is already full; a caller that checks
/// [`is_full`] first never sees it.
pub fn best_move(board: &Board, player: Player) -> Option<Position> {
    Solver::default().best_move(board, player)
}

fn shortcut(position: Position, reason: MoveReason) -> Analysis {
    Analysis {
        position,
        reason,
        score: None,
        nodes: 0,
    }
}

fn first_empty(board: &Board, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|pos| board.is_empty(*pos))
}

/// First empty cell where `player`'s mark would complete a line.
fn find_completing_move(board: &mut Board, player: Player) -> Option<Position> {
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.place(pos, player);
        let wins = is_winning_move(board, pos);
        board.clear(pos);
        if wins {
            return Some(pos);
        }
    }
    None
}

/// Minimax state threaded through the recursion.
struct Search<'a> {
    board: &'a mut Board,
    me: Player,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(board: &'a mut Board, me: Player) -> Self {
        Self { board, me, nodes: 0 }
    }

    /// Scores every empty cell and keeps the first strictly best one.
    ///
    /// Each candidate gets a fresh window, so the reported scores are exact
    /// rather than bounds.
    fn best_root_move(&mut self) -> Option<(Position, i32)> {
        let mut best: Option<(Position, i32)> = None;
        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }
            self.board.place(pos, self.me);
            let score = self.minimax(0, false, i32::MIN, i32::MAX);
            self.board.clear(pos);
            trace!(position = %pos, score, "Scored candidate");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }
        best
    }

    fn minimax(&mut self, depth: i32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        match check_winner(self.board) {
            Some(winner) if winner == self.me => return WIN_SCORE - depth,
            Some(_) => return depth - WIN_SCORE,
            None if is_full(self.board) => return 0,
            None => {}
        }

        let mover = if maximizing { self.me } else { self.me.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }
            self.board.place(pos, mover);
            let score = self.minimax(depth + 1, !maximizing, alpha, beta);
            self.board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
