//! Printable results for the command-line front end.
//!
//! Each report serializes to JSON for `--json` and renders as plain text
//! otherwise.

use pocket_sliding::{SlidingPuzzle, Tiles};
use pocket_tictactoe::{Analysis, Board, Player, Solver};
use pocket_water_jug::{gcd, JugConfiguration, JugOperation, JugState};
use serde::Serialize;
use std::fmt;

/// The solver's choice for one board.
#[derive(Debug, Clone, Serialize)]
pub struct BestMoveReport {
    /// Board that was analysed.
    pub board: Board,
    /// Player to move.
    pub player: Player,
    /// Chosen move, absent on a full board.
    pub analysis: Option<Analysis>,
}

impl BestMoveReport {
    /// Runs `solver` on `board` for `player`.
    pub fn new(solver: &Solver, board: Board, player: Player) -> Self {
        Self {
            board,
            player,
            analysis: solver.analyze(&board, player),
        }
    }
}

impl fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        match &self.analysis {
            Some(analysis) => {
                write!(
                    f,
                    "Best move for {}: {} ({})",
                    self.player, analysis.position, analysis.reason
                )?;
                if let Some(score) = analysis.score {
                    write!(f, ", score {} after {} nodes", score, analysis.nodes)?;
                }
                Ok(())
            }
            None => write!(f, "No move: the board is full"),
        }
    }
}

/// Solvability of one 8-puzzle arrangement.
#[derive(Debug, Clone, Serialize)]
pub struct TilesReport {
    /// The arrangement.
    pub tiles: Tiles,
    /// Out-of-order pairs among the numbered tiles.
    pub inversions: usize,
    /// Whether the goal is reachable.
    pub solvable: bool,
}

impl From<Tiles> for TilesReport {
    fn from(tiles: Tiles) -> Self {
        Self {
            tiles,
            inversions: tiles.inversions(),
            solvable: tiles.is_solvable(),
        }
    }
}

impl fmt::Display for TilesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tiles)?;
        write!(
            f,
            "{} inversions: {}",
            self.inversions,
            if self.solvable { "solvable" } else { "unsolvable" }
        )
    }
}

/// Board after a sequence of slides.
#[derive(Debug, Clone, Serialize)]
pub struct SlideReport {
    /// Final arrangement.
    pub puzzle: SlidingPuzzle,
    /// Slides applied.
    pub moves: u32,
    /// Whether the goal was reached.
    pub solved: bool,
}

impl fmt::Display for SlideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.puzzle)?;
        if self.solved {
            write!(f, "Solved in {} moves", self.moves)
        } else {
            write!(f, "Not solved after {} moves", self.moves)
        }
    }
}

/// Solvability of one water jug puzzle.
#[derive(Debug, Clone, Serialize)]
pub struct JugReport {
    /// The puzzle.
    pub config: JugConfiguration,
    /// Greatest common divisor of the capacities.
    pub gcd: u32,
    /// Whether the target is measurable.
    pub solvable: bool,
}

impl From<JugConfiguration> for JugReport {
    fn from(config: JugConfiguration) -> Self {
        Self {
            config,
            gcd: gcd(config.capacity_a(), config.capacity_b()),
            solvable: config.is_solvable(),
        }
    }
}

impl fmt::Display for JugReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (gcd {})",
            self.config,
            if self.solvable { "solvable" } else { "unsolvable" },
            self.gcd
        )
    }
}

/// One applied jug operation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JugStep {
    /// Operation performed.
    pub operation: JugOperation,
    /// Levels afterwards.
    pub state: JugState,
    /// Whether the move counted.
    pub counted: bool,
}

/// Jug levels after a sequence of operations.
#[derive(Debug, Clone, Serialize)]
pub struct JugPlayReport {
    /// The puzzle.
    pub config: JugConfiguration,
    /// Steps in order.
    pub steps: Vec<JugStep>,
    /// Counted moves.
    pub moves: u32,
    /// Whether the target was reached.
    pub solved: bool,
}

impl fmt::Display for JugPlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.config)?;
        for step in &self.steps {
            let note = if step.counted { "" } else { " (nothing to pour)" };
            writeln!(f, "  {:<12} {}{}", step.operation.to_string(), step.state, note)?;
        }
        if self.solved {
            write!(f, "Solved in {} moves", self.moves)
        } else {
            write!(f, "Not solved after {} moves", self.moves)
        }
    }
}
