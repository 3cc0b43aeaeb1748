//! Full tic-tac-toe games between two contenders.

use pocket_tictactoe::{Board, Game, GameMode, GameResult, Move, MoveError, Player as Mark, Position, Solver};
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Something that can pick a square for a mark.
pub trait Contender {
    /// Chooses a square for `mark` on `board`, or `None` to resign.
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Position>;

    /// Returns the contender's display name.
    fn name(&self) -> &str;
}

/// Plays the solver's move every turn.
#[derive(Debug, Clone, Default)]
pub struct PerfectPlayer {
    solver: Solver,
}

impl PerfectPlayer {
    /// Creates a perfect player backed by `solver`.
    pub fn new(solver: Solver) -> Self {
        Self { solver }
    }
}

impl Contender for PerfectPlayer {
    fn choose(&mut self, board: &Board, mark: Mark) -> Option<Position> {
        self.solver.best_move(board, mark)
    }

    fn name(&self) -> &str {
        "perfect"
    }
}

/// Picks a uniformly random empty square.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Contender for RandomPlayer<R> {
    fn choose(&mut self, board: &Board, _mark: Mark) -> Option<Position> {
        board.empty_positions().choose(&mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Final result, never `InProgress`.
    pub result: GameResult,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: Board,
}

/// Reasons a match cannot be completed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// A contender returned no move on a board with empty squares.
    #[display("Player {} forfeited with moves remaining", _0)]
    Forfeit(Mark),
    /// A contender chose an illegal square.
    #[display("Illegal move: {}", _0)]
    Illegal(MoveError),
}

impl std::error::Error for MatchError {}

impl From<MoveError> for MatchError {
    fn from(err: MoveError) -> Self {
        MatchError::Illegal(err)
    }
}

/// Plays one game with `x` moving first.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_match(x: &mut dyn Contender, o: &mut dyn Contender) -> Result<MatchRecord, MatchError> {
    let mut game = Game::new(GameMode::VsFriend);

    while !game.result().is_over() {
        let mark = game.to_move();
        let contender: &mut dyn Contender = match mark {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let position = contender
            .choose(game.board(), mark)
            .ok_or(MatchError::Forfeit(mark))?;
        debug!(player = %mark, %position, "Contender moved");
        game.make_move(position)?;
    }

    Ok(MatchRecord {
        result: game.result(),
        moves: game.history().to_vec(),
        board: *game.board(),
    })
}

/// Win/loss/draw counts from the solver's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by the solver.
    pub solver_wins: u32,
    /// Games won by the opponent.
    pub opponent_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game for a solver playing `solver_mark`.
    pub fn record(&mut self, result: GameResult, solver_mark: Mark) {
        match result.winner() {
            Some(winner) if winner == solver_mark => self.solver_wins += 1,
            Some(_) => self.opponent_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.solver_wins + self.opponent_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} solver wins, {} opponent wins, {} draws",
            self.games(),
            self.solver_wins,
            self.opponent_wins,
            self.draws
        )
    }
}

/// Plays `games` games of `solver` against a random opponent seeded from `rng`.
#[instrument(skip(solver, rng))]
pub fn self_play<R: Rng>(
    solver: Solver,
    solver_mark: Mark,
    games: u32,
    rng: R,
) -> Result<Tally, MatchError> {
    let mut perfect = PerfectPlayer::new(solver);
    let mut random = RandomPlayer::new(rng);
    let mut tally = Tally::default();

    for _ in 0..games {
        let record = match solver_mark {
            Mark::X => play_match(&mut perfect, &mut random)?,
            Mark::O => play_match(&mut random, &mut perfect)?,
        };
        tally.record(record.result, solver_mark);
    }

    info!(%tally, "Self-play finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Resigner;

    impl Contender for Resigner {
        fn choose(&mut self, _board: &Board, _mark: Mark) -> Option<Position> {
            None
        }

        fn name(&self) -> &str {
            "resigner"
        }
    }

    struct CenterOnly;

    impl Contender for CenterOnly {
        fn choose(&mut self, _board: &Board, _mark: Mark) -> Option<Position> {
            Some(Position::Center)
        }

        fn name(&self) -> &str {
            "center"
        }
    }

    #[test]
    fn test_perfect_players_draw() {
        let mut x = PerfectPlayer::default();
        let mut o = PerfectPlayer::default();
        let record = play_match(&mut x, &mut o).unwrap();
        assert_eq!(record.result, GameResult::Draw);
        assert_eq!(record.moves.len(), 9);
    }

    #[test]
    fn test_forfeit_is_reported() {
        let mut x = PerfectPlayer::default();
        let mut o = Resigner;
        assert_eq!(play_match(&mut x, &mut o), Err(MatchError::Forfeit(Mark::O)));
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let mut x = CenterOnly;
        let mut o = CenterOnly;
        assert_eq!(
            play_match(&mut x, &mut o),
            Err(MatchError::Illegal(MoveError::SquareOccupied(Position::Center)))
        );
    }

    #[test]
    fn test_self_play_never_loses() {
        for mark in [Mark::X, Mark::O] {
            let tally = self_play(Solver::default(), mark, 50, StdRng::seed_from_u64(7)).unwrap();
            assert_eq!(tally.games(), 50);
            assert_eq!(tally.opponent_wins, 0);
        }
    }

    #[test]
    fn test_tally_records_from_solver_side() {
        let mut tally = Tally::default();
        tally.record(GameResult::Win(Mark::O), Mark::O);
        tally.record(GameResult::Win(Mark::X), Mark::O);
        tally.record(GameResult::Draw, Mark::O);
        assert_eq!(
            tally,
            Tally {
                solver_wins: 1,
                opponent_wins: 1,
                draws: 1
            }
        );
        assert_eq!(tally.to_string(), "3 games: 1 solver wins, 1 opponent wins, 1 draws");
    }
}
