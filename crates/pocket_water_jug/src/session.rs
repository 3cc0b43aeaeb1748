//! One player's water jug session.

use super::config::{JugConfiguration, JugError};
use super::operation::{apply, JugOperation, JugState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of an accepted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JugOutcome {
    /// Levels changed; target not reached.
    Moved(JugState),
    /// Nothing to pour; the move is not counted.
    Unchanged(JugState),
    /// One jug now holds the target.
    Solved {
        /// Final levels.
        state: JugState,
        /// Moves used.
        moves: u32,
    },
}

/// Jugs, levels and move counter for one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JugSession {
    config: JugConfiguration,
    state: JugState,
    move_count: u32,
    solved: bool,
}

impl JugSession {
    /// Starts with both jugs empty.
    ///
    /// A target of zero is met before any move is made.
    #[instrument]
    pub fn new(config: JugConfiguration) -> Self {
        let state = JugState::default();
        Self {
            config,
            state,
            move_count: 0,
            solved: state.reaches(config.target()),
        }
    }

    /// The puzzle being played.
    pub fn config(&self) -> &JugConfiguration {
        &self.config
    }

    /// Current levels.
    pub fn state(&self) -> JugState {
        self.state
    }

    /// Moves counted so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// True once a jug has held the target.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Applies an operation and checks the win condition.
    ///
    /// Fills and empties always count as a move, a pour counts only when
    /// water actually moves.
    #[instrument(skip(self), fields(state = %self.state, moves = self.move_count))]
    pub fn perform(&mut self, operation: JugOperation) -> Result<JugOutcome, JugError> {
        if self.solved {
            return Err(JugError::AlreadySolved);
        }

        let next = apply(&self.config, self.state, operation);
        let is_pour = matches!(operation, JugOperation::PourAToB | JugOperation::PourBToA);
        if is_pour && next == self.state {
            debug!("Nothing to pour");
            return Ok(JugOutcome::Unchanged(next));
        }

        self.state = next;
        self.move_count += 1;
        if next.reaches(self.config.target()) {
            self.solved = true;
            info!(moves = self.move_count, state = %next, "Target measured");
            return Ok(JugOutcome::Solved {
                state: next,
                moves: self.move_count,
            });
        }
        Ok(JugOutcome::Moved(next))
    }

    /// Empties both jugs and resets the counter for the same puzzle.
    pub fn restart(&mut self) {
        *self = Self::new(self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use JugOperation::*;

    #[test]
    fn test_classic_session() {
        let mut session = JugSession::new(JugConfiguration::CLASSIC);
        for op in [FillA, PourAToB, EmptyB, PourAToB, FillA] {
            assert!(matches!(session.perform(op), Ok(JugOutcome::Moved(_))));
        }
        assert_eq!(
            session.perform(PourAToB),
            Ok(JugOutcome::Solved {
                state: JugState::new(4, 3),
                moves: 6
            })
        );
        assert!(session.is_solved());
        assert_eq!(session.perform(EmptyA), Err(JugError::AlreadySolved));
    }

    #[test]
    fn test_empty_pour_is_not_counted() {
        let mut session = JugSession::new(JugConfiguration::CLASSIC);
        assert_eq!(
            session.perform(PourAToB),
            Ok(JugOutcome::Unchanged(JugState::default()))
        );
        assert_eq!(session.move_count(), 0);

        // Emptying an empty jug is still a move.
        session.perform(EmptyB).unwrap();
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn test_zero_target_starts_solved() {
        let session = JugSession::new(JugConfiguration::new(5, 3, 0).unwrap());
        assert!(session.is_solved());
    }

    #[test]
    fn test_restart() {
        let mut session = JugSession::new(JugConfiguration::CLASSIC);
        session.perform(FillB).unwrap();
        session.restart();
        assert_eq!(session.state(), JugState::default());
        assert_eq!(session.move_count(), 0);
    }
}
