//! Error types for the turn pipeline.

use crate::engine::TurnPhase;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BoxError, Direction, Position};

/// Errors surfaced while driving a turn through the engine.
///
/// Contract violations (wrong phase, bad edge, unrolled box) leave the turn
/// untouched so the caller can ask again. Box errors are gameplay outcomes:
/// the engine has already ended the turn when it returns one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the game is over")]
    GameOver,

    #[error("cannot {action} while {phase}")]
    OutOfPhase {
        action: &'static str,
        phase: TurnPhase,
    },

    #[error("{position} is not on the edge of the grid")]
    NotAnEdge { position: Position },

    #[error("box at {position} cannot be rolled {direction}")]
    InvalidDirection {
        position: Position,
        direction: Direction,
    },

    #[error("box at {position} was not rolled this turn")]
    NotRolledThisTurn { position: Position },

    #[error(transparent)]
    Box(#[from] BoxError),
}

impl TurnError {
    /// True when the error consumed the current turn.
    pub fn wastes_turn(&self) -> bool {
        self.severity().is_recoverable()
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::Box(error) => error.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::GameOver => "GAME_OVER",
            TurnError::OutOfPhase { .. } => "OUT_OF_PHASE",
            TurnError::NotAnEdge { .. } => "NOT_AN_EDGE",
            TurnError::InvalidDirection { .. } => "INVALID_DIRECTION",
            TurnError::NotRolledThisTurn { .. } => "NOT_ROLLED_THIS_TURN",
            TurnError::Box(error) => error.error_code(),
        }
    }
}
