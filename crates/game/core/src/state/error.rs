//! Grid and box errors.
//!
//! Errors raised by position construction and by the per-box operations
//! (roll, flip, open, fix).

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors that occur while building or parsing a grid coordinate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionError {
    /// Row or column outside the grid (0-based indices).
    #[error("position (row {row}, column {column}) is out of bounds (grid size: {size})")]
    OutOfBounds {
        row: i64,
        column: i64,
        size: usize,
    },

    /// Text that is neither `R#-C#` nor `#-#`.
    #[error("'{input}' is not a position (expected R#-C# or #-#)")]
    Malformed { input: String },
}

impl GameError for PositionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "POSITION_OUT_OF_BOUNDS",
            Self::Malformed { .. } => "POSITION_MALFORMED",
        }
    }
}

/// Errors raised when a grid is assembled from existing cells.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("grid needs {expected} cells, got {found}")]
    WrongCellCount { expected: usize, found: usize },

    /// Cell at row-major `index` claims a different position.
    #[error("cell {index} belongs at {expected} but records {found}")]
    MisplacedCell {
        index: usize,
        expected: Position,
        found: Position,
    },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongCellCount { .. } => "GRID_WRONG_CELL_COUNT",
            Self::MisplacedCell { .. } => "GRID_MISPLACED_CELL",
        }
    }
}

/// Errors raised by box operations. Each one costs the player the current
/// turn (or tool use) but never ends the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxError {
    /// The opened box holds no tool.
    #[error("box at {position} is empty")]
    EmptyBox { position: Position },

    /// Attempt to roll or flip a fixed box.
    #[error("box at {position} is fixed and cannot be moved")]
    UnmovableFixed { position: Position },

    /// Attempt to fix a box that is already fixed.
    #[error("box at {position} is already fixed")]
    BoxAlreadyFixed { position: Position },
}

impl BoxError {
    /// Position of the box that refused the operation.
    pub fn position(&self) -> Position {
        match *self {
            Self::EmptyBox { position }
            | Self::UnmovableFixed { position }
            | Self::BoxAlreadyFixed { position } => position,
        }
    }
}

impl GameError for BoxError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBox { .. } => "EMPTY_BOX",
            Self::UnmovableFixed { .. } => "UNMOVABLE_FIXED",
            Self::BoxAlreadyFixed { .. } => "BOX_ALREADY_FIXED",
        }
    }
}
