//! Authoritative puzzle state.
//!
//! This module owns the board data structures (positions, boxes, the grid)
//! and the session bookkeeping in [`GameState`]. Front ends query this state
//! freely but mutate it through the engine.
mod boxes;
mod direction;
mod error;
mod grid;
mod position;
mod surfaces;

pub use boxes::{BoxKind, PuzzleBox};
pub use direction::Direction;
pub use error::{BoxError, GridError, PositionError};
pub use grid::{BoxGrid, RollReport};
pub use position::Position;
pub use surfaces::{BoxSurfaces, Face};

use crate::config::GameConfig;
use crate::env::RandomSource;

/// Where the session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Every turn was played.
    Succeeded,
    /// The player ran out of rollable edge boxes before the last turn.
    Failed,
}

/// Session bookkeeping: the target letter, the turn counter and the outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    target_letter: char,
    /// 1-based; runs one past `max_turns` once the last turn completes.
    current_turn: u32,
    max_turns: u32,
    status: GameStatus,
}

impl GameState {
    pub fn new(target_letter: char, max_turns: u32) -> Self {
        Self {
            target_letter,
            current_turn: 1,
            max_turns: max_turns.max(1),
            status: GameStatus::InProgress,
        }
    }

    /// Fresh state with a target letter drawn uniformly from the alphabet.
    pub fn generate(config: &GameConfig, rng: &mut impl RandomSource) -> Self {
        let alphabet = GameConfig::ALPHABET;
        let target = alphabet[rng.below(alphabet.len() as u32) as usize];
        Self::new(target, config.max_turns)
    }

    pub fn target_letter(&self) -> char {
        self.target_letter
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn is_success(&self) -> bool {
        self.status == GameStatus::Succeeded
    }

    pub fn has_remaining_turns(&self) -> bool {
        !self.is_over() && self.current_turn <= self.max_turns
    }

    /// Moves to the next turn; completing the last turn ends the game
    /// successfully.
    pub fn advance_turn(&mut self) {
        if self.is_over() {
            return;
        }
        self.current_turn += 1;
        if self.current_turn > self.max_turns {
            self.status = GameStatus::Succeeded;
        }
    }

    /// Ends the game early.
    pub fn finish(&mut self, success: bool) {
        self.status = if success {
            GameStatus::Succeeded
        } else {
            GameStatus::Failed
        };
    }
}
