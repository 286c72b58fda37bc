//! Turn sequencing for a puzzle session.
//!
//! The [`GameEngine`] is the authoritative owner of the [`BoxGrid`] and the
//! [`GameState`]. A turn always runs roll → open → apply tool; the engine
//! enforces that order, ends turns that a gameplay failure wasted, and
//! decides when the game is over.
//!
//! The engine does no I/O. Front ends prompt the player, call the step that
//! matches [`GameEngine::phase`], and render the result.

mod errors;
mod turns;

pub use errors::TurnError;

use arrayvec::ArrayVec;

use crate::action::SpecialTool;
use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::state::{BoxGrid, BoxSurfaces, Direction, GameState, Position, RollReport};

/// The step the engine is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    /// First stage: pick an edge box and roll it.
    AwaitingRoll,
    /// Second stage: open one of the boxes rolled this turn.
    AwaitingOpen,
    /// A tool came out of the box and needs a target.
    AwaitingTarget(SpecialTool),
    Over,
}

/// Game engine that sequences turns over an owned grid and state.
#[derive(Clone, Debug)]
pub struct GameEngine {
    grid: BoxGrid,
    state: GameState,
    phase: TurnPhase,
}

impl GameEngine {
    /// New session: random grid, then a random target letter.
    pub fn new(config: &GameConfig, rng: &mut impl RandomSource) -> Self {
        let grid = BoxGrid::generate(rng);
        let state = GameState::generate(config, rng);
        Self::from_parts(grid, state)
    }

    /// Session over a prepared grid and state.
    pub fn from_parts(grid: BoxGrid, state: GameState) -> Self {
        let mut engine = Self {
            grid,
            state,
            phase: TurnPhase::AwaitingRoll,
        };
        engine.begin_turn();
        engine
    }

    pub fn grid(&self) -> &BoxGrid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::Over
    }

    /// Tool waiting for a target, if any.
    pub fn held_tool(&self) -> Option<SpecialTool> {
        match self.phase {
            TurnPhase::AwaitingTarget(tool) => Some(tool),
            _ => None,
        }
    }

    /// Boxes showing the target letter on top.
    pub fn score(&self) -> usize {
        self.grid.count_letter(self.state.target_letter())
    }

    /// All six faces of a box. Allowed at any time and costs nothing.
    pub fn inspect(&self, position: Position) -> &BoxSurfaces {
        self.grid.get(position).surfaces()
    }

    /// Directions a roll may take from `position`; empty off the edge.
    pub fn roll_directions(&self, position: Position) -> ArrayVec<Direction, 2> {
        Direction::inward_from(position, self.grid.size())
    }

    /// First stage: domino roll from an edge box.
    ///
    /// Non-edge positions and outward directions are rejected without using
    /// the turn. Rolling a fixed edge box wastes the turn.
    pub fn roll(&mut self, edge: Position, direction: Direction) -> Result<RollReport, TurnError> {
        self.ensure_phase("roll", |phase| phase == TurnPhase::AwaitingRoll)?;

        let directions = self.roll_directions(edge);
        if directions.is_empty() {
            return Err(TurnError::NotAnEdge { position: edge });
        }
        if !directions.contains(&direction) {
            return Err(TurnError::InvalidDirection {
                position: edge,
                direction,
            });
        }

        match self.grid.roll_from_edge(edge, direction) {
            Ok(report) => {
                self.phase = TurnPhase::AwaitingOpen;
                Ok(report)
            }
            Err(error) => {
                self.end_turn();
                Err(error.into())
            }
        }
    }

    /// Second stage: open a box rolled this turn.
    ///
    /// An empty box wastes the turn; a tool moves the engine to
    /// [`TurnPhase::AwaitingTarget`].
    pub fn open(&mut self, position: Position) -> Result<SpecialTool, TurnError> {
        self.ensure_phase("open a box", |phase| phase == TurnPhase::AwaitingOpen)?;

        if !self.grid.was_rolled_last(position) {
            return Err(TurnError::NotRolledThisTurn { position });
        }

        match self.grid.get_mut(position).open() {
            Ok(tool) => {
                tracing::debug!(%position, %tool, "box opened");
                self.phase = TurnPhase::AwaitingTarget(tool);
                Ok(tool)
            }
            Err(error) => {
                self.end_turn();
                Err(error.into())
            }
        }
    }

    /// Uses the held tool at `target` with the session's target letter and
    /// ends the turn, whether or not the tool took effect.
    pub fn apply_tool(&mut self, target: Position) -> Result<Vec<Position>, TurnError> {
        self.ensure_phase("use a tool", |phase| {
            matches!(phase, TurnPhase::AwaitingTarget(_))
        })?;
        let Some(tool) = self.held_tool() else {
            return Err(TurnError::OutOfPhase {
                action: "use a tool",
                phase: self.phase,
            });
        };

        let outcome = tool.apply(&mut self.grid, self.state.target_letter(), target);
        self.end_turn();
        outcome.map_err(TurnError::from)
    }
}
