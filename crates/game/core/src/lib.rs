//! Deterministic rules for the box top side matching puzzle.
//!
//! `puzzle-core` defines the canonical model (boxes, surfaces, the grid),
//! the domino roll, the tool effects and the turn state machine. It performs
//! no I/O so any front end can drive it. All state mutation during play
//! flows through [`engine::GameEngine`], and every random draw goes through a
//! caller-supplied [`env::RandomSource`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{SpecialTool, ToolTarget};
pub use config::GameConfig;
pub use engine::{GameEngine, TurnError, TurnPhase};
pub use env::{PcgRng, RandomSource};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    BoxError, BoxGrid, BoxKind, BoxSurfaces, Direction, Face, GameState, GameStatus, GridError,
    Position, PositionError, PuzzleBox, RollReport,
};
