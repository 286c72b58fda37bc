//! Console front end for the box top side matching puzzle.
//!
//! The crate owns everything that touches a terminal: reading the player's
//! answers, rendering the grid, and logging the session to a file. The rules
//! themselves live in `puzzle-core`; [`CliApp`] only drives its engine.

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::CliApp;
pub use config::CliConfig;
