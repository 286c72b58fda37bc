use crate::state::GameStatus;

use super::{GameEngine, TurnError, TurnPhase};

/// Turn bookkeeping methods for GameEngine.
impl GameEngine {
    /// Fails with `GameOver` after the game ended, `OutOfPhase` if the
    /// engine is waiting for a different step.
    pub(super) fn ensure_phase(
        &self,
        action: &'static str,
        accepts: impl Fn(TurnPhase) -> bool,
    ) -> Result<(), TurnError> {
        match self.phase {
            TurnPhase::Over => Err(TurnError::GameOver),
            phase if accepts(phase) => Ok(()),
            phase => Err(TurnError::OutOfPhase { action, phase }),
        }
    }

    /// Closes the current turn and opens the next one, if any.
    pub(super) fn end_turn(&mut self) {
        let finished = self.state.current_turn();
        self.state.advance_turn();
        tracing::debug!(turn = finished, "turn ended");
        self.begin_turn();
    }

    /// Moves to `AwaitingRoll`, or to `Over` when the last turn has been
    /// played or no edge box can roll any more.
    pub(super) fn begin_turn(&mut self) {
        if !self.state.is_over() && !self.grid.has_any_movable_edge_box() {
            tracing::debug!(
                turn = self.state.current_turn(),
                "no movable edge box left"
            );
            self.state.finish(false);
        }

        self.phase = match self.state.status() {
            GameStatus::InProgress => TurnPhase::AwaitingRoll,
            GameStatus::Succeeded | GameStatus::Failed => TurnPhase::Over,
        };
    }
}
