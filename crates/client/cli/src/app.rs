//! Prompt loop driving a [`GameEngine`] over line-based I/O.
use std::io::{BufRead, Write};

use anyhow::Result;
use puzzle_core::{
    BoxError, Direction, GameEngine, GameError, Position, SpecialTool, ToolTarget, TurnError,
};

use crate::input::{self, LineNumberError};
use crate::presentation;

/// Console session over any line reader and writer.
///
/// Prompt helpers return `Ok(None)` once input is exhausted; the session then
/// stops without the game-over block.
pub struct CliApp<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the engine reports the game over or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let welcome = presentation::welcome(self.engine.state());
        writeln!(self.output, "{welcome}")?;
        writeln!(self.output, "The initial state of the box grid:")?;
        self.show_grid()?;

        while !self.engine.is_over() {
            let turn = self.engine.state().current_turn();
            tracing::info!(turn, "turn started");
            if self.play_turn(turn)?.is_none() {
                tracing::warn!(turn, "input closed mid-game");
                writeln!(self.output)?;
                writeln!(self.output, "Input closed. Ending the session.")?;
                return Ok(());
            }
        }

        self.show_game_over()
    }

    fn play_turn(&mut self, turn: u32) -> Result<Option<()>> {
        writeln!(self.output, "=====> TURN {turn}:")?;
        if self.offer_view()?.is_none() {
            return Ok(None);
        }

        writeln!(self.output, "---> TURN {turn} - FIRST STAGE:")?;
        let Some(edge) = self.prompt_edge()? else {
            return Ok(None);
        };
        let Some(direction) = self.prompt_direction(edge)? else {
            return Ok(None);
        };

        match self.engine.roll(edge, direction) {
            Ok(report) => {
                tracing::info!(%edge, direction = %report.direction, rolled = report.rolled.len(), "rolled");
                writeln!(self.output, "{}", presentation::roll_summary(&report))?;
                self.show_grid()?;
            }
            Err(TurnError::Box(error @ BoxError::UnmovableFixed { .. })) => {
                tracing::info!(position = %error.position(), code = error.error_code(), "turn wasted");
                writeln!(
                    self.output,
                    "HOWEVER, IT IS A FIXED BOX AND CANNOT BE MOVED. Continuing to the next turn..."
                )?;
                return Ok(Some(()));
            }
            Err(error) => return Err(unexpected(error)),
        }

        writeln!(self.output, "---> TURN {turn} - SECOND STAGE:")?;
        let Some(chosen) = self.prompt_rolled_box()? else {
            return Ok(None);
        };

        let tool = match self.engine.open(chosen) {
            Ok(tool) => tool,
            Err(TurnError::Box(error @ BoxError::EmptyBox { .. })) => {
                tracing::info!(position = %error.position(), code = error.error_code(), "turn wasted");
                writeln!(self.output, "BOX IS EMPTY! Continuing to the next turn...")?;
                return Ok(Some(()));
            }
            Err(error) => return Err(unexpected(error)),
        };
        writeln!(
            self.output,
            "The box on location {chosen} is opened. It contains a SpecialTool --> {tool}"
        )?;

        let Some(target) = self.prompt_tool_target(tool)? else {
            return Ok(None);
        };
        self.use_tool(tool, target)?;

        Ok(Some(()))
    }

    fn use_tool(&mut self, tool: SpecialTool, target: Position) -> Result<()> {
        let letter = self.engine.state().target_letter();
        match self.engine.apply_tool(target) {
            Ok(footprint) => {
                tracing::info!(%tool, %target, changed = footprint.len(), "tool applied");
                let message = presentation::tool_success(tool, target, letter);
                writeln!(self.output, "{message}")?;
                self.show_grid()?;
            }
            Err(TurnError::Box(error @ BoxError::UnmovableFixed { .. })) => {
                tracing::info!(%tool, position = %error.position(), code = error.error_code(), "tool wasted");
                writeln!(
                    self.output,
                    "HOWEVER, IT IS A FIXED BOX AND CANNOT BE MOVED. Turn wasted."
                )?;
            }
            Err(TurnError::Box(error @ BoxError::BoxAlreadyFixed { .. })) => {
                tracing::info!(%tool, position = %error.position(), code = error.error_code(), "tool wasted");
                writeln!(self.output, "Box is already fixed. Turn wasted.")?;
            }
            Err(error) => return Err(unexpected(error)),
        }
        Ok(())
    }

    fn show_game_over(&mut self) -> Result<()> {
        let state = self.engine.state().clone();
        let score = self.engine.score();
        tracing::info!(status = %state.status(), score, "game over");

        writeln!(self.output)?;
        writeln!(self.output, "******** GAME OVER ********")?;
        writeln!(self.output, "The final state of the box grid:")?;
        self.show_grid()?;
        writeln!(
            self.output,
            "{}",
            presentation::final_count(state.target_letter(), score)
        )?;
        writeln!(self.output, "{}", presentation::outcome(&state))?;
        Ok(())
    }

    fn show_grid(&mut self) -> Result<()> {
        writeln!(self.output, "{}", presentation::format_grid(self.engine.grid()))?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Prompts
    // ------------------------------------------------------------------

    fn offer_view(&mut self) -> Result<Option<()>> {
        self.prompt("---> Do you want to view all surfaces of a box? [1] Yes or [2] No? ")?;
        let Some(choice) = self.read_choice()? else {
            return Ok(None);
        };

        if choice == input::Choice::Second {
            writeln!(self.output, "Continuing to the first stage...")?;
            return Ok(Some(()));
        }

        self.prompt("Please enter the location of the box you want to view: ")?;
        let Some(position) = self.read_position("INCORRECT INPUT: Invalid format. Please reenter: ")?
        else {
            return Ok(None);
        };
        let diagram = self.engine.inspect(position).cube_diagram();
        writeln!(self.output, "{diagram}")?;
        Ok(Some(()))
    }

    fn prompt_edge(&mut self) -> Result<Option<Position>> {
        self.prompt("Please enter the location of the edge box you want to roll: ")?;
        loop {
            let Some(position) = self.read_position(
                "INCORRECT INPUT: Invalid format. Please reenter the location: ",
            )?
            else {
                return Ok(None);
            };
            if self.engine.grid().is_edge_position(position) {
                return Ok(Some(position));
            }
            self.prompt(
                "INCORRECT INPUT: The chosen box is not on any of the edges. Please reenter the location: ",
            )?;
        }
    }

    /// Edge boxes roll inward automatically; corners ask which way.
    fn prompt_direction(&mut self, edge: Position) -> Result<Option<Direction>> {
        let directions = self.engine.roll_directions(edge);
        match directions.as_slice() {
            [only] => {
                writeln!(
                    self.output,
                    "The chosen box is automatically rolled to {}.",
                    presentation::direction_phrase(*only)
                )?;
                Ok(Some(*only))
            }
            [first, second] => {
                writeln!(
                    self.output,
                    "The chosen box can be rolled to either [1] {} or [2] {}: ",
                    presentation::direction_phrase(*first),
                    presentation::direction_phrase(*second)
                )?;
                let choice = self.read_choice()?;
                Ok(choice.map(|choice| choice.select([*first, *second])))
            }
            _ => Err(TurnError::NotAnEdge { position: edge }.into()),
        }
    }

    fn prompt_rolled_box(&mut self) -> Result<Option<Position>> {
        self.prompt("Please enter the location of the box you want to open: ")?;
        loop {
            let Some(position) = self.read_position(
                "INCORRECT INPUT: Invalid format. Please reenter the location: ",
            )?
            else {
                return Ok(None);
            };
            if self.engine.grid().was_rolled_last(position) {
                return Ok(Some(position));
            }
            self.prompt(
                "INCORRECT INPUT: The chosen box was not rolled during the first stage. Please reenter the location: ",
            )?;
        }
    }

    /// Rows and columns are asked for by number and mapped onto the first
    /// cell of that line.
    fn prompt_tool_target(&mut self, tool: SpecialTool) -> Result<Option<Position>> {
        self.prompt("Please enter the location of the box to use this SpecialTool: ")?;
        let target = match tool.target() {
            ToolTarget::Cell => {
                return self.read_position("INCORRECT INPUT: Invalid format. Please reenter: ");
            }
            ToolTarget::Row => self
                .read_line_number("Row")?
                .map(|row| Position::new(row, 0))
                .transpose()?,
            ToolTarget::Column => self
                .read_line_number("Column")?
                .map(|column| Position::new(0, column))
                .transpose()?,
        };
        Ok(target)
    }

    // ------------------------------------------------------------------
    // Line readers
    // ------------------------------------------------------------------

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Invalid UTF-8 is replaced rather than rejected so the caller's
    /// re-prompt handles it like any other bad answer.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).trim().to_owned()))
    }

    fn read_choice(&mut self) -> Result<Option<input::Choice>> {
        while let Some(line) = self.read_line()? {
            if let Some(choice) = input::parse_choice(&line) {
                return Ok(Some(choice));
            }
            self.prompt("Invalid choice. Please enter 1 or 2: ")?;
        }
        Ok(None)
    }

    fn read_position(&mut self, retry: &str) -> Result<Option<Position>> {
        while let Some(line) = self.read_line()? {
            match input::parse_position(&line) {
                Ok(position) => return Ok(Some(position)),
                Err(error) => {
                    tracing::debug!(%error, "rejected position input");
                    self.prompt(retry)?;
                }
            }
        }
        Ok(None)
    }

    /// `label` is `Row` or `Column`; returns the 0-based index.
    fn read_line_number(&mut self, label: &str) -> Result<Option<usize>> {
        while let Some(line) = self.read_line()? {
            match input::parse_line_number(&line) {
                Ok(index) => return Ok(Some(index)),
                Err(LineNumberError::OutOfRange { max, .. }) => {
                    self.prompt(&format!(
                        "INCORRECT INPUT: {label} must be 1-{max}. Please reenter: "
                    ))?;
                }
                Err(LineNumberError::NotANumber(_)) => {
                    self.prompt("INCORRECT INPUT: Invalid number. Please reenter: ")?;
                }
            }
        }
        Ok(None)
    }
}

/// Contract violations the prompts should have ruled out.
fn unexpected(error: TurnError) -> anyhow::Error {
    tracing::warn!(
        code = error.error_code(),
        severity = error.severity().as_str(),
        %error,
        "engine rejected a validated answer"
    );
    error.into()
}
