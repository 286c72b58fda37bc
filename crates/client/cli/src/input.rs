//! Parsing of the player's typed answers.
//!
//! Every parser takes a single line and never prints; the app decides how to
//! re-prompt based on the returned error.
use puzzle_core::{GameConfig, Position, PositionError};

/// Answer to a `[1] ... or [2] ...` question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    /// Picks the matching element of a two-option pair.
    pub fn select<T>(self, [first, second]: [T; 2]) -> T {
        match self {
            Choice::First => first,
            Choice::Second => second,
        }
    }
}

/// Why a row or column number was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LineNumberError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is outside 1-{max}")]
    OutOfRange { value: i64, max: usize },
}

/// `1` or `2`, surrounding whitespace ignored.
pub fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim() {
        "1" => Some(Choice::First),
        "2" => Some(Choice::Second),
        _ => None,
    }
}

/// A grid location in any accepted `R#-C#` / `R#C#` / `#-#` form.
pub fn parse_position(line: &str) -> Result<Position, PositionError> {
    line.trim().parse()
}

/// A 1-based row or column number, returned 0-based.
pub fn parse_line_number(line: &str) -> Result<usize, LineNumberError> {
    let trimmed = line.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| LineNumberError::NotANumber(trimmed.to_owned()))?;

    let max = GameConfig::GRID_SIZE;
    if (1..=max as i64).contains(&value) {
        Ok(value as usize - 1)
    } else {
        Err(LineNumberError::OutOfRange { value, max })
    }
}
