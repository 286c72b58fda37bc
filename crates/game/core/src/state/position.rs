use std::fmt;
use std::str::FromStr;

use crate::config::GameConfig;
use crate::state::{Direction, PositionError};

const SIZE: usize = GameConfig::GRID_SIZE;

/// Cell coordinate on the box grid, 0-based internally.
///
/// A `Position` always lies inside the grid; construction outside the bounds
/// fails instead of producing a dangling coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPosition")
)]
pub struct Position {
    row: u8,
    column: u8,
}

/// Unchecked wire form; deserialization goes through [`Position::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPosition {
    row: u8,
    column: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.row.into(), raw.column.into())
    }
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    pub fn new(row: usize, column: usize) -> Result<Self, PositionError> {
        Self::checked(row as i64, column as i64).ok_or(PositionError::OutOfBounds {
            row: row as i64,
            column: column as i64,
            size: SIZE,
        })
    }

    fn checked(row: i64, column: i64) -> Option<Self> {
        let bound = 0..SIZE as i64;
        if bound.contains(&row) && bound.contains(&column) {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn column(self) -> usize {
        self.column as usize
    }

    /// The neighbouring cell one step in `direction`, or `None` at the border.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::checked(
            self.row as i64 + i64::from(dr),
            self.column as i64 + i64::from(dc),
        )
    }

    /// In-bounds orthogonal neighbours in up, down, left, right order.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(direction))
    }

    pub const fn is_edge(self) -> bool {
        let last = (SIZE - 1) as u8;
        self.row == 0 || self.row == last || self.column == 0 || self.column == last
    }

    pub const fn is_corner(self) -> bool {
        let last = (SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.column == 0 || self.column == last)
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SIZE).flat_map(|row| {
            (0..SIZE).map(move |column| Self {
                row: row as u8,
                column: column as u8,
            })
        })
    }

    /// The 4·N − 4 border cells in row-major order.
    pub fn perimeter() -> impl Iterator<Item = Self> {
        Self::all().filter(|position| position.is_edge())
    }

    /// All cells of one row, left to right.
    pub fn row_cells(row: usize) -> Result<impl Iterator<Item = Self>, PositionError> {
        let start = Self::new(row, 0)?;
        Ok((0..SIZE).map(move |column| Self {
            row: start.row,
            column: column as u8,
        }))
    }

    /// All cells of one column, top to bottom.
    pub fn column_cells(column: usize) -> Result<impl Iterator<Item = Self>, PositionError> {
        let start = Self::new(0, column)?;
        Ok((0..SIZE).map(move |row| Self {
            row: row as u8,
            column: start.column,
        }))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// 1-based `R#-C#`, the form players type and read.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}-C{}", self.row + 1, self.column + 1)
    }
}

/// Parses `R#-C#`, `R#C#` (case-insensitive) or `#-#`, all 1-based.
impl FromStr for Position {
    type Err = PositionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || PositionError::Malformed {
            input: input.to_owned(),
        };
        let normalized = input.trim().to_ascii_uppercase();

        let (row, column) = match normalized.strip_prefix('R') {
            Some(rest) => {
                let (row, column) = rest.split_once('C').ok_or_else(malformed)?;
                (row.trim_end_matches('-'), column)
            }
            None => normalized.split_once('-').ok_or_else(malformed)?,
        };

        let row: i64 = row.trim().parse().map_err(|_| malformed())?;
        let column: i64 = column.trim().parse().map_err(|_| malformed())?;
        let (row, column) = (row.saturating_sub(1), column.saturating_sub(1));

        Self::checked(row, column).ok_or(PositionError::OutOfBounds {
            row,
            column,
            size: SIZE,
        })
    }
}
