use std::fmt;

use crate::action::SpecialTool;
use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::state::{BoxError, BoxSurfaces, Direction, Position};

/// Box variant. Determines how the box reacts to rolls, stamps and opening.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BoxKind {
    /// Rolls, accepts stamps, holds a tool 75% of the time.
    Regular,
    /// Rolls, ignores stamps, always holds a tool.
    Unchanging,
    /// Never rolls, never holds a tool, halts domino rolls.
    Fixed,
}

impl BoxKind {
    /// Draws a kind with the 85 / 10 / 5 grid generation split.
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let roll = rng.percent();
        if roll < GameConfig::REGULAR_BOX_PERCENT {
            BoxKind::Regular
        } else if roll < GameConfig::REGULAR_BOX_PERCENT + GameConfig::UNCHANGING_BOX_PERCENT {
            BoxKind::Unchanging
        } else {
            BoxKind::Fixed
        }
    }

    /// Single-letter marker used in the grid view.
    pub const fn marker(self) -> char {
        match self {
            BoxKind::Regular => 'R',
            BoxKind::Unchanging => 'U',
            BoxKind::Fixed => 'X',
        }
    }
}

/// A box occupying one grid cell.
///
/// Boxes roll in place: the position never changes for the lifetime of the
/// box. A fixed box is created already opened and empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleBox {
    kind: BoxKind,
    surfaces: BoxSurfaces,
    tool: Option<SpecialTool>,
    opened: bool,
    position: Position,
}

impl PuzzleBox {
    pub fn regular(surfaces: BoxSurfaces, position: Position, tool: Option<SpecialTool>) -> Self {
        Self {
            kind: BoxKind::Regular,
            surfaces,
            tool,
            opened: false,
            position,
        }
    }

    pub fn unchanging(surfaces: BoxSurfaces, position: Position, tool: SpecialTool) -> Self {
        Self {
            kind: BoxKind::Unchanging,
            surfaces,
            tool: Some(tool),
            opened: false,
            position,
        }
    }

    pub fn fixed(surfaces: BoxSurfaces, position: Position) -> Self {
        Self {
            kind: BoxKind::Fixed,
            surfaces,
            tool: None,
            opened: true,
            position,
        }
    }

    /// Random box for a freshly generated grid cell.
    pub fn generate(position: Position, rng: &mut impl RandomSource) -> Self {
        let kind = BoxKind::generate(rng);
        Self::generate_kind(kind, position, rng)
    }

    /// Random surfaces and contents for a box of a given kind.
    pub fn generate_kind(kind: BoxKind, position: Position, rng: &mut impl RandomSource) -> Self {
        let surfaces = BoxSurfaces::generate(rng);
        match kind {
            BoxKind::Regular => {
                let tool = rng
                    .chance(GameConfig::REGULAR_TOOL_PERCENT)
                    .then(|| SpecialTool::generate(rng));
                Self::regular(surfaces, position, tool)
            }
            BoxKind::Unchanging => Self::unchanging(surfaces, position, SpecialTool::generate(rng)),
            BoxKind::Fixed => Self::fixed(surfaces, position),
        }
    }

    #[inline]
    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.kind == BoxKind::Fixed
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn surfaces(&self) -> &BoxSurfaces {
        &self.surfaces
    }

    #[inline]
    pub fn top(&self) -> char {
        self.surfaces.top()
    }

    /// Tool still inside the box, if any. Does not open the box.
    pub fn tool(&self) -> Option<SpecialTool> {
        self.tool
    }

    pub fn has_been_opened(&self) -> bool {
        self.opened
    }

    pub fn is_empty(&self) -> bool {
        self.tool.is_none()
    }

    pub fn can_roll(&self) -> bool {
        self.kind != BoxKind::Fixed
    }

    pub fn can_be_stamped(&self) -> bool {
        self.kind != BoxKind::Unchanging
    }

    /// Rolls the box in place. Returns false for a fixed box, which stays put.
    pub fn roll(&mut self, direction: Direction) -> bool {
        if !self.can_roll() {
            return false;
        }
        self.surfaces.roll(direction);
        true
    }

    /// Writes `letter` on the top face. Returns false when the box is immune.
    pub fn stamp_top(&mut self, letter: char) -> bool {
        if !self.can_be_stamped() {
            return false;
        }
        self.surfaces.set_top(letter);
        true
    }

    /// Turns the box upside down.
    pub fn flip(&mut self) -> Result<(), BoxError> {
        if self.is_fixed() {
            return Err(BoxError::UnmovableFixed {
                position: self.position,
            });
        }
        self.surfaces.flip();
        Ok(())
    }

    /// Takes the tool out of the box. The box counts as opened either way and
    /// a tool can be retrieved at most once.
    pub fn open(&mut self) -> Result<SpecialTool, BoxError> {
        self.opened = true;
        self.tool.take().ok_or(BoxError::EmptyBox {
            position: self.position,
        })
    }

    /// Fixed copy of this box carrying the same letters. Any tool inside is
    /// left behind.
    pub fn to_fixed(&self) -> Self {
        Self::fixed(self.surfaces, self.position)
    }

    /// `M` while an unopened tool is inside, `O` otherwise.
    pub fn content_marker(&self) -> char {
        if self.opened || self.tool.is_none() {
            'O'
        } else {
            'M'
        }
    }
}

/// Grid cell token `KIND-TOP-CONTENT`, e.g. `R-E-M`.
impl fmt::Display for PuzzleBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.kind.marker(),
            self.top(),
            self.content_marker()
        )
    }
}
