use crate::env::RandomSource;
use crate::state::{BoxError, BoxGrid, Position};

/// Single-use tool found inside a box.
///
/// Tools carry no state; a tool value only says which effect to apply.
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
pub enum SpecialTool {
    /// Stamps the target and its orthogonal neighbours.
    PlusShapeStamp,
    /// Stamps the whole row of the target.
    MassRowStamp,
    /// Stamps the whole column of the target.
    MassColumnStamp,
    /// Swaps the top and bottom faces of the target.
    BoxFlipper,
    /// Replaces the target with a fixed box.
    BoxFixer,
}

/// What the player has to pick when using a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolTarget {
    Cell,
    Row,
    Column,
}

impl SpecialTool {
    pub const ALL: [SpecialTool; 5] = [
        SpecialTool::PlusShapeStamp,
        SpecialTool::MassRowStamp,
        SpecialTool::MassColumnStamp,
        SpecialTool::BoxFlipper,
        SpecialTool::BoxFixer,
    ];

    /// Uniform draw over the five tools.
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.below(Self::ALL.len() as u32) as usize]
    }

    pub const fn target(self) -> ToolTarget {
        match self {
            SpecialTool::MassRowStamp => ToolTarget::Row,
            SpecialTool::MassColumnStamp => ToolTarget::Column,
            _ => ToolTarget::Cell,
        }
    }

    /// Applies the effect at `target`, returning the footprint: every cell
    /// the tool acted on. Stamps go through each box's own stamp rule, so
    /// unchanging boxes in the footprint keep their letter.
    ///
    /// `letter` is ignored by the flipper and the fixer.
    pub fn apply(
        self,
        grid: &mut BoxGrid,
        letter: char,
        target: Position,
    ) -> Result<Vec<Position>, BoxError> {
        let footprint = match self {
            SpecialTool::PlusShapeStamp => grid.stamp_plus(target, letter),
            SpecialTool::MassRowStamp => grid.stamp_row(target.row(), letter),
            SpecialTool::MassColumnStamp => grid.stamp_column(target.column(), letter),
            SpecialTool::BoxFlipper => {
                grid.get_mut(target).flip()?;
                vec![target]
            }
            SpecialTool::BoxFixer => {
                let current = grid.get(target);
                if current.is_fixed() {
                    return Err(BoxError::BoxAlreadyFixed { position: target });
                }
                let fixed = current.to_fixed();
                grid.set(target, fixed);
                vec![target]
            }
        };

        tracing::debug!(tool = %self, %target, %letter, cells = footprint.len(), "tool applied");
        Ok(footprint)
    }
}
