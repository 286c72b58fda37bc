use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::state::{BoxError, Direction, GridError, Position, PuzzleBox};

const SIZE: usize = GameConfig::GRID_SIZE;

/// Result of a domino roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollReport {
    pub direction: Direction,
    /// Rolled cells in walk order, starting with the edge cell.
    pub rolled: Vec<Position>,
    /// Fixed box that halted the walk, if the walk did not reach the border.
    pub blocked_by: Option<Position>,
}

impl RollReport {
    pub fn was_blocked(&self) -> bool {
        self.blocked_by.is_some()
    }
}

/// The 8×8 box grid. Sole owner of every box on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBoxGrid")
)]
pub struct BoxGrid {
    /// Row-major cells.
    cells: Vec<PuzzleBox>,
    /// Cells rolled by the most recent domino roll; cleared when the next
    /// roll starts.
    last_rolled: BTreeSet<Position>,
}

/// Unchecked wire form; deserialization goes through [`BoxGrid::from_cells`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoxGrid {
    cells: Vec<PuzzleBox>,
    last_rolled: BTreeSet<Position>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoxGrid> for BoxGrid {
    type Error = GridError;

    fn try_from(raw: RawBoxGrid) -> Result<Self, Self::Error> {
        let mut grid = Self::from_cells(raw.cells)?;
        grid.last_rolled = raw.last_rolled;
        Ok(grid)
    }
}

impl BoxGrid {
    /// Builds a grid cell by cell in row-major order.
    pub fn from_fn(mut make: impl FnMut(Position) -> PuzzleBox) -> Self {
        Self {
            cells: Position::all().map(&mut make).collect(),
            last_rolled: BTreeSet::new(),
        }
    }

    /// Grid over prepared row-major cells. Every cell must record the
    /// position it is stored at.
    pub fn from_cells(cells: Vec<PuzzleBox>) -> Result<Self, GridError> {
        let expected = SIZE * SIZE;
        if cells.len() != expected {
            return Err(GridError::WrongCellCount {
                expected,
                found: cells.len(),
            });
        }
        for (index, (position, cell)) in Position::all().zip(&cells).enumerate() {
            if cell.position() != position {
                return Err(GridError::MisplacedCell {
                    index,
                    expected: position,
                    found: cell.position(),
                });
            }
        }

        Ok(Self {
            cells,
            last_rolled: BTreeSet::new(),
        })
    }

    /// Random grid: every cell independently draws its kind, surfaces and
    /// contents.
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let grid = Self::from_fn(|position| PuzzleBox::generate(position, rng));
        tracing::debug!(
            fixed = grid.iter().filter(|(_, b)| b.is_fixed()).count(),
            "generated box grid"
        );
        grid
    }

    #[inline]
    pub const fn size(&self) -> usize {
        SIZE
    }

    #[inline]
    fn index(position: Position) -> usize {
        position.row() * SIZE + position.column()
    }

    pub fn get(&self, position: Position) -> &PuzzleBox {
        &self.cells[Self::index(position)]
    }

    pub fn get_mut(&mut self, position: Position) -> &mut PuzzleBox {
        &mut self.cells[Self::index(position)]
    }

    /// Replaces the box at `position`, returning the old one.
    pub fn set(&mut self, position: Position, replacement: PuzzleBox) -> PuzzleBox {
        std::mem::replace(&mut self.cells[Self::index(position)], replacement)
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &PuzzleBox)> {
        Position::all().zip(self.cells.iter())
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[PuzzleBox]> {
        self.cells.chunks(SIZE)
    }

    pub fn is_edge_position(&self, position: Position) -> bool {
        position.is_edge()
    }

    pub fn is_corner_position(&self, position: Position) -> bool {
        position.is_corner()
    }

    /// Domino roll starting at `edge` and travelling in `direction`.
    ///
    /// Each box on the path rolls in place until the walk leaves the grid or
    /// meets a fixed box; the fixed box itself is neither rolled nor
    /// recorded. Fails without touching anything when the starting box is
    /// fixed.
    pub fn roll_from_edge(
        &mut self,
        edge: Position,
        direction: Direction,
    ) -> Result<RollReport, BoxError> {
        self.last_rolled.clear();

        if self.get(edge).is_fixed() {
            return Err(BoxError::UnmovableFixed { position: edge });
        }

        let mut rolled = Vec::with_capacity(SIZE);
        let mut blocked_by = None;
        let mut cursor = Some(edge);

        while let Some(position) = cursor {
            let cell = self.get_mut(position);
            if !cell.roll(direction) {
                blocked_by = Some(position);
                break;
            }
            self.last_rolled.insert(position);
            rolled.push(position);
            cursor = position.step(direction);
        }

        tracing::debug!(
            %edge,
            %direction,
            rolled = rolled.len(),
            blocked = blocked_by.is_some(),
            "domino roll"
        );

        Ok(RollReport {
            direction,
            rolled,
            blocked_by,
        })
    }

    /// Snapshot of the cells rolled by the most recent roll.
    pub fn last_rolled_positions(&self) -> BTreeSet<Position> {
        self.last_rolled.clone()
    }

    pub fn was_rolled_last(&self, position: Position) -> bool {
        self.last_rolled.contains(&position)
    }

    /// Number of boxes showing `letter` on top.
    pub fn count_letter(&self, letter: char) -> usize {
        self.cells.iter().filter(|b| b.top() == letter).count()
    }

    /// True while at least one border cell holds a box that can roll.
    pub fn has_any_movable_edge_box(&self) -> bool {
        Position::perimeter().any(|position| !self.get(position).is_fixed())
    }

    /// Stamps one box; returns whether the letter was accepted.
    pub fn stamp(&mut self, position: Position, letter: char) -> bool {
        self.get_mut(position).stamp_top(letter)
    }

    /// Stamps `center` and its in-bounds orthogonal neighbours.
    pub fn stamp_plus(&mut self, center: Position, letter: char) -> Vec<Position> {
        let footprint: Vec<Position> = std::iter::once(center).chain(center.neighbors()).collect();
        self.stamp_all(&footprint, letter);
        footprint
    }

    /// Stamps every box in `row`. Out-of-range rows stamp nothing.
    pub fn stamp_row(&mut self, row: usize, letter: char) -> Vec<Position> {
        let footprint: Vec<Position> = Position::row_cells(row)
            .map(|cells| cells.collect())
            .unwrap_or_default();
        self.stamp_all(&footprint, letter);
        footprint
    }

    /// Stamps every box in `column`. Out-of-range columns stamp nothing.
    pub fn stamp_column(&mut self, column: usize, letter: char) -> Vec<Position> {
        let footprint: Vec<Position> = Position::column_cells(column)
            .map(|cells| cells.collect())
            .unwrap_or_default();
        self.stamp_all(&footprint, letter);
        footprint
    }

    fn stamp_all(&mut self, positions: &[Position], letter: char) {
        for &position in positions {
            self.stamp(position, letter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SpecialTool;
    use crate::state::BoxSurfaces;

    const SURFACES: BoxSurfaces = BoxSurfaces::new(['A', 'B', 'C', 'D', 'E', 'F']);

    fn pos(row: usize, column: usize) -> Position {
        Position::new(row, column).unwrap()
    }

    fn regular_grid() -> BoxGrid {
        BoxGrid::from_fn(|p| PuzzleBox::regular(SURFACES, p, None))
    }

    #[test]
    fn from_fn_assigns_positions_row_major() {
        let grid = regular_grid();
        for (position, cell) in grid.iter() {
            assert_eq!(cell.position(), position);
        }
        assert_eq!(grid.rows().count(), 8);
        assert!(grid.rows().all(|row| row.len() == 8));
    }

    #[test]
    fn from_cells_validates_shape_and_order() {
        let cells: Vec<PuzzleBox> = regular_grid().iter().map(|(_, b)| b.clone()).collect();
        assert_eq!(BoxGrid::from_cells(cells.clone()), Ok(regular_grid()));

        assert_eq!(
            BoxGrid::from_cells(cells[..10].to_vec()),
            Err(GridError::WrongCellCount {
                expected: 64,
                found: 10
            })
        );

        let mut swapped = cells;
        swapped.swap(0, 9);
        assert_eq!(
            BoxGrid::from_cells(swapped),
            Err(GridError::MisplacedCell {
                index: 0,
                expected: pos(0, 0),
                found: pos(1, 1)
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_malformed_snapshots() {
        let mut grid = regular_grid();
        grid.roll_from_edge(pos(0, 0), Direction::Down).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: BoxGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
        assert!(restored.was_rolled_last(pos(5, 0)));

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["cells"].as_array_mut().unwrap().truncate(63);
        let error = serde_json::from_value::<BoxGrid>(value).unwrap_err();
        assert!(error.to_string().contains("needs 64 cells"), "{error}");

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["cells"][9]["position"] = serde_json::json!({ "row": 1, "column": 9 });
        assert!(serde_json::from_value::<BoxGrid>(value).is_err());
    }

    #[test]
    fn set_returns_replaced_box() {
        let mut grid = regular_grid();
        let old = grid.set(pos(2, 3), PuzzleBox::fixed(SURFACES, pos(2, 3)));
        assert!(!old.is_fixed());
        assert!(grid.get(pos(2, 3)).is_fixed());
    }

    #[test]
    fn roll_clears_previous_record() {
        let mut grid = regular_grid();
        grid.roll_from_edge(pos(0, 0), Direction::Right).unwrap();
        assert_eq!(grid.last_rolled_positions().len(), 8);

        grid.set(pos(7, 0), PuzzleBox::fixed(SURFACES, pos(7, 0)));
        assert!(grid.roll_from_edge(pos(7, 0), Direction::Up).is_err());
        assert!(grid.last_rolled_positions().is_empty());
    }

    #[test]
    fn stamp_row_respects_unchanging_boxes() {
        let mut grid = regular_grid();
        grid.set(
            pos(4, 2),
            PuzzleBox::unchanging(SURFACES, pos(4, 2), SpecialTool::BoxFlipper),
        );
        let footprint = grid.stamp_row(4, 'H');
        assert_eq!(footprint.len(), 8);
        assert_eq!(grid.count_letter('H'), 7);
        assert_eq!(grid.get(pos(4, 2)).top(), 'A');
    }

    #[test]
    fn out_of_range_line_stamps_nothing() {
        let mut grid = regular_grid();
        assert!(grid.stamp_row(8, 'H').is_empty());
        assert!(grid.stamp_column(99, 'H').is_empty());
        assert_eq!(grid.count_letter('H'), 0);
    }

    #[test]
    fn movable_edge_check_ignores_interior() {
        let mut grid = BoxGrid::from_fn(|p| PuzzleBox::fixed(SURFACES, p));
        assert!(!grid.has_any_movable_edge_box());

        grid.set(pos(3, 3), PuzzleBox::regular(SURFACES, pos(3, 3), None));
        assert!(!grid.has_any_movable_edge_box());

        grid.set(pos(7, 4), PuzzleBox::regular(SURFACES, pos(7, 4), None));
        assert!(grid.has_any_movable_edge_box());
    }

    #[test]
    fn count_letter_reads_top_faces_only() {
        let grid = regular_grid();
        assert_eq!(grid.count_letter('A'), 64);
        assert_eq!(grid.count_letter('B'), 0);
    }
}
