use arrayvec::ArrayVec;

use crate::state::Position;

/// Roll direction on the grid. Up decreases the row, Left decreases the column.
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
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row_delta, column_delta)` for one step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Directions pointing into the grid from a border cell.
    ///
    /// Corners yield two directions (horizontal first), other edge cells one,
    /// interior cells none.
    pub fn inward_from(position: Position, grid_size: usize) -> ArrayVec<Direction, 2> {
        let last = grid_size.saturating_sub(1);
        let top = position.row() == 0;
        let bottom = position.row() == last;
        let left = position.column() == 0;
        let right = position.column() == last;

        let mut directions = ArrayVec::new();
        match (top, bottom, left, right) {
            (true, _, true, _) => directions.extend([Direction::Right, Direction::Down]),
            (true, _, _, true) => directions.extend([Direction::Left, Direction::Down]),
            (_, true, true, _) => directions.extend([Direction::Right, Direction::Up]),
            (_, true, _, true) => directions.extend([Direction::Left, Direction::Up]),
            (true, ..) => directions.push(Direction::Down),
            (_, true, ..) => directions.push(Direction::Up),
            (_, _, true, _) => directions.push(Direction::Right),
            (_, _, _, true) => directions.push(Direction::Left),
            _ => {}
        }
        directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inward(row: usize, column: usize) -> Vec<Direction> {
        Direction::inward_from(Position::new(row, column).unwrap(), 8).to_vec()
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn deltas_cancel_with_opposite() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            let (or, oc) = direction.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn corners_resolve_to_two_inward_directions() {
        use Direction::*;
        assert_eq!(inward(0, 0), vec![Right, Down]);
        assert_eq!(inward(0, 7), vec![Left, Down]);
        assert_eq!(inward(7, 0), vec![Right, Up]);
        assert_eq!(inward(7, 7), vec![Left, Up]);
    }

    #[test]
    fn edges_resolve_to_one_inward_direction() {
        use Direction::*;
        assert_eq!(inward(0, 3), vec![Down]);
        assert_eq!(inward(7, 3), vec![Up]);
        assert_eq!(inward(4, 0), vec![Right]);
        assert_eq!(inward(4, 7), vec![Left]);
    }

    #[test]
    fn interior_resolves_to_nothing() {
        assert!(inward(3, 4).is_empty());
    }

    #[test]
    fn parses_names() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
