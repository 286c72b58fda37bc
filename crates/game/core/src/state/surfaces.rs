use std::fmt;

use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::state::Direction;

/// One side of a cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Face {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Face; GameConfig::FACE_COUNT] = [
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Letters printed on the six faces of a box.
///
/// Generated surfaces never repeat a letter more than twice. Rolls and flips
/// only permute faces, so the letter multiset is preserved; stamping the top
/// face is the one operation allowed to change it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxSurfaces {
    faces: [char; GameConfig::FACE_COUNT],
}

impl BoxSurfaces {
    /// Builds surfaces from letters in [`Face::ALL`] order.
    pub const fn new(faces: [char; GameConfig::FACE_COUNT]) -> Self {
        Self { faces }
    }

    /// Draws a letter per face uniformly from the alphabet, rejecting draws
    /// that would put a letter on more than two faces.
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let alphabet = GameConfig::ALPHABET;
        let mut counts = [0usize; GameConfig::ALPHABET.len()];
        let mut faces = [alphabet[0]; GameConfig::FACE_COUNT];

        for face in &mut faces {
            let index = loop {
                let candidate = rng.below(alphabet.len() as u32) as usize;
                if counts[candidate] < GameConfig::MAX_LETTER_REPEATS {
                    break candidate;
                }
            };
            counts[index] += 1;
            *face = alphabet[index];
        }

        Self { faces }
    }

    #[inline]
    pub const fn face(&self, face: Face) -> char {
        self.faces[face.index()]
    }

    #[inline]
    pub const fn top(&self) -> char {
        self.face(Face::Top)
    }

    #[inline]
    pub const fn bottom(&self) -> char {
        self.face(Face::Bottom)
    }

    /// Letters in [`Face::ALL`] order.
    pub const fn letters(&self) -> [char; GameConfig::FACE_COUNT] {
        self.faces
    }

    pub fn set_top(&mut self, letter: char) {
        self.faces[Face::Top.index()] = letter;
    }

    /// Turns the box upside down: only Top and Bottom swap.
    pub fn flip(&mut self) {
        self.faces.swap(Face::Top.index(), Face::Bottom.index());
    }

    /// Rotates the faces as if the box tipped over one edge in `direction`.
    pub fn roll(&mut self, direction: Direction) {
        use Face::*;
        let cycle = match direction {
            Direction::Right => [Left, Top, Right, Bottom],
            Direction::Left => [Right, Top, Left, Bottom],
            Direction::Up => [Front, Top, Back, Bottom],
            Direction::Down => [Back, Top, Front, Bottom],
        };
        self.rotate(cycle);
    }

    /// Moves each face's letter to the next face in `cycle`; the last wraps
    /// to the first.
    fn rotate(&mut self, cycle: [Face; 4]) {
        let [a, b, c, d] = cycle.map(Face::index);
        let carried = self.faces[d];
        self.faces[d] = self.faces[c];
        self.faces[c] = self.faces[b];
        self.faces[b] = self.faces[a];
        self.faces[a] = carried;
    }

    /// Unfolded cube with the top face in the middle.
    pub fn cube_diagram(&self) -> String {
        let [top, bottom, front, back, left, right] = self.faces;
        format!(
            "      -----\n      | {back} |\n  -------------\n  | {left} | {top} | {right} |\n  -------------\n      | {front} |\n      -----\n      | {bottom} |\n      -----"
        )
    }
}

impl fmt::Display for BoxSurfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [top, bottom, front, back, left, right] = self.faces;
        write!(
            f,
            "Surfaces[T={top},B={bottom},F={front},Bk={back},L={left},R={right}]"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    const SAMPLE: BoxSurfaces = BoxSurfaces::new(['A', 'B', 'C', 'D', 'E', 'F']);

    fn max_repeats(surfaces: &BoxSurfaces) -> usize {
        GameConfig::ALPHABET
            .iter()
            .map(|letter| surfaces.letters().iter().filter(|l| *l == letter).count())
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn each_roll_moves_exactly_four_faces() {
        for direction in Direction::ALL {
            let mut rolled = SAMPLE;
            rolled.roll(direction);
            let moved = Face::ALL
                .iter()
                .filter(|face| rolled.face(**face) != SAMPLE.face(**face))
                .count();
            assert_eq!(moved, 4, "{direction}");
        }
    }

    #[test]
    fn generated_surfaces_never_repeat_a_letter_three_times() {
        let mut rng = PcgRng::new(2024);
        for _ in 0..5_000 {
            let surfaces = BoxSurfaces::generate(&mut rng);
            assert!(max_repeats(&surfaces) <= GameConfig::MAX_LETTER_REPEATS);
            assert!(
                surfaces
                    .letters()
                    .iter()
                    .all(|l| GameConfig::ALPHABET.contains(l))
            );
        }
    }

    #[test]
    fn roll_right_brings_left_face_to_top() {
        let mut s = SAMPLE;
        s.roll(Direction::Right);
        assert_eq!(s.face(Face::Top), 'E');
        assert_eq!(s.face(Face::Right), 'A');
        assert_eq!(s.face(Face::Bottom), 'F');
        assert_eq!(s.face(Face::Left), 'B');
        assert_eq!(s.face(Face::Front), 'C');
        assert_eq!(s.face(Face::Back), 'D');
    }

    #[test]
    fn roll_up_brings_front_face_to_top() {
        let mut s = SAMPLE;
        s.roll(Direction::Up);
        assert_eq!(s.face(Face::Top), 'C');
        assert_eq!(s.face(Face::Back), 'A');
        assert_eq!(s.face(Face::Bottom), 'D');
        assert_eq!(s.face(Face::Front), 'B');
        assert_eq!(s.face(Face::Left), 'E');
        assert_eq!(s.face(Face::Right), 'F');
    }

    #[test]
    fn roll_then_opposite_restores_faces() {
        for direction in Direction::ALL {
            let mut s = SAMPLE;
            s.roll(direction);
            assert_ne!(s, SAMPLE);
            s.roll(direction.opposite());
            assert_eq!(s, SAMPLE, "round trip failed for {direction}");
        }
    }

    #[test]
    fn four_rolls_one_way_are_identity() {
        for direction in Direction::ALL {
            let mut s = SAMPLE;
            for _ in 0..4 {
                s.roll(direction);
            }
            assert_eq!(s, SAMPLE);
        }
    }

    #[test]
    fn flip_swaps_only_top_and_bottom() {
        let mut s = SAMPLE;
        s.flip();
        assert_eq!(s.letters(), ['B', 'A', 'C', 'D', 'E', 'F']);
        s.flip();
        assert_eq!(s, SAMPLE);
    }

    #[test]
    fn cube_diagram_places_top_in_the_middle() {
        let diagram = SAMPLE.cube_diagram();
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1].trim(), "| D |");
        assert_eq!(lines[3].trim(), "| E | A | F |");
        assert_eq!(lines[5].trim(), "| C |");
        assert_eq!(lines[7].trim(), "| B |");
    }

    #[test]
    fn display_lists_every_face() {
        assert_eq!(
            SAMPLE.to_string(),
            "Surfaces[T=A,B=B,F=C,Bk=D,L=E,R=F]"
        );
    }
}
