/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of turns the player gets before the game ends successfully.
    pub max_turns: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Width and height of the square box grid.
    pub const GRID_SIZE: usize = 8;
    /// Letters that may appear on a box face.
    pub const ALPHABET: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
    /// Faces on a cube.
    pub const FACE_COUNT: usize = 6;
    /// Maximum occurrences of one letter among a freshly generated box's faces.
    pub const MAX_LETTER_REPEATS: usize = 2;

    // ===== generation weights (percent) =====
    pub const REGULAR_BOX_PERCENT: u32 = 85;
    pub const UNCHANGING_BOX_PERCENT: u32 = 10;
    /// Chance that a regular box holds a tool; the remainder is empty.
    pub const REGULAR_TOOL_PERCENT: u32 = 75;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u32 = 5;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }

    pub fn with_max_turns(max_turns: u32) -> Self {
        Self {
            max_turns: max_turns.max(1),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
