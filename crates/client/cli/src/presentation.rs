//! Text rendering for the console session.
use puzzle_core::{BoxGrid, Direction, GameState, Position, RollReport, SpecialTool};

const HORIZONTAL_LINE: &str =
    " -----------------------------------------------------------------";

/// Grid table: a `C1..C8` header, then one `R#` row per grid row with every
/// cell shown as its `KIND-TOP-CONTENT` token.
pub fn format_grid(grid: &BoxGrid) -> String {
    let header: String = (1..=grid.size())
        .map(|column| format!("  C{column}    "))
        .collect();
    let mut out = format!("     {}\n{HORIZONTAL_LINE}\n", header.trim_end());

    for (row, cells) in grid.rows().enumerate() {
        out.push_str(&format!("R{} |", row + 1));
        for cell in cells {
            out.push_str(&format!(" {cell} |"));
        }
        out.push('\n');
        out.push_str(HORIZONTAL_LINE);
        out.push('\n');
    }

    out
}

pub fn direction_phrase(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "upwards",
        Direction::Down => "downwards",
        Direction::Left => "left",
        Direction::Right => "right",
    }
}

pub fn welcome(state: &GameState) -> String {
    format!(
        "Welcome to Box Top Side Matching Puzzle App. An 8x8 box grid is being generated.\n\
         Your goal is to maximize the letter \"{}\" on the top sides of the boxes.\n",
        state.target_letter()
    )
}

pub fn roll_summary(report: &RollReport) -> &'static str {
    if report.was_blocked() {
        "The chosen box and any box on its path have been rolled until a FixedBox has been reached. The new state of the box grid:"
    } else {
        "The chosen box and any box on its path have been rolled. The new state of the box grid:"
    }
}

/// Confirmation printed after a tool took effect.
pub fn tool_success(tool: SpecialTool, target: Position, letter: char) -> String {
    match tool {
        SpecialTool::PlusShapeStamp => format!(
            "Top sides of the chosen box ({target}) and its surrounding boxes have been stamped to letter \"{letter}\". The new state of the box grid:"
        ),
        SpecialTool::MassRowStamp => format!(
            "All boxes in row {} have been stamped to letter \"{letter}\". The new state of the box grid:",
            target.row() + 1
        ),
        SpecialTool::MassColumnStamp => format!(
            "All boxes in column {} have been stamped to letter \"{letter}\". The new state of the box grid:",
            target.column() + 1
        ),
        SpecialTool::BoxFlipper => format!(
            "The chosen box on location {target} has been flipped upside down. The new state of the box grid:"
        ),
        SpecialTool::BoxFixer => format!(
            "The chosen box on location {target} has been fixed. The new state of the box grid:"
        ),
    }
}

pub fn final_count(letter: char, count: usize) -> String {
    format!("THE TOTAL NUMBER OF TARGET LETTER \"{letter}\" IN THE BOX GRID --> {count}")
}

pub fn outcome(state: &GameState) -> &'static str {
    if state.is_success() {
        "The game has been SUCCESSFULLY completed!"
    } else {
        "The game has ended with FAILURE!"
    }
}
