//! Scripted console sessions over in-memory I/O.

use puzzle_cli::CliApp;
use puzzle_core::{BoxGrid, BoxSurfaces, GameEngine, GameState, Position, PuzzleBox, SpecialTool};

const SURFACES: BoxSurfaces = BoxSurfaces::new(['A', 'B', 'C', 'D', 'E', 'F']);

fn pos(row: usize, column: usize) -> Position {
    Position::new(row, column).unwrap()
}

/// Runs a session to completion and returns the app plus everything printed.
fn play(engine: GameEngine, script: &str) -> (GameEngine, String) {
    play_bytes(engine, script.as_bytes())
}

fn play_bytes(engine: GameEngine, script: &[u8]) -> (GameEngine, String) {
    let mut app = CliApp::new(engine, script, Vec::new());
    app.run().expect("session should not fail");
    let engine = app.engine().clone();
    let output = String::from_utf8(app.into_output()).unwrap();
    (engine, output)
}

#[test]
fn two_turn_game_with_reprompts() {
    let grid = BoxGrid::from_fn(|p| {
        PuzzleBox::regular(SURFACES, p, Some(SpecialTool::MassRowStamp))
    });
    let engine = GameEngine::from_parts(grid, GameState::new('E', 2));

    let script = [
        // turn 1: view a box, bad edge, roll column 3 down, bad open, bad row
        "1", "R1-C1", "R4-C4", "R1-C3", "R2-C4", "R5-C3", "9", "4",
        // turn 2: corner roll to the left, bad row text
        "2", "R8-C8", "1", "R8-C1", "x", "8",
    ]
    .join("\n");

    let (engine, output) = play(engine, &script);

    assert!(output.contains("maximize the letter \"E\""));
    assert!(output.contains("=====> TURN 1:"));
    assert!(output.contains("| A |"), "cube diagram shown");
    assert!(output.contains("The chosen box is not on any of the edges"));
    assert!(output.contains("The chosen box is automatically rolled to downwards."));
    assert!(output.contains("was not rolled during the first stage"));
    assert!(output.contains("It contains a SpecialTool --> MassRowStamp"));
    assert!(output.contains("INCORRECT INPUT: Row must be 1-8."));
    assert!(output.contains("All boxes in row 4 have been stamped to letter \"E\""));

    assert!(output.contains("=====> TURN 2:"));
    assert!(output.contains("Continuing to the first stage..."));
    assert!(output.contains("can be rolled to either [1] left or [2] upwards"));
    assert!(output.contains("The chosen box and any box on its path have been rolled. The new"));
    assert!(output.contains("INCORRECT INPUT: Invalid number."));
    assert!(output.contains("All boxes in row 8 have been stamped"));

    assert!(output.contains("******** GAME OVER ********"));
    assert!(output.contains("THE TOTAL NUMBER OF TARGET LETTER \"E\" IN THE BOX GRID --> 16"));
    assert!(output.contains("The game has been SUCCESSFULLY completed!"));
    assert!(engine.state().is_success());
}

#[test]
fn wasted_turns_are_reported() {
    let mut grid = BoxGrid::from_fn(|p| PuzzleBox::regular(SURFACES, p, None));
    grid.set(pos(0, 3), PuzzleBox::fixed(SURFACES, pos(0, 3)));
    grid.set(pos(4, 4), PuzzleBox::fixed(SURFACES, pos(4, 4)));
    grid.set(
        pos(2, 0),
        PuzzleBox::regular(SURFACES, pos(2, 0), Some(SpecialTool::BoxFlipper)),
    );
    let engine = GameEngine::from_parts(grid, GameState::new('E', 3));

    let script = [
        // turn 1: fixed edge box
        "2", "R1-C4",
        // turn 2: roll row 2 right, open an empty box
        "2", "R2-C1", "R2-C5",
        // turn 3: roll column 1 down, flipper aimed at a fixed box
        "2", "R1-C1", "2", "R3-C1", "R5-C5",
    ]
    .join("\n");

    let (engine, output) = play(engine, &script);

    assert!(output.contains(
        "HOWEVER, IT IS A FIXED BOX AND CANNOT BE MOVED. Continuing to the next turn..."
    ));
    assert!(output.contains("BOX IS EMPTY! Continuing to the next turn..."));
    assert!(output.contains("It contains a SpecialTool --> BoxFlipper"));
    assert!(output.contains("HOWEVER, IT IS A FIXED BOX AND CANNOT BE MOVED. Turn wasted."));
    assert!(output.contains("The game has been SUCCESSFULLY completed!"));
    assert_eq!(engine.state().current_turn(), 4);
}

#[test]
fn blocked_roll_mentions_the_fixed_box() {
    let mut grid = BoxGrid::from_fn(|p| PuzzleBox::regular(SURFACES, p, None));
    grid.set(pos(5, 0), PuzzleBox::fixed(SURFACES, pos(5, 0)));
    let engine = GameEngine::from_parts(grid, GameState::new('C', 1));

    let (_, output) = play(engine, "2\nR8-C1\n2\nR8-C1\n");

    assert!(output.contains("rolled until a FixedBox has been reached"));
    assert!(output.contains("BOX IS EMPTY!"));
    // Rolling up brings the front face ('C') to the top of rows 7 and 8.
    assert!(output.contains("TARGET LETTER \"C\" IN THE BOX GRID --> 2"));
}

#[test]
fn end_of_input_stops_cleanly() {
    let grid = BoxGrid::from_fn(|p| PuzzleBox::regular(SURFACES, p, None));
    let engine = GameEngine::from_parts(grid, GameState::new('A', 5));

    let (engine, output) = play(engine, "2\n");

    assert!(output.contains("Input closed. Ending the session."));
    assert!(!output.contains("GAME OVER"));
    assert!(!engine.is_over());
}

#[test]
fn non_utf8_answers_are_reprompted() {
    let grid = BoxGrid::from_fn(|p| PuzzleBox::regular(SURFACES, p, None));
    let engine = GameEngine::from_parts(grid, GameState::new('A', 1));

    let script: &[u8] = b"\xff\xfe\n2\n\xc3(\nR1-C3\nR2-C3\n";
    let (engine, output) = play_bytes(engine, script);

    assert!(output.contains("Invalid choice. Please enter 1 or 2: "));
    assert!(output.contains("INCORRECT INPUT: Invalid format. Please reenter the location: "));
    assert!(output.contains("BOX IS EMPTY!"));
    assert!(output.contains("******** GAME OVER ********"));
    assert!(engine.is_over());
}

#[test]
fn board_with_no_movable_edge_ends_in_failure() {
    let grid = BoxGrid::from_fn(|p| PuzzleBox::fixed(SURFACES, p));
    let engine = GameEngine::from_parts(grid, GameState::new('A', 5));

    let (_, output) = play(engine, "");

    assert!(!output.contains("=====> TURN"));
    assert!(output.contains("THE TOTAL NUMBER OF TARGET LETTER \"A\" IN THE BOX GRID --> 64"));
    assert!(output.contains("The game has ended with FAILURE!"));
}
