//! End-to-end demo: generate, play, and solve one puzzle.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Difficulty presets**: one seeded puzzle per level, showing how many
//!    equations were packed and how many cells the player must fill.
//! 2. **Play-through**: selects every blank cell of one puzzle and types the
//!    answer on a simulated keypad until the session reports it solved.
//! 3. **Client state**: the JSON a browser front end would render.

use arith_crossword_gen::{
    generate_puzzle, to_client_state, DifficultyLevel, Operator, PuzzleRequest,
};

fn main() {
    env_logger::init();

    println!();
    println!("══ Difficulty presets ══");
    for level in [DifficultyLevel::Beginner, DifficultyLevel::Intermediate, DifficultyLevel::Advanced] {
        let session = match generate_puzzle(PuzzleRequest::for_difficulty(level).with_seed(7)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{level}: {e}");
                continue;
            }
        };
        let blanks = session.play_grid().cells().iter().filter(|c| c.is_editable()).count();
        println!(
            "  {level} ID: {}  equations: {}  blanks: {blanks}",
            session.puzzle_id(),
            session.equations().len()
        );
    }

    println!();
    println!("══ Play-through ══");
    let mut session = match generate_puzzle(PuzzleRequest::new().with_seed(42)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot build puzzle: {e}");
            return;
        }
    };
    println!("{}", session.play_grid());
    for eq in session.equations() {
        println!("  {:?} at ({}, {}) {:?}", eq.tokens.join(" "), eq.anchor_row, eq.anchor_col, eq.direction);
    }

    // The demo knows the answers because it built the equations; a real UI
    // would take these from the player.
    let mut answers = Vec::new();
    for eq in session.equations() {
        for (row, col, token) in eq.cells() {
            answers.push((row, col, token.to_string()));
        }
    }
    for (row, col, token) in answers {
        if !session.select_cell(row, col) || !session.get_cell(row, col).is_some_and(|c| c.value.is_empty()) {
            continue;
        }
        match Operator::from_symbol(&token) {
            Some(op) => session.input_operator(op),
            None => token.chars().for_each(|d| session.input_digit(d)),
        }
    }
    println!();
    println!("{}", session.play_grid());
    println!("  complete: {}  solved: {}", session.is_complete(), session.is_solved());

    println!();
    println!("══ Client state ══");
    let state = to_client_state(&session);
    println!("  puzzleId={} size={} equationCount={}", state["puzzleId"], state["size"], state["equationCount"]);
}
