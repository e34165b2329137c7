//! # arith_crossword_gen
//!
//! An offline, deterministic generator for arithmetic crossword puzzles.
//!
//! A puzzle is a square grid of crossing single-digit multiplication and
//! division equations (`6 × 7 = 42`, `42 ÷ 6 = 7`). Most cells are hidden; the
//! player fills them in on a keypad and the session checks the result against
//! the solved grid.
//!
//! ## How it works
//!
//! 1. Create a [`PuzzleRequest`] (grid size, target equation count, attempt
//!    budget, reveal ratio, optional RNG seed).
//! 2. Call [`generate_puzzle`]: the engine seeds the grid with one equation
//!    across the middle row, branches perpendicular equations off existing
//!    numbers, then hides most non-`=` cells.
//! 3. Drive the returned [`PuzzleSession`] with `select_cell`, `input_digit`,
//!    `input_operator` and `backspace`, and poll `is_complete`.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the exact same grid,
//!   or pass your own RNG to [`generate_puzzle_with_rng`].
//! - **Best effort packing**: the grid holds between one and the requested
//!   number of equations; a sparse grid is a valid result, not an error.
//! - **No leaks**: the UI only ever sees the play grid ([`PuzzleSession::get_cell`],
//!   [`PuzzleSession::play_view`], [`to_client_state`]).
//!
//! ## Quick start
//!
//! ```rust
//! use arith_crossword_gen::{generate_puzzle, Operator, PuzzleRequest};
//!
//! let mut session = generate_puzzle(PuzzleRequest::new().with_seed(42)).unwrap();
//! println!("{}", session.play_grid());
//!
//! let first = session
//!     .play_grid()
//!     .cells()
//!     .iter()
//!     .find(|c| c.is_editable())
//!     .map(|c| (c.row, c.col));
//! if let Some((row, col)) = first {
//!     session.select_cell(row, col);
//!     session.input_digit('7');
//!     session.input_operator(Operator::Multiply);
//!     session.backspace();
//! }
//! assert!(!session.is_complete() || session.is_solved());
//! ```

pub mod client_adapter;
pub mod crossword_engine;

// Convenience re-exports so callers can use `arith_crossword_gen::generate_puzzle`
// directly without reaching into `crossword_engine::`.
pub use client_adapter::to_client_state;
pub use crossword_engine::{
    generate_puzzle, generate_puzzle_with_rng, Cell, CellKind, CellView, ConfigError,
    DifficultyLevel, Direction, Equation, Grid, Operator, PlayView, PuzzleRequest,
    PuzzleSession,
};
