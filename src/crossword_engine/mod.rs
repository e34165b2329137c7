//! Core crossword engine: equation generation, grid packing, and play.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: cells, directions, operators, request struct |
//! | `error`     | `ConfigError` for requests that cannot produce a puzzle |
//! | `equation`  | Random `×`/`÷` equation factory and placed-equation type |
//! | `grid`      | Square cell grid with atomic validate-then-write placement |
//! | `placement` | Seed + branch loop that builds the solution grid |
//! | `play_grid` | Hides cells of the solution to make the player's grid |
//! | `session`   | `PuzzleSession`: selection, keypad edits, completion check |
//! | `generator` | Single entry point `generate_puzzle()` |

pub mod equation;
pub mod error;
pub mod generator;
pub mod grid;
pub mod models;
pub mod placement;
pub mod play_grid;
pub mod session;

pub use equation::Equation;
pub use error::ConfigError;
pub use generator::{generate_puzzle, generate_puzzle_with_rng};
pub use grid::Grid;
pub use models::{
    Cell, CellKind, CellView, DifficultyLevel, Direction, Operator, PuzzleRequest,
};
pub use session::{PlayView, PuzzleSession};
