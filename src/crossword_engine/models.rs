use std::fmt;
use serde::{Deserialize, Serialize};

use crate::crossword_engine::{equation::EQUATION_LEN, error::ConfigError};

// ---------------------------------------------------------------------------
// Cell primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Number,
    Operator,
    Equals,
    Empty,
}

impl CellKind {
    /// Classify a single equation token.
    pub fn of_token(token: &str) -> CellKind {
        if token.is_empty() {
            CellKind::Empty
        } else if token == EQUALS {
            CellKind::Equals
        } else if Operator::from_symbol(token).is_some() {
            CellKind::Operator
        } else {
            CellKind::Number
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Number   => write!(f, "number"),
            CellKind::Operator => write!(f, "operator"),
            CellKind::Equals   => write!(f, "equals"),
            CellKind::Empty    => write!(f, "empty"),
        }
    }
}

/// The `=` token. Always revealed in the play grid.
pub const EQUALS: &str = "=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Multiply => "×",
            Operator::Divide   => "÷",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Operator> {
        match s {
            "×" => Some(Operator::Multiply),
            "÷" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One grid square. Cloned in and out of a [`Grid`](crate::crossword_engine::grid::Grid),
/// never handed out by mutable reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
    pub kind: CellKind,
    pub fixed: bool,
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn empty(row: usize, col: usize) -> Self {
        Cell { value: String::new(), kind: CellKind::Empty, fixed: false, row, col }
    }

    /// A cell the player is expected to fill in.
    pub fn is_editable(&self) -> bool {
        self.kind != CellKind::Empty && !self.fixed
    }
}

/// What the UI is allowed to see of a play-grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub value: String,
    pub kind: CellKind,
    pub fixed: bool,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        CellView { value: cell.value.clone(), kind: cell.kind, fixed: cell.fixed }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical   => Direction::Horizontal,
        }
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Beginner     => write!(f, "Beginner"),
            DifficultyLevel::Intermediate => write!(f, "Intermediate"),
            DifficultyLevel::Advanced     => write!(f, "Advanced"),
        }
    }
}

pub const DEFAULT_GRID_SIZE: usize = 13;
pub const DEFAULT_TARGET_EQUATIONS: usize = 10;
pub const DEFAULT_ATTEMPT_BUDGET: usize = 500;
/// Share of non-`=` cells revealed to the player. A difficulty knob.
pub const DEFAULT_FIXED_RATIO: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleRequest {
    pub grid_size: usize,
    pub target_equation_count: usize,
    pub attempt_budget: usize,
    pub fixed_ratio: f64,
    pub rng_seed: Option<u64>,
}

impl Default for PuzzleRequest {
    fn default() -> Self {
        PuzzleRequest {
            grid_size: DEFAULT_GRID_SIZE,
            target_equation_count: DEFAULT_TARGET_EQUATIONS,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            fixed_ratio: DEFAULT_FIXED_RATIO,
            rng_seed: None,
        }
    }
}

impl PuzzleRequest {
    /// Default 13×13 puzzle, 10 equations, entropy-seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets used when stepping difficulty up or down between puzzles.
    pub fn for_difficulty(level: DifficultyLevel) -> Self {
        let (fixed_ratio, target_equation_count) = match level {
            DifficultyLevel::Beginner     => (0.40, 6),
            DifficultyLevel::Intermediate => (DEFAULT_FIXED_RATIO, DEFAULT_TARGET_EQUATIONS),
            DifficultyLevel::Advanced     => (0.15, 14),
        };
        PuzzleRequest { fixed_ratio, target_equation_count, ..Self::default() }
    }

    /// Reject configurations that cannot hold the seed equation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < EQUATION_LEN {
            return Err(ConfigError::GridTooSmall { size: self.grid_size, min: EQUATION_LEN });
        }
        if !(0.0..=1.0).contains(&self.fixed_ratio) {
            return Err(ConfigError::FixedRatioOutOfRange(self.fixed_ratio));
        }
        if self.target_equation_count == 0 {
            return Err(ConfigError::ZeroTargetCount);
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_target_equation_count(mut self, count: usize) -> Self {
        self.target_equation_count = count;
        self
    }

    pub fn with_attempt_budget(mut self, budget: usize) -> Self {
        self.attempt_budget = budget;
        self
    }

    pub fn with_fixed_ratio(mut self, ratio: f64) -> Self {
        self.fixed_ratio = ratio;
        self
    }
}
