use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::crossword_engine::models::{CellKind, Direction, Operator, EQUALS};

/// Tokens per equation: `op1 operator op2 = result`.
pub const EQUATION_LEN: usize = 5;

/// A placed equation: its tokens plus where and which way it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub tokens: Vec<String>,
    pub anchor_row: usize,
    pub anchor_col: usize,
    pub direction: Direction,
}

impl Equation {
    pub fn new(tokens: Vec<String>, anchor_row: usize, anchor_col: usize, direction: Direction) -> Self {
        Equation { tokens, anchor_row, anchor_col, direction }
    }

    /// Number of cells the equation spans.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Grid position of the token at `offset`.
    pub fn cell_at(&self, offset: usize) -> (usize, usize) {
        match self.direction {
            Direction::Horizontal => (self.anchor_row, self.anchor_col + offset),
            Direction::Vertical   => (self.anchor_row + offset, self.anchor_col),
        }
    }

    /// `(row, col, token)` for every token, in order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        self.tokens.iter().enumerate().map(move |(i, t)| {
            let (r, c) = self.cell_at(i);
            (r, c, t.as_str())
        })
    }

    /// Offsets whose token is a number, i.e. the only legal crossing points.
    pub fn number_offsets(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| CellKind::of_token(t) == CellKind::Number)
            .map(|(i, _)| i)
            .collect()
    }

    /// Re-check the generation contract: single-digit factors for `×`,
    /// divisor 2..=9 and quotient 1..=9 for `÷`.
    pub fn is_arithmetically_valid(&self) -> bool {
        if self.tokens.len() != EQUATION_LEN || self.tokens[3] != EQUALS {
            return false;
        }
        let parse = |i: usize| self.tokens[i].parse::<u32>().ok();
        let (Some(a), Some(b), Some(c)) = (parse(0), parse(2), parse(4)) else {
            return false;
        };
        match Operator::from_symbol(&self.tokens[1]) {
            Some(Operator::Multiply) => (1..=9).contains(&a) && (1..=9).contains(&b) && a * b == c,
            Some(Operator::Divide)   => (2..=9).contains(&b) && (1..=9).contains(&c) && a == b * c,
            None => false,
        }
    }
}

/// Draw one random equation as `[op1, operator, op2, "=", result]`.
///
/// Multiplication and division are equally likely. Division is built
/// backwards from divisor and quotient so it always divides exactly.
pub fn random_tokens<R: Rng>(rng: &mut R) -> Vec<String> {
    let (a, op, b, c) = if rng.gen_bool(0.5) {
        let a = rng.gen_range(1..=9u32);
        let b = rng.gen_range(1..=9u32);
        (a, Operator::Multiply, b, a * b)
    } else {
        let divisor = rng.gen_range(2..=9u32);
        let quotient = rng.gen_range(1..=9u32);
        (divisor * quotient, Operator::Divide, divisor, quotient)
    };
    vec![
        a.to_string(),
        op.symbol().to_string(),
        b.to_string(),
        EQUALS.to_string(),
        c.to_string(),
    ]
}
