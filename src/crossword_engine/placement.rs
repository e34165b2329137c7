//! Solution-grid builder.
//!
//! Seeds the grid with one horizontal equation in the middle, then branches
//! perpendicular equations off numbers already on the grid until the target
//! count is reached or the attempt budget runs out. Candidates are validated
//! in full before anything is written, so a rejected attempt leaves no trace
//! and the loop needs no undo.

use log::{debug, trace};
use rand::Rng;

use crate::crossword_engine::{
    equation::{random_tokens, Equation},
    grid::Grid,
    models::Direction,
};

/// Knobs for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    pub grid_size: usize,
    pub target_equation_count: usize,
    pub attempt_budget: usize,
}

/// The solved grid plus every equation written into it, seed first.
#[derive(Debug, Clone)]
pub struct PlacedPuzzle {
    pub solution: Grid,
    pub equations: Vec<Equation>,
    pub attempts_used: usize,
}

/// Seed equation: horizontal, middle row, centred by its own length.
pub fn seed_equation(tokens: Vec<String>, grid_size: usize) -> Equation {
    let row = grid_size / 2;
    let col = grid_size.saturating_sub(tokens.len()) / 2;
    Equation::new(tokens, row, col, Direction::Horizontal)
}

/// Build a solution grid. Best effort: returns whatever fit, never fails
/// for placing fewer equations than requested.
pub fn build_solution<R: Rng>(rng: &mut R, config: PlacementConfig) -> PlacedPuzzle {
    let mut solution = Grid::new(config.grid_size);
    let mut equations = Vec::with_capacity(config.target_equation_count);

    let seed = seed_equation(random_tokens(rng), config.grid_size);
    if solution.try_place(&seed) {
        equations.push(seed);
    } else {
        debug!("seed equation does not fit a {0}x{0} grid", config.grid_size);
    }

    let mut attempts = 0;
    while attempts < config.attempt_budget
        && !equations.is_empty()
        && equations.len() < config.target_equation_count
    {
        attempts += 1;
        if let Some(candidate) = branch_candidate(rng, &solution, &equations) {
            if !solution.adds_new_cell(&candidate) {
                trace!("attempt {attempts}: {:?} only repeats placed cells", candidate.tokens);
            } else if solution.try_place(&candidate) {
                equations.push(candidate);
            } else {
                trace!(
                    "attempt {attempts}: {:?} at ({}, {}) collides or leaves the grid",
                    candidate.tokens, candidate.anchor_row, candidate.anchor_col
                );
            }
        }
    }

    debug!(
        "placed {}/{} equations in {} attempts",
        equations.len(), config.target_equation_count, attempts
    );
    PlacedPuzzle { solution, equations, attempts_used: attempts }
}

/// One speculative branch: pick a source equation and one of its numbers,
/// draw a fresh equation and anchor it so a matching token lands on that
/// number, running perpendicular to the source. `None` when the fresh
/// equation has no matching token or the anchor falls off the top/left edge.
fn branch_candidate<R: Rng>(rng: &mut R, solution: &Grid, equations: &[Equation]) -> Option<Equation> {
    let source = &equations[rng.gen_range(0..equations.len())];
    let offsets = source.number_offsets();
    if offsets.is_empty() {
        return None;
    }
    let (cross_row, cross_col) = source.cell_at(offsets[rng.gen_range(0..offsets.len())]);
    let crossing = solution.get(cross_row, cross_col)?.value.clone();

    let tokens = random_tokens(rng);
    let Some(index) = tokens.iter().position(|t| *t == crossing) else {
        trace!("no token of {:?} matches crossing {crossing}", tokens);
        return None;
    };

    let direction = source.direction.perpendicular();
    let (anchor_row, anchor_col) = match direction {
        Direction::Vertical   => (cross_row.checked_sub(index)?, cross_col),
        Direction::Horizontal => (cross_row, cross_col.checked_sub(index)?),
    };
    Some(Equation::new(tokens, anchor_row, anchor_col, direction))
}
