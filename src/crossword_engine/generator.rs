use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand::RngCore;

use crate::crossword_engine::{
    error::ConfigError,
    models::PuzzleRequest,
    placement::{build_solution, PlacementConfig},
    play_grid::derive_play_grid,
    session::PuzzleSession,
};

/// Puzzle ID drawn from the same RNG as the puzzle, so a seed fixes both.
fn make_puzzle_id<R: RngCore>(rng: &mut R) -> String {
    format!("XW-{:08X}", rng.next_u32())
}

/// Build a fresh puzzle session, seeded from `request.rng_seed` or entropy.
pub fn generate_puzzle(request: PuzzleRequest) -> Result<PuzzleSession, ConfigError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_puzzle_with_rng(&request, &mut rng)
}

/// Build a fresh puzzle session from an injected random source.
/// `request.rng_seed` is ignored here.
///
/// Only an unusable configuration is an error; a grid holding fewer
/// equations than requested is returned as-is.
pub fn generate_puzzle_with_rng<R: Rng>(
    request: &PuzzleRequest,
    rng: &mut R,
) -> Result<PuzzleSession, ConfigError> {
    request.validate()?;

    let puzzle_id = make_puzzle_id(rng);
    let placed = build_solution(
        rng,
        PlacementConfig {
            grid_size: request.grid_size,
            target_equation_count: request.target_equation_count,
            attempt_budget: request.attempt_budget,
        },
    );
    let play = derive_play_grid(rng, &placed.solution, request.fixed_ratio);

    debug!(
        "new puzzle {puzzle_id}: {} equations on {1}x{1}",
        placed.equations.len(), request.grid_size
    );
    Ok(PuzzleSession::new(puzzle_id, placed.solution, play, placed.equations))
}
