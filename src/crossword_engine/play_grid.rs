use rand::Rng;

use crate::crossword_engine::{
    grid::Grid,
    models::{CellKind, EQUALS},
};

/// Copy the solution and hide cells for the player.
///
/// `=` is always revealed. Every other occupied cell is revealed with
/// probability `fixed_ratio` and otherwise blanked for the player to fill.
/// `fixed_ratio` is clamped into `[0, 1]`; NaN reveals nothing but `=`.
pub fn derive_play_grid<R: Rng>(rng: &mut R, solution: &Grid, fixed_ratio: f64) -> Grid {
    let fixed_ratio = if fixed_ratio.is_nan() { 0.0 } else { fixed_ratio.clamp(0.0, 1.0) };
    let mut play = solution.clone();
    for cell in play.cells_mut() {
        if cell.kind == CellKind::Empty {
            continue;
        }
        if cell.value == EQUALS || rng.gen_bool(fixed_ratio) {
            cell.fixed = true;
        } else {
            cell.fixed = false;
            cell.value.clear();
        }
    }
    play
}
