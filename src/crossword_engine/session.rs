//! One puzzle being played.
//!
//! A [`PuzzleSession`] owns the solution grid, the player-facing play grid,
//! the placed equations and the current selection. All keypad actions act on
//! the selected cell; anything that does not apply is ignored without error.

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::crossword_engine::{
    equation::Equation,
    grid::Grid,
    models::{CellKind, CellView, Operator},
};

/// Longest value a player can type into one cell.
pub const MAX_CELL_CHARS: usize = 2;

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    puzzle_id: String,
    solution: Grid,
    play: Grid,
    equations: Vec<Equation>,
    selected: Option<(usize, usize)>,
    solved: bool,
}

/// Typed snapshot of everything a UI may render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayView {
    pub puzzle_id: String,
    pub size: usize,
    pub solved: bool,
    pub selected: Option<(usize, usize)>,
    pub equation_count: usize,
    pub cells: Vec<Vec<CellView>>,
}

impl PuzzleSession {
    pub fn new(puzzle_id: String, solution: Grid, play: Grid, equations: Vec<Equation>) -> Self {
        let mut session = PuzzleSession {
            puzzle_id,
            solution,
            play,
            equations,
            selected: None,
            solved: false,
        };
        // A fully revealed grid has nothing left to fill.
        session.refresh_solved();
        session
    }

    pub fn puzzle_id(&self) -> &str {
        &self.puzzle_id
    }

    pub fn size(&self) -> usize {
        self.play.size()
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// The player-facing grid. Hidden cells carry no solution value.
    pub fn play_grid(&self) -> &Grid {
        &self.play
    }

    #[cfg(test)]
    pub(crate) fn solution_grid(&self) -> &Grid {
        &self.solution
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<CellView> {
        self.play.get(row, col).map(CellView::from)
    }

    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    /// Set once the grid has been completed; stays set.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Select an editable cell. Fixed, empty or out-of-range targets leave
    /// the current selection alone. Returns whether the selection moved.
    pub fn select_cell(&mut self, row: usize, col: usize) -> bool {
        match self.play.get(row, col) {
            Some(cell) if cell.is_editable() => {
                self.selected = Some((row, col));
                true
            }
            _ => {
                trace!("ignoring selection of ({row}, {col})");
                false
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Type a digit into the selected cell. An operator or `=` already in the
    /// cell is replaced; otherwise the digit is appended up to
    /// [`MAX_CELL_CHARS`]. Non-digits are ignored.
    ///
    /// A following [`backspace`](Self::backspace) undoes the digit only when it
    /// was appended: a digit typed into a full cell is dropped, and one typed
    /// over an operator replaces it, so backspace then removes a character the
    /// player did not just type.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            trace!("ignoring non-digit input {digit:?}");
            return;
        }
        self.edit_selected(|value| {
            if is_symbol_placeholder(value) {
                *value = digit.to_string();
            } else if value.chars().count() < MAX_CELL_CHARS {
                value.push(digit);
            }
        });
    }

    /// Put an operator into the selected cell, replacing whatever was there.
    pub fn input_operator(&mut self, op: Operator) {
        self.edit_selected(|value| *value = op.symbol().to_string());
    }

    /// Drop the last character of the selected cell.
    pub fn backspace(&mut self) {
        self.edit_selected(|value| {
            value.pop();
        });
    }

    /// True when every editable cell holds exactly its solution value.
    pub fn is_complete(&self) -> bool {
        self.play
            .cells()
            .iter()
            .zip(self.solution.cells())
            .filter(|(play, _)| play.is_editable())
            .all(|(play, answer)| !play.value.is_empty() && play.value == answer.value)
    }

    pub fn play_view(&self) -> PlayView {
        PlayView {
            puzzle_id: self.puzzle_id.clone(),
            size: self.size(),
            solved: self.solved,
            selected: self.selected,
            equation_count: self.equations.len(),
            cells: self
                .play
                .rows()
                .map(|row| row.iter().map(CellView::from).collect())
                .collect(),
        }
    }

    fn edit_selected(&mut self, edit: impl FnOnce(&mut String)) {
        let Some((row, col)) = self.selected else {
            trace!("ignoring input with no cell selected");
            return;
        };
        if let Some(cell) = self.play.get_mut(row, col).filter(|c| c.is_editable()) {
            edit(&mut cell.value);
            self.refresh_solved();
        }
    }

    fn refresh_solved(&mut self) {
        if !self.solved && self.is_complete() {
            self.solved = true;
            info!("puzzle {} solved", self.puzzle_id);
        }
    }
}

fn is_symbol_placeholder(value: &str) -> bool {
    matches!(CellKind::of_token(value), CellKind::Operator | CellKind::Equals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossword_engine::models::Direction;

    /// 6 × 7 = 42 across row 2 of a 5×5 grid; only `=` and `42` revealed.
    fn session() -> PuzzleSession {
        let eq = Equation::new(
            ["6", "×", "7", "=", "42"].iter().map(|s| s.to_string()).collect(),
            2, 0, Direction::Horizontal,
        );
        let mut solution = Grid::new(5);
        assert!(solution.try_place(&eq));
        let mut play = solution.clone();
        for cell in play.cells_mut() {
            if cell.kind == CellKind::Empty {
                continue;
            }
            cell.fixed = cell.value == "=" || cell.value == "42";
            if !cell.fixed {
                cell.value.clear();
            }
        }
        PuzzleSession::new("XW-TEST".into(), solution, play, vec![eq])
    }

    fn fill_correctly(s: &mut PuzzleSession) {
        s.select_cell(2, 0);
        s.input_digit('6');
        s.select_cell(2, 1);
        s.input_operator(Operator::Multiply);
        s.select_cell(2, 2);
        s.input_digit('7');
    }

    #[test]
    fn selecting_fixed_or_empty_cell_keeps_previous_selection() {
        let mut s = session();
        assert!(s.select_cell(2, 0));
        assert!(!s.select_cell(2, 3)); // "="
        assert!(!s.select_cell(2, 4)); // revealed 42
        assert!(!s.select_cell(0, 0)); // empty
        assert!(!s.select_cell(9, 9)); // off grid
        assert_eq!(s.selected(), Some((2, 0)));
    }

    #[test]
    fn input_without_selection_is_ignored() {
        let mut s = session();
        let before = s.play_view();
        s.input_digit('6');
        s.input_operator(Operator::Divide);
        s.backspace();
        assert_eq!(s.play_view(), before);
    }

    #[test]
    fn digits_cap_at_two_characters() {
        let mut s = session();
        s.select_cell(2, 0);
        s.input_digit('1');
        s.input_digit('2');
        s.input_digit('3');
        assert_eq!(s.get_cell(2, 0).unwrap().value, "12");
        s.input_digit('x');
        assert_eq!(s.get_cell(2, 0).unwrap().value, "12");
    }

    #[test]
    fn digit_replaces_operator_and_operator_replaces_digits() {
        let mut s = session();
        s.select_cell(2, 1);
        s.input_digit('4');
        s.input_digit('5');
        s.input_operator(Operator::Divide);
        assert_eq!(s.get_cell(2, 1).unwrap().value, "÷");
        s.input_digit('3');
        assert_eq!(s.get_cell(2, 1).unwrap().value, "3");
    }

    #[test]
    fn digit_then_backspace_restores_value() {
        let mut s = session();
        s.select_cell(2, 2);
        let before = s.get_cell(2, 2).unwrap().value;
        s.input_digit('7');
        s.backspace();
        assert_eq!(s.get_cell(2, 2).unwrap().value, before);

        s.input_digit('1');
        let before = s.get_cell(2, 2).unwrap().value;
        s.input_digit('9');
        s.backspace();
        assert_eq!(s.get_cell(2, 2).unwrap().value, before);
    }

    #[test]
    fn backspace_after_capped_or_replacing_digit_does_not_restore() {
        let mut s = session();
        s.select_cell(2, 0);
        s.input_digit('1');
        s.input_digit('2');
        s.input_digit('3');
        s.backspace();
        assert_eq!(s.get_cell(2, 0).unwrap().value, "1");

        s.select_cell(2, 1);
        s.input_operator(Operator::Multiply);
        s.input_digit('3');
        s.backspace();
        assert_eq!(s.get_cell(2, 1).unwrap().value, "");
    }

    #[test]
    fn backspace_on_empty_cell_is_noop() {
        let mut s = session();
        s.select_cell(2, 0);
        s.backspace();
        assert_eq!(s.get_cell(2, 0).unwrap().value, "");
    }

    #[test]
    fn operator_backspace_clears_multibyte_symbol() {
        let mut s = session();
        s.select_cell(2, 1);
        s.input_operator(Operator::Multiply);
        s.backspace();
        assert_eq!(s.get_cell(2, 1).unwrap().value, "");
    }

    #[test]
    fn completion_requires_every_cell_correct() {
        let mut s = session();
        assert!(!s.is_complete());
        fill_correctly(&mut s);
        assert!(s.is_complete());
        assert!(s.is_complete(), "repeat query must agree");
        assert!(s.is_solved());

        s.select_cell(2, 2);
        s.backspace();
        s.input_digit('8');
        assert!(!s.is_complete());
        assert!(s.is_solved(), "solved flag is sticky");
    }

    #[test]
    fn wrong_operator_blocks_completion() {
        let mut s = session();
        fill_correctly(&mut s);
        s.select_cell(2, 1);
        s.input_operator(Operator::Divide);
        assert!(!s.is_complete());
    }

    #[test]
    fn play_view_hides_solution_values() {
        let s = session();
        let view = s.play_view();
        assert_eq!(view.size, 5);
        assert_eq!(view.cells[2][0].value, "");
        assert_eq!(view.cells[2][3].value, "=");
        assert_eq!(view.cells[2][4].value, "42");
        assert_eq!(view.equation_count, 1);
        assert_eq!(s.solution_grid().get(2, 0).unwrap().value, "6");
    }
}
