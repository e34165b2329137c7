use std::fmt;
use serde::{Deserialize, Serialize};

use crate::crossword_engine::{
    equation::Equation,
    models::{Cell, CellKind},
};

/// Square, row-major grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|r| (0..size).map(move |c| Cell::empty(r, c)))
            .collect();
        Grid { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.in_bounds(row, col) {
            self.cells.get_mut(row * self.size + col)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Whether every cell `eq` covers is in bounds and either empty or
    /// already holding the identical token. Reads only.
    pub fn can_place(&self, eq: &Equation) -> bool {
        eq.cells().all(|(r, c, token)| match self.get(r, c) {
            None => false,
            Some(cell) => cell.kind == CellKind::Empty || cell.value == token,
        })
    }

    /// Whether `eq` would write at least one currently empty cell.
    pub fn adds_new_cell(&self, eq: &Equation) -> bool {
        eq.cells()
            .any(|(r, c, _)| self.get(r, c).is_some_and(|cell| cell.kind == CellKind::Empty))
    }

    /// Validate then write. Nothing is written unless every cell passes.
    pub fn try_place(&mut self, eq: &Equation) -> bool {
        if !self.can_place(eq) {
            return false;
        }
        for (r, c, token) in eq.cells() {
            if let Some(cell) = self.get_mut(r, c) {
                cell.value = token.to_string();
                cell.kind = CellKind::of_token(token);
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    let shown = match (cell.kind, cell.value.is_empty()) {
                        (CellKind::Empty, _) => ".",
                        (_, true)            => "_",
                        (_, false)           => cell.value.as_str(),
                    };
                    format!("{:>2}", shown)
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
