use serde_json::{json, Value};
use crate::crossword_engine::{models::Cell, PuzzleSession};

/// Build one cell entry. Hidden cells go out with an empty value.
fn cell_entry(cell: &Cell) -> Value {
    json!({
        "row": cell.row,
        "col": cell.col,
        "value": cell.value,
        "kind": cell.kind.to_string(),
        "fixed": cell.fixed,
        "editable": cell.is_editable()
    })
}

/// Serialize the play grid for a browser client.
///
/// Only the play grid is read, so solution values for hidden cells never
/// leave the session.
pub fn to_client_state(session: &PuzzleSession) -> Value {
    let cells: Vec<Value> = session
        .play_grid()
        .rows()
        .map(|row| Value::Array(row.iter().map(cell_entry).collect()))
        .collect();

    let selected = match session.selected() {
        Some((row, col)) => json!({ "row": row, "col": col }),
        None => Value::Null,
    };

    json!({
        "puzzleId": session.puzzle_id(),
        "size": session.size(),
        "solved": session.is_solved(),
        "selected": selected,
        "equationCount": session.equations().len(),
        "cells": cells
    })
}
