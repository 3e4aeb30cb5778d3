//! Per-cell color policy.
//!
//! Precedence, highest first: unit member, locked, empty. The pivot then
//! overrides the outline only, never the fill.

use crate::core::State;
use crate::types::{GridCell, Palette, Rgb};

/// Semantic category of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Unit,
    Locked,
    Empty,
}

/// Resolved drawing style for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    pub class: CellClass,
    pub is_pivot: bool,
    pub fill: Rgb,
    pub outline: Rgb,
    /// `(column, row)` text, drawn in the outline color
    pub label: String,
}

pub fn class_of(cell: GridCell, state: &State) -> CellClass {
    if state.unit.contains(cell) {
        CellClass::Unit
    } else if state.board.is_locked(cell) {
        CellClass::Locked
    } else {
        CellClass::Empty
    }
}

/// Resolve the fill, outline and label of `cell` in `state`.
pub fn classify(cell: GridCell, state: &State, palette: &Palette) -> CellStyle {
    let class = class_of(cell, state);
    let (fill, outline) = match class {
        CellClass::Unit => (palette.unit_fill, palette.unit_outline),
        CellClass::Locked => (palette.locked_fill, palette.locked_outline),
        CellClass::Empty => (palette.empty_fill, palette.empty_outline),
    };

    let is_pivot = state.unit.is_pivot(cell);
    let outline = if is_pivot {
        palette.pivot_outline
    } else {
        outline
    };

    CellStyle {
        class,
        is_pivot,
        fill,
        outline,
        label: cell.label(),
    }
}

/// Classify every in-bounds cell of the board in row-major order.
pub fn classify_board(state: &State, palette: &Palette) -> Vec<(GridCell, CellStyle)> {
    state
        .board
        .cells()
        .map(|cell| (cell, classify(cell, state, palette)))
        .collect()
}
