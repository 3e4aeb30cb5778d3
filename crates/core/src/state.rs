//! Unit and State snapshots.

use crate::board::Board;
use crate::types::GridCell;

/// The active piece: its member cells plus a rotation pivot.
///
/// The pivot is not required to be one of the member cells, and members may
/// sit on locked cells or outside the board entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit {
    pub cells: Vec<GridCell>,
    pub pivot: GridCell,
}

impl Unit {
    pub fn new(cells: Vec<GridCell>, pivot: GridCell) -> Self {
        Self { cells, pivot }
    }

    /// A unit with no member cells
    pub fn empty(pivot: GridCell) -> Self {
        Self {
            cells: Vec::new(),
            pivot,
        }
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn is_pivot(&self, cell: GridCell) -> bool {
        self.pivot == cell
    }
}

/// One immutable snapshot: board, unit and the caption of the move that led here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub board: Board,
    pub unit: Unit,
    pub previous_move: Option<String>,
}

impl State {
    pub fn new(board: Board, unit: Unit) -> Self {
        Self {
            board,
            unit,
            previous_move: None,
        }
    }

    pub fn with_previous_move(mut self, caption: impl Into<String>) -> Self {
        self.previous_move = Some(caption.into());
        self
    }

    /// The caption to draw, if there is a non-empty one
    pub fn caption(&self) -> Option<&str> {
        self.previous_move.as_deref().filter(|s| !s.is_empty())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.board.dimensions()
    }
}
