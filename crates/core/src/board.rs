//! Board module - the grid of locked cells
//!
//! The board is a `width` x `height` grid where each cell is either locked
//! (permanently filled) or free. Uses a flat vector in row-major order.
//! Coordinates: (col, row) where col ranges 0..width (left to right) and
//! row ranges 0..height (top to bottom).

use thiserror::Error;

use crate::types::GridCell;

/// Ways a locked-cell grid can disagree with its declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    Empty { width: u32, height: u32 },

    #[error("expected {expected} rows, found {actual}")]
    RowCount { expected: u32, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: u32,
        actual: usize,
    },
}

/// The locked-cell grid of one state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u32,
    height: u32,
    /// Flat array of locked flags, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        })
    }

    /// Build a board from `rows[row][col]`, checking every row against `width`.
    ///
    /// The shape is validated before anything is allocated, so declared
    /// dimensions never size a buffer on their own.
    pub fn from_rows(width: u32, height: u32, rows: &[Vec<bool>]) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty { width, height });
        }
        if rows.len() != height as usize {
            return Err(ShapeError::RowCount {
                expected: height,
                actual: rows.len(),
            });
        }
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != width as usize)
        {
            return Err(ShapeError::RowWidth {
                row,
                expected: width,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells: rows.concat(),
        })
    }

    #[inline(always)]
    fn index(&self, cell: GridCell) -> Option<usize> {
        if !cell.in_bounds(self.width, self.height) {
            return None;
        }
        Some((cell.row as usize) * (self.width as usize) + (cell.col as usize))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Board dimensions as `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the locked flag of a cell
    /// Returns None if out of bounds
    pub fn get(&self, cell: GridCell) -> Option<bool> {
        self.index(cell).map(|idx| self.cells[idx])
    }

    /// Set the locked flag of a cell
    /// Returns false if out of bounds
    pub fn set(&mut self, cell: GridCell, locked: bool) -> bool {
        match self.index(cell) {
            Some(idx) => {
                self.cells[idx] = locked;
                true
            }
            None => false,
        }
    }

    /// Check if a cell is in bounds and locked
    pub fn is_locked(&self, cell: GridCell) -> bool {
        matches!(self.get(cell), Some(true))
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.in_bounds(self.width, self.height)
    }

    /// Every in-bounds cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |col| GridCell::new(col, row)))
    }

    /// Locked flags as `rows[row][col]`, the dump layout
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|&&locked| locked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5, 3).unwrap();
        assert_eq!(board.dimensions(), (5, 3));
        assert_eq!(board.locked_count(), 0);
        assert_eq!(board.cells().count(), 15);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Board::new(0, 3),
            Err(ShapeError::Empty {
                width: 0,
                height: 3
            })
        );
        assert!(Board::new(3, 0).is_err());
    }

    #[test]
    fn test_from_rows_indexes_row_then_col() {
        // Row 0 has column 2 locked; row 1 has column 0 locked.
        let rows = vec![vec![false, false, true], vec![true, false, false]];
        let board = Board::from_rows(3, 2, &rows).unwrap();
        assert!(board.is_locked(GridCell::new(2, 0)));
        assert!(board.is_locked(GridCell::new(0, 1)));
        assert!(!board.is_locked(GridCell::new(0, 2)));
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_ragged_grid() {
        let rows = vec![vec![false, false], vec![false]];
        assert_eq!(
            Board::from_rows(2, 2, &rows),
            Err(ShapeError::RowWidth {
                row: 1,
                expected: 2,
                actual: 1
            })
        );

        let rows = vec![vec![false, false]];
        assert_eq!(
            Board::from_rows(2, 2, &rows),
            Err(ShapeError::RowCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut board = Board::new(3, 3).unwrap();
        assert_eq!(board.get(GridCell::new(-1, 0)), None);
        assert_eq!(board.get(GridCell::new(3, 0)), None);
        assert!(!board.set(GridCell::new(5, 5), true));
        assert!(!board.is_locked(GridCell::new(5, 5)));
        assert_eq!(board.locked_count(), 0);
    }

    #[test]
    fn test_cells_are_row_major() {
        let board = Board::new(2, 2).unwrap();
        let cells: Vec<GridCell> = board.cells().collect();
        assert_eq!(
            cells,
            vec![
                GridCell::new(0, 0),
                GridCell::new(1, 0),
                GridCell::new(0, 1),
                GridCell::new(1, 1)
            ]
        );
    }
}
