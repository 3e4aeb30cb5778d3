//! Problem files from the puzzle engine.
//!
//! A problem describes the starting board (`filled` cells), the unit shapes
//! that may appear, and the seeds that decide their order. Problem files use
//! `{"x": col, "y": row}` objects instead of the dump's `[col, row]` pairs.
//!
//! Nothing here places or moves units: a unit is shown exactly where the
//! problem file defines its members.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::board::Board;
use crate::error::{DumpError, Result};
use crate::source::unit_order;
use crate::state::{State, Unit};
use crate::types::GridCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ProblemCell {
    pub x: i32,
    pub y: i32,
}

impl From<ProblemCell> for GridCell {
    fn from(cell: ProblemCell) -> Self {
        GridCell::new(cell.x, cell.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProblemUnit {
    pub members: Vec<ProblemCell>,
    pub pivot: ProblemCell,
}

impl From<&ProblemUnit> for Unit {
    fn from(unit: &ProblemUnit) -> Self {
        Unit::new(
            unit.members.iter().copied().map(GridCell::from).collect(),
            unit.pivot.into(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: u64,
    pub units: Vec<ProblemUnit>,
    pub width: u32,
    pub height: u32,
    pub filled: Vec<ProblemCell>,
    #[serde(default)]
    pub source_length: usize,
    #[serde(default)]
    pub source_seeds: Vec<u32>,
}

impl Problem {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| DumpError::Malformed {
            context: "problem".to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| DumpError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    /// The starting board with every `filled` cell locked.
    ///
    /// Filled cells outside the board are skipped.
    pub fn board(&self) -> Result<Board> {
        let mut board = Board::new(self.width, self.height)
            .map_err(|source| DumpError::Shape { index: 0, source })?;
        for &cell in &self.filled {
            if !board.set(cell.into(), true) {
                debug!(x = cell.x, y = cell.y, "filled cell outside board skipped");
            }
        }
        Ok(board)
    }

    /// One state per unit shape, in file order, each on the starting board.
    pub fn unit_gallery(&self) -> Result<Vec<State>> {
        let board = self.board()?;
        Ok(self
            .units
            .iter()
            .enumerate()
            .map(|(i, unit)| {
                State::new(board.clone(), unit.into())
                    .with_previous_move(format!("problem {} unit {}", self.id, i))
            })
            .collect())
    }

    /// The units in the order seed number `seed_index` deals them, one state each.
    pub fn source_states(&self, seed_index: usize) -> Result<Vec<State>> {
        let seed = *self
            .source_seeds
            .get(seed_index)
            .ok_or(DumpError::UnknownSeed {
                index: seed_index,
                available: self.source_seeds.len(),
            })?;
        let board = self.board()?;
        Ok(unit_order(seed, self.source_length, self.units.len())
            .into_iter()
            .enumerate()
            .map(|(n, unit_index)| {
                State::new(board.clone(), (&self.units[unit_index]).into()).with_previous_move(
                    format!("seed {} #{}: unit {}", seed, n, unit_index),
                )
            })
            .collect())
    }
}
