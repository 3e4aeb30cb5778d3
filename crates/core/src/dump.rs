//! State dump parsing.
//!
//! A dump is a JSON document holding either one state object or an array of
//! them:
//!
//! ```text
//! {
//!   "board": { "width": 3, "height": 2, "cells": [[false, true, false], [false, false, false]] },
//!   "unit": { "cells": [[0, 1], [1, 1]], "pivot": [0, 1] },
//!   "previousMove": "SW"
//! }
//! ```
//!
//! Cell pairs are `[column, row]`. Every geometry field is required; a
//! missing one is reported with the state index rather than defaulted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::Board;
use crate::error::{DumpError, Result};
use crate::state::{State, Unit};
use crate::types::GridCell;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RawBoard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cells: Option<Vec<Vec<bool>>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RawUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cells: Option<Vec<GridCell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pivot: Option<GridCell>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    board: Option<RawBoard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<RawUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_move: Option<String>,
}

impl RawState {
    fn into_state(self, index: usize) -> Result<State> {
        let missing = |field| DumpError::MissingField { index, field };

        let board = self.board.ok_or_else(|| missing("board"))?;
        let width = board.width.ok_or_else(|| missing("board.width"))?;
        let height = board.height.ok_or_else(|| missing("board.height"))?;
        let rows = board.cells.ok_or_else(|| missing("board.cells"))?;
        let board = Board::from_rows(width, height, &rows)
            .map_err(|source| DumpError::Shape { index, source })?;

        let unit = self.unit.ok_or_else(|| missing("unit"))?;
        let cells = unit.cells.ok_or_else(|| missing("unit.cells"))?;
        let pivot = unit.pivot.ok_or_else(|| missing("unit.pivot"))?;

        Ok(State {
            board,
            unit: Unit::new(cells, pivot),
            previous_move: self.previous_move,
        })
    }
}

impl From<&State> for RawState {
    fn from(state: &State) -> Self {
        Self {
            board: Some(RawBoard {
                width: Some(state.board.width()),
                height: Some(state.board.height()),
                cells: Some(state.board.to_rows()),
            }),
            unit: Some(RawUnit {
                cells: Some(state.unit.cells.clone()),
                pivot: Some(state.unit.pivot),
            }),
            previous_move: state.previous_move.clone(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a dump holding one state or an array of states.
pub fn parse_states(json: &str) -> Result<Vec<State>> {
    let root: Value = serde_json::from_str(json).map_err(|source| DumpError::Malformed {
        context: "document".to_string(),
        source,
    })?;

    let items = match root {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(DumpError::UnexpectedRoot {
                found: json_kind(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let raw: RawState =
                serde_json::from_value(value).map_err(|source| DumpError::Malformed {
                    context: format!("state {}", index),
                    source,
                })?;
            raw.into_state(index)
        })
        .collect()
}

/// Read and parse a dump file.
pub fn load_states(path: &Path) -> Result<Vec<State>> {
    let json = fs::read_to_string(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_states(&json)
}

/// Serialize states back into the dump format (always as an array).
pub fn to_json_string(states: &[State]) -> Result<String> {
    let raws: Vec<RawState> = states.iter().map(RawState::from).collect();
    Ok(serde_json::to_string_pretty(&raws)?)
}

/// Report the first state whose board dimensions differ from state 0.
pub fn check_uniform_dimensions(states: &[State]) -> Result<()> {
    let Some(first) = states.first() else {
        return Ok(());
    };
    let (expected_width, expected_height) = first.dimensions();
    for (index, state) in states.iter().enumerate().skip(1) {
        let (width, height) = state.dimensions();
        if (width, height) != (expected_width, expected_height) {
            return Err(DumpError::DimensionMismatch {
                index,
                expected_width,
                expected_height,
                width,
                height,
            });
        }
    }
    Ok(())
}
