use std::path::PathBuf;

use crate::board::ShapeError;

/// Errors raised while reading state dumps and problem files.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed input ({context}): {source}")]
    Malformed {
        context: String,
        source: serde_json::Error,
    },

    #[error("malformed input: expected a state object or an array of states, found {found}")]
    UnexpectedRoot { found: &'static str },

    #[error("state {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("state {index}: board.cells does not match board dimensions: {source}")]
    Shape {
        index: usize,
        #[source]
        source: ShapeError,
    },

    #[error("state {index}: board is {width}x{height} but state 0 is {expected_width}x{expected_height}")]
    DimensionMismatch {
        index: usize,
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("problem has {available} source seeds, seed index {index} does not exist")]
    UnknownSeed { index: usize, available: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DumpError>;
