//! Core state model - boards, units, states and the files they come from
//!
//! This crate holds the immutable snapshots the renderer draws and the
//! parsers that build them. It has no dependencies on drawing or image I/O:
//!
//! - [`board`]: the locked-cell grid with bounds-checked access
//! - [`state`]: the active unit, its pivot, and one full snapshot
//! - [`dump`]: JSON state dumps (one state or an array of states)
//! - [`problem`]: puzzle engine problem files, expanded into states
//! - [`source`]: the seeded generator that orders a problem's units
//!
//! # Example
//!
//! ```
//! use hexplot_core::{dump, GridCell};
//!
//! let json = r#"{
//!     "board": {"width": 2, "height": 1, "cells": [[false, true]]},
//!     "unit": {"cells": [[0, 0]], "pivot": [0, 0]},
//!     "previousMove": "W"
//! }"#;
//! let states = dump::parse_states(json).unwrap();
//! assert_eq!(states.len(), 1);
//! assert!(states[0].board.is_locked(GridCell::new(1, 0)));
//! assert!(states[0].unit.contains(GridCell::new(0, 0)));
//! ```

pub mod board;
pub mod dump;
pub mod error;
pub mod problem;
pub mod source;
pub mod state;

pub use hexplot_types as types;

pub use board::{Board, ShapeError};
pub use dump::{check_uniform_dimensions, load_states, parse_states};
pub use error::DumpError;
pub use problem::Problem;
pub use state::{State, Unit};
pub use types::GridCell;
