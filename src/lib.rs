//! hexplot (workspace facade crate).
//!
//! Renders dumps of hexagonal-grid puzzle states into numbered PNG frames.
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them under short names and owns the run configuration.

pub mod config;

pub use hexplot_anim as anim;
pub use hexplot_core as core;
pub use hexplot_render as render;
pub use hexplot_types as types;
