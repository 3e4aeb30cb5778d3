//! Hexagon frame renderer.
//!
//! Turns one [`State`](hexplot_core::State) into one raster [`Frame`]:
//!
//! - [`hexagon`]: cell `(col, row)` to six screen-space vertices
//! - [`classify`]: per-cell fill, outline and label policy
//! - [`canvas`]: the RGB frame and its drawing primitives
//! - [`font`]: primary/fallback label font resolution
//! - [`view`]: [`FrameView`], which ties the above together
//!
//! The frame for a `width` x `height` board is `width * edge * 2` by
//! `height * edge * 2` pixels.

pub mod canvas;
pub mod classify;
pub mod error;
pub mod font;
pub mod hexagon;
pub mod view;

pub use hexplot_core as core;
pub use hexplot_types as types;

pub use canvas::Frame;
pub use classify::{classify, classify_board, CellClass, CellStyle};
pub use error::RenderError;
pub use font::{FontConfig, LoadedFont};
pub use hexagon::{centroid, vertices, Point};
pub use view::{FrameView, DEFAULT_LABEL_SCALE};
