//! Shared types module - coordinates, colors and rendering constants
//!
//! This module defines the plain data types used by every other hexplot crate.
//! Nothing here performs I/O or drawing, so the types can be used from the
//! dump parser, the renderer and the sequencer alike.
//!
//! # Coordinates
//!
//! Cells are addressed with offset coordinates: `(column, row)`, 0-indexed,
//! column growing to the right and row growing downwards. Odd rows are
//! staggered half a hexagon to the right so neighbouring rows interlock.
//! Dumps always write pairs as `[column, row]`.
//!
//! # Geometry Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_EDGE` | 16 | Hexagon circumradius in pixels |
//! | `MIN_EDGE` | 4 | Smallest edge the renderer accepts |
//! | `HORIZONTAL_MARGIN` | 2.0 | Left padding before column 0 |
//! | `ROW_TRIM_FACTOR` | 0.5 | Fraction of an edge removed from each row step |
//!
//! # Examples
//!
//! ```
//! use hexplot_types::{frame_file_name, GridCell, Palette};
//!
//! let cell = GridCell::new(3, 1);
//! assert_eq!(cell.label(), "(3,1)");
//!
//! assert_eq!(frame_file_name(7), "frame_00000007.png");
//!
//! let palette = Palette::default();
//! assert_ne!(palette.unit_fill, palette.locked_fill);
//! ```

use serde::{Deserialize, Serialize};

/// Default hexagon edge length (circumradius) in pixels
pub const DEFAULT_EDGE: u32 = 16;

/// Smallest edge length the renderer accepts
pub const MIN_EDGE: u32 = 4;

/// Horizontal padding, in pixels, before the leftmost hexagon
pub const HORIZONTAL_MARGIN: f32 = 2.0;

/// Fraction of an edge trimmed off the full hexagon height between rows
pub const ROW_TRIM_FACTOR: f32 = 0.5;

/// Number of digits used for the frame index in file names
pub const FRAME_INDEX_WIDTH: usize = 8;

/// Prefix of every frame file name
pub const FRAME_PREFIX: &str = "frame_";

/// Extension of every frame file name
pub const FRAME_EXTENSION: &str = "png";

/// File name for frame `index`, zero padded so lexical and numeric order agree.
pub fn frame_file_name(index: usize) -> String {
    format!(
        "{}{:0width$}.{}",
        FRAME_PREFIX,
        index,
        FRAME_EXTENSION,
        width = FRAME_INDEX_WIDTH
    )
}

/// A board coordinate: `(column, row)`.
///
/// Coordinates are signed so that out-of-bounds unit cells from a dump
/// (including negative ones) survive parsing and are simply never drawn.
/// On the wire a cell is a two element array in `[column, row]` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
}

impl GridCell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// True when the cell lies inside a `width` x `height` board
    pub fn in_bounds(&self, width: u32, height: u32) -> bool {
        self.col >= 0 && self.row >= 0 && (self.col as u32) < width && (self.row as u32) < height
    }

    /// Coordinate label drawn inside the cell
    pub fn label(&self) -> String {
        format!("({},{})", self.col, self.row)
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

impl From<GridCell> for (i32, i32) {
    fn from(cell: GridCell) -> Self {
        (cell.col, cell.row)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Color policy for every cell category.
///
/// | Category | Fill | Outline |
/// |----------|------|---------|
/// | unit | orange | dark brown |
/// | locked | red | black |
/// | empty | white | light grey |
/// | pivot | (unchanged) | blue |
///
/// The pivot only overrides the outline; its fill is whatever the cell's
/// category says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub unit_fill: Rgb,
    pub unit_outline: Rgb,
    pub locked_fill: Rgb,
    pub locked_outline: Rgb,
    pub empty_fill: Rgb,
    pub empty_outline: Rgb,
    pub pivot_outline: Rgb,
    pub caption: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(255, 255, 255),
            unit_fill: Rgb::new(255, 165, 0),
            unit_outline: Rgb::new(90, 50, 0),
            locked_fill: Rgb::new(220, 40, 40),
            locked_outline: Rgb::new(0, 0, 0),
            empty_fill: Rgb::new(255, 255, 255),
            empty_outline: Rgb::new(170, 170, 170),
            pivot_outline: Rgb::new(30, 90, 255),
            caption: Rgb::new(0, 0, 0),
        }
    }
}
