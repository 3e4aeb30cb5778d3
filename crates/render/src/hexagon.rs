//! Hexagon geometry: grid cell to screen-space polygon.
//!
//! Cells are pointy-top hexagons laid out in offset coordinates. Odd rows are
//! shifted right by half a hexagon width so consecutive rows interlock.
//!
//! The polygon is built by a cumulative walk from the top vertex: six steps of
//! length `edge` at 30°, 90°, ..., 330° (screen y grows downwards). Because the
//! six step vectors sum to zero, the sixth point lands back on the top vertex,
//! which closes the outline.

use crate::types::{HORIZONTAL_MARGIN, ROW_TRIM_FACTOR};

const SQRT_3: f32 = 1.732_050_8;

/// A screen-space point in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Horizontal distance between neighbouring cells in a row.
pub fn hex_width(edge: f32) -> f32 {
    SQRT_3 * edge
}

/// Vertical distance between consecutive rows: the full hexagon height
/// (`2 * edge`) less the row trim.
pub fn row_step(edge: f32) -> f32 {
    2.0 * edge - ROW_TRIM_FACTOR * edge
}

/// Top vertex of the hexagon at `(col, row)`, where the walk starts.
pub fn reference_point(row: i32, col: i32, edge: f32) -> Point {
    let parity = row.rem_euclid(2) as f32;
    let x = HORIZONTAL_MARGIN + hex_width(edge) * (col as f32 + 0.5 + 0.5 * parity);
    let y = row as f32 * row_step(edge);
    Point::new(x, y)
}

/// The six vertices of the hexagon at `(col, row)`, clockwise on screen,
/// starting from the upper-right vertex and ending on the top vertex.
pub fn vertices(row: i32, col: i32, edge: f32) -> [Point; 6] {
    let mut cursor = reference_point(row, col, edge);
    let mut out = [Point::default(); 6];
    for (i, vertex) in out.iter_mut().enumerate() {
        let angle = (30.0 + 60.0 * i as f32).to_radians();
        cursor.x += edge * angle.cos();
        cursor.y += edge * angle.sin();
        *vertex = cursor;
    }
    out
}

/// Mean of the vertices.
pub fn centroid(points: &[Point; 6]) -> Point {
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / 6.0, sy / 6.0)
}

/// Axis-aligned bounds `(min, max)` of the hexagon at `(col, row)`.
pub fn bounds(row: i32, col: i32, edge: f32) -> (Point, Point) {
    let pts = vertices(row, col, edge);
    pts.iter().fold(
        (
            Point::new(f32::INFINITY, f32::INFINITY),
            Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        ),
        |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        },
    )
}
