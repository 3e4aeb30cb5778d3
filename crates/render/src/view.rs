//! FrameView: maps a `core::State` into a raster frame.
//!
//! Pure with respect to its inputs: the same state and settings always
//! produce the same pixels.

use ab_glyph::FontArc;
use tracing::trace;

use crate::canvas::Frame;
use crate::classify::classify;
use crate::core::State;
use crate::error::{RenderError, Result};
use crate::hexagon::{centroid, vertices};
use crate::types::{Palette, MIN_EDGE};

/// Default label height as a fraction of the edge
pub const DEFAULT_LABEL_SCALE: f32 = 0.5;

/// Caption height as a fraction of the edge
const CAPTION_SCALE: f32 = 0.9;

/// Smallest caption height in pixels
const MIN_CAPTION_PX: f32 = 10.0;

/// Gap between the caption and the bottom of the frame
const CAPTION_BOTTOM_GAP: u32 = 2;

/// Renders states with a fixed edge length, font and palette.
#[derive(Clone)]
pub struct FrameView {
    edge: u32,
    font: FontArc,
    palette: Palette,
    label_scale: f32,
}

impl FrameView {
    pub fn new(edge: u32, font: FontArc) -> Result<Self> {
        if edge < MIN_EDGE {
            return Err(RenderError::InvalidEdge {
                edge,
                min: MIN_EDGE,
            });
        }
        Ok(Self {
            edge,
            font,
            palette: Palette::default(),
            label_scale: DEFAULT_LABEL_SCALE,
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_label_scale(mut self, label_scale: f32) -> Self {
        self.label_scale = label_scale;
        self
    }

    pub fn edge(&self) -> u32 {
        self.edge
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Pixel size of the frame for `state`: two edges per column and per row.
    ///
    /// Fails with `FrameTooLarge` when either side does not fit in a `u32`.
    pub fn frame_size(&self, state: &State) -> Result<(u32, u32)> {
        let (width, height) = state.dimensions();
        let span = |cells: u32| cells.checked_mul(self.edge)?.checked_mul(2);
        match (span(width), span(height)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(RenderError::FrameTooLarge {
                width,
                height,
                edge: self.edge,
            }),
        }
    }

    /// Render one state into a fresh frame.
    pub fn render(&self, state: &State) -> Result<Frame> {
        let (w, h) = self.frame_size(state)?;
        let mut frame = Frame::new(w, h, self.palette.background);
        let edge = self.edge as f32;
        let label_px = edge * self.label_scale;

        for cell in state.board.cells() {
            let style = classify(cell, state, &self.palette);
            let hexagon = vertices(cell.row, cell.col, edge);

            frame.fill_polygon(&hexagon, style.fill);
            frame.outline_polygon(&hexagon, style.outline);

            let center = centroid(&hexagon);
            frame.draw_text_centered(
                center.x,
                center.y,
                label_px,
                &self.font,
                &style.label,
                style.outline,
            );
        }

        if let Some(caption) = state.caption() {
            self.draw_caption(&mut frame, caption);
        }

        trace!(width = w, height = h, "rendered frame");
        Ok(frame)
    }

    fn draw_caption(&self, frame: &mut Frame, caption: &str) {
        let scale = (self.edge as f32 * CAPTION_SCALE).max(MIN_CAPTION_PX);
        let (tw, th) = Frame::measure_text(scale, &self.font, caption);
        let x = (frame.width() as i32 - tw as i32) / 2;
        let y = frame.height() as i32 - th as i32 - CAPTION_BOTTOM_GAP as i32;
        frame.draw_text(
            x.max(0),
            y.max(0),
            scale,
            &self.font,
            caption,
            self.palette.caption,
        );
    }
}
