//! Frame: the raster canvas one state is drawn into.

use std::io::Cursor;

use ab_glyph::{FontArc, PxScale};
use image::{ImageFormat, Rgb as Pixel, RgbImage};
use imageproc::drawing::{draw_hollow_polygon_mut, draw_polygon_mut, draw_text_mut, text_size};
use imageproc::point::Point as IpPoint;

use crate::error::Result;
use crate::hexagon::Point;
use crate::types::Rgb;

fn pixel(color: Rgb) -> Pixel<u8> {
    Pixel(color.to_array())
}

/// An RGB raster canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    /// Allocate a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, pixel(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `(x, y)`; None if out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
    }

    /// Raw RGB bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Fill a polygon. Points are rounded to whole pixels; consecutive
    /// duplicates are dropped and fewer than three distinct points draw nothing.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        let mut poly: Vec<IpPoint<i32>> = Vec::with_capacity(points.len());
        for p in points {
            let q = IpPoint::new(p.x.round() as i32, p.y.round() as i32);
            if poly.last() != Some(&q) {
                poly.push(q);
            }
        }
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.image, &poly, pixel(color));
    }

    /// Stroke the closed outline through `points`.
    pub fn outline_polygon(&mut self, points: &[Point], color: Rgb) {
        if points.len() < 2 {
            return;
        }
        let poly: Vec<IpPoint<f32>> = points.iter().map(|p| IpPoint::new(p.x, p.y)).collect();
        draw_hollow_polygon_mut(&mut self.image, &poly, pixel(color));
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw_text(&mut self, x: i32, y: i32, scale: f32, font: &FontArc, text: &str, color: Rgb) {
        draw_text_mut(&mut self.image, pixel(color), x, y, PxScale::from(scale), font, text);
    }

    /// Draw `text` centered on `(cx, cy)`.
    pub fn draw_text_centered(
        &mut self,
        cx: f32,
        cy: f32,
        scale: f32,
        font: &FontArc,
        text: &str,
        color: Rgb,
    ) {
        let (w, h) = text_size(PxScale::from(scale), font, text);
        let x = (cx - w as f32 / 2.0).round() as i32;
        let y = (cy - h as f32 / 2.0).round() as i32;
        self.draw_text(x, y, scale, font, text, color);
    }

    /// Pixel extent of `text` at `scale`
    pub fn measure_text(scale: f32, font: &FontArc, text: &str) -> (u32, u32) {
        text_size(PxScale::from(scale), font, text)
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
