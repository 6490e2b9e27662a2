//! Software raster backend.

use image::{Rgba, RgbaImage};
use kurbo::{Ellipse, PathEl, Point, Rect, Shape, Size, Vec2};
use peniko::Color;
use sketchboard_core::{RasterSurface, StrokeStyle};
use std::sync::Arc;
use thiserror::Error;

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16384;

/// Tolerance used when flattening outlines into segments, in pixels.
const FLATTEN_TOLERANCE: f64 = 0.1;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid buffer size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Immutable capture of a [`PixelBuffer`].
///
/// Clones share the same pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSnapshot {
    image: Arc<RgbaImage>,
}

impl RasterSnapshot {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Row-major RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }
}

/// RGBA8 pixel grid that strokes like a canvas with round caps and joins.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    image: RgbaImage,
}

impl PixelBuffer {
    /// Create a transparent buffer. Both dimensions must be in `1..=MAX_DIMENSION`.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Fill every pixel whose centre lies within `radius` of the segment.
    fn fill_capsule(&mut self, from: Point, to: Point, radius: f64, color: Rgba<u8>) {
        let radius = radius.max(0.5);
        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(self.width() as f64 - 1.0);
        let max_y = (from.y.max(to.y) + radius).ceil().min(self.height() as f64 - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        let axis = to - from;
        let length_sq = axis.hypot2();
        let radius_sq = radius * radius;

        for y in min_y as u32..=max_y as u32 {
            for x in min_x as u32..=max_x as u32 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if distance_sq_to_segment(center, from, axis, length_sq) <= radius_sq {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Stroke an outline by flattening it into capsules.
    fn stroke_outline(&mut self, shape: &impl Shape, style: StrokeStyle) {
        let color = to_rgba(style.color);
        let radius = style.width / 2.0;
        let mut start = Point::ZERO;
        let mut current = Point::ZERO;

        kurbo::flatten(shape.path_elements(FLATTEN_TOLERANCE), FLATTEN_TOLERANCE, |el| match el {
            PathEl::MoveTo(p) => {
                start = p;
                current = p;
            }
            PathEl::LineTo(p) => {
                self.fill_capsule(current, p, radius, color);
                current = p;
            }
            PathEl::ClosePath => {
                self.fill_capsule(current, start, radius, color);
                current = start;
            }
            // flatten only emits lines
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
    }
}

fn to_rgba(color: Color) -> Rgba<u8> {
    let rgba = color.to_rgba8();
    Rgba([rgba.r, rgba.g, rgba.b, rgba.a])
}

fn distance_sq_to_segment(point: Point, origin: Point, axis: Vec2, length_sq: f64) -> f64 {
    let offset = point - origin;
    if length_sq <= f64::EPSILON {
        return offset.hypot2();
    }
    let t = (offset.dot(axis) / length_sq).clamp(0.0, 1.0);
    (offset - axis * t).hypot2()
}

impl RasterSurface for PixelBuffer {
    type Snapshot = RasterSnapshot;

    fn size(&self) -> Size {
        Size::new(self.width() as f64, self.height() as f64)
    }

    fn clear(&mut self, color: Color) {
        let color = to_rgba(color);
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn snapshot(&self) -> RasterSnapshot {
        RasterSnapshot {
            image: Arc::new(self.image.clone()),
        }
    }

    fn restore(&mut self, snapshot: &RasterSnapshot) {
        if snapshot.image.dimensions() != self.image.dimensions() {
            log::warn!(
                "Ignoring {}x{} snapshot on {}x{} buffer",
                snapshot.width(),
                snapshot.height(),
                self.width(),
                self.height()
            );
            return;
        }
        self.image.copy_from_slice(snapshot.as_raw());
    }

    fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.fill_capsule(from, to, style.width / 2.0, to_rgba(style.color));
    }

    fn draw_rect(&mut self, rect: Rect, style: StrokeStyle) {
        self.stroke_outline(&rect, style);
    }

    fn draw_ellipse(&mut self, ellipse: Ellipse, style: StrokeStyle) {
        self.stroke_outline(&ellipse, style);
    }
}
