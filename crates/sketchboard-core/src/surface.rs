//! Raster surface abstraction.
//!
//! The engine never touches pixels directly. Everything it draws goes through
//! [`RasterSurface`], so any backend (software buffer, GPU texture, test
//! recorder) can host a drawing session.

use kurbo::{Ellipse, Point, Rect, Size};
use peniko::Color;

/// Colour and width applied to an outline or segment.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A flat pixel grid the engine can paint on.
pub trait RasterSurface {
    /// Immutable full-buffer capture.
    type Snapshot: Clone;

    /// Size of the grid in pixels.
    fn size(&self) -> Size;

    /// Geometric centre of the grid.
    fn center(&self) -> Point {
        let size = self.size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    /// Fill every pixel with `color`.
    fn clear(&mut self, color: Color);

    /// Capture the current pixels.
    fn snapshot(&self) -> Self::Snapshot;

    /// Overwrite the current pixels with a previous capture.
    fn restore(&mut self, snapshot: &Self::Snapshot);

    /// Stroke a straight segment with round caps.
    fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle);

    /// Stroke the outline of a rectangle.
    fn draw_rect(&mut self, rect: Rect, style: StrokeStyle);

    /// Stroke the outline of an ellipse.
    fn draw_ellipse(&mut self, ellipse: Ellipse, style: StrokeStyle);
}
