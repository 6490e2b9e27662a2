//! Vector shapes overlaid on the raster.

mod registry;

pub use registry::ShapeRegistry;

use crate::surface::{RasterSurface, StrokeStyle};
use kurbo::{Ellipse, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Outline kinds the shape tools can leave behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Square,
    Circle,
}

/// A finalized square or circle.
///
/// `anchor` is both the rendering origin and the hit-test centre; `size` is
/// both the side length (square) or diameter (circle) and the hit radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    pub kind: ShapeKind,
    pub anchor: Point,
    pub size: f64,
}

impl Shape {
    /// Create a new shape with a fresh id.
    pub fn new(kind: ShapeKind, anchor: Point, size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            anchor,
            size,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Check if `point` is strictly within `size` of the anchor.
    pub fn hit_test(&self, point: Point) -> bool {
        self.anchor.distance(point) < self.size
    }

    /// Move the anchor, keeping the size.
    pub fn move_to(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Bounding box of the rendered outline.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.anchor, Size::new(self.size, self.size))
    }

    /// Stroke the outline onto `surface`.
    pub fn render<S: RasterSurface>(&self, surface: &mut S, style: StrokeStyle) {
        match self.kind {
            ShapeKind::Square => surface.draw_rect(self.bounds(), style),
            ShapeKind::Circle => {
                let radius = self.size / 2.0;
                let center = self.anchor + Vec2::new(radius, radius);
                surface.draw_ellipse(Ellipse::new(center, (radius, radius), 0.0), style);
            }
        }
    }
}

/// Draw the rubber-band preview of a shape tool dragged from `start` to `current`.
///
/// Squares preview as the rectangle spanned by the two points; circles as the
/// ellipse inscribed in that rectangle.
pub fn render_preview<S: RasterSurface>(
    surface: &mut S,
    kind: ShapeKind,
    start: Point,
    current: Point,
    style: StrokeStyle,
) {
    let rect = Rect::from_points(start, current);
    match kind {
        ShapeKind::Square => surface.draw_rect(rect, style),
        ShapeKind::Circle => surface.draw_ellipse(Ellipse::from_rect(rect), style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingSurface};
    use peniko::Color;

    fn style() -> StrokeStyle {
        StrokeStyle::new(Color::from_rgba8(0, 0, 0, 255), 3.0)
    }

    #[test]
    fn test_shape_creation() {
        let shape = Shape::new(ShapeKind::Circle, Point::new(10.0, 20.0), 30.0);
        assert_eq!(shape.kind, ShapeKind::Circle);
        assert!((shape.anchor.x - 10.0).abs() < f64::EPSILON);
        assert!((shape.size - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Shape::new(ShapeKind::Square, Point::ZERO, 1.0);
        let b = Shape::new(ShapeKind::Square, Point::ZERO, 1.0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_hit_test_inside() {
        let shape = Shape::new(ShapeKind::Square, Point::new(50.0, 50.0), 10.0);
        assert!(shape.hit_test(Point::new(50.0, 50.0)));
        assert!(shape.hit_test(Point::new(57.0, 50.0)));
    }

    #[test]
    fn test_hit_test_boundary_is_miss() {
        let shape = Shape::new(ShapeKind::Circle, Point::new(0.0, 0.0), 5.0);
        assert!(!shape.hit_test(Point::new(3.0, 4.0)));
        assert!(!shape.hit_test(Point::new(5.0, 0.0)));
        assert!(shape.hit_test(Point::new(4.99, 0.0)));
    }

    #[test]
    fn test_render_square() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        Shape::new(ShapeKind::Square, Point::new(10.0, 20.0), 30.0).render(&mut surface, style());
        assert_eq!(
            surface.log,
            vec![DrawCall::Rect {
                rect: Rect::new(10.0, 20.0, 40.0, 50.0),
                color: Color::from_rgba8(0, 0, 0, 255).into(),
                width: 3.0,
            }]
        );
    }

    #[test]
    fn test_render_circle() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        Shape::new(ShapeKind::Circle, Point::new(10.0, 20.0), 30.0).render(&mut surface, style());
        match &surface.log[..] {
            [DrawCall::Ellipse { ellipse, .. }] => {
                let center = ellipse.center();
                assert!((center.x - 25.0).abs() < 1e-9);
                assert!((center.y - 35.0).abs() < 1e-9);
                let radii = ellipse.radii();
                assert!((radii.x - 15.0).abs() < 1e-9);
                assert!((radii.y - 15.0).abs() < 1e-9);
            }
            other => panic!("unexpected calls {other:?}"),
        }
    }

    #[test]
    fn test_preview_normalizes_drag_direction() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        render_preview(
            &mut surface,
            ShapeKind::Square,
            Point::new(60.0, 80.0),
            Point::new(20.0, 10.0),
            style(),
        );
        match &surface.log[..] {
            [DrawCall::Rect { rect, .. }] => assert_eq!(*rect, Rect::new(20.0, 10.0, 60.0, 80.0)),
            other => panic!("unexpected calls {other:?}"),
        }
    }

    #[test]
    fn test_preview_circle_is_inscribed() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        render_preview(
            &mut surface,
            ShapeKind::Circle,
            Point::new(0.0, 0.0),
            Point::new(40.0, 20.0),
            style(),
        );
        match &surface.log[..] {
            [DrawCall::Ellipse { ellipse, .. }] => {
                let radii = ellipse.radii();
                assert!((radii.x.max(radii.y) - 20.0).abs() < 1e-9);
                assert!((radii.x.min(radii.y) - 10.0).abs() < 1e-9);
            }
            other => panic!("unexpected calls {other:?}"),
        }
    }
}
