//! Ordered collection of finalized shapes.

use super::{Shape, ShapeId};
use crate::surface::{RasterSurface, StrokeStyle};
use kurbo::Point;

/// Finalized shapes in insertion order.
///
/// Insertion order is the only ordering: it decides both which shape wins a
/// hit test and the order shapes are painted.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape at the end of the order and return its id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// First shape, in insertion order, whose anchor is strictly closer than its size.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|shape| shape.hit_test(point))
            .map(Shape::id)
    }

    /// Move a shape's anchor in place.
    /// Returns false if no shape has this id.
    pub fn move_shape(&mut self, id: ShapeId, anchor: Point) -> bool {
        match self.get_mut(id) {
            Some(shape) => {
                shape.move_to(anchor);
                true
            }
            None => false,
        }
    }

    /// Paint every shape with the given (current) style.
    pub fn render_all<S: RasterSurface>(&self, surface: &mut S, style: StrokeStyle) {
        for shape in &self.shapes {
            shape.render(surface, style);
        }
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    /// Shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
