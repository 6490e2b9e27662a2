//! Rotational and mirror replication of freehand strokes.
//!
//! A stroke sample `prev -> current` is repeated `count` times around the
//! surface centre, each copy rotated by a further `2π / count`. In mirror mode
//! every rotated copy is followed by its reflection across the vertical axis
//! through the centre (`cx - dx, cy + dy`), rotated by the same angle.

use crate::surface::{RasterSurface, StrokeStyle};
use crate::tools::ToolState;
use kurbo::{Affine, Line, Point};
use std::f64::consts::TAU;

/// Replicates stroke segments around a fixed centre.
#[derive(Debug, Clone, Copy)]
pub struct SymmetryRenderer {
    center: Point,
    count: u8,
    mirror: bool,
}

impl SymmetryRenderer {
    /// A zero count is treated as one.
    pub fn new(center: Point, count: u8, mirror: bool) -> Self {
        Self {
            center,
            count: count.max(1),
            mirror,
        }
    }

    /// Build a renderer from the current tool modifiers.
    pub fn from_tools(tools: &ToolState, center: Point) -> Self {
        Self::new(center, tools.symmetry_count(), tools.mirror_mode())
    }

    /// Number of segments stroked per sample.
    pub fn replica_count(&self) -> usize {
        let per_rotation = if self.mirror { 2 } else { 1 };
        self.count as usize * per_rotation
    }

    /// Reflection across the vertical line through the centre.
    fn mirror_transform(&self) -> Affine {
        let offset = self.center.to_vec2();
        Affine::translate(offset) * Affine::FLIP_X * Affine::translate(-offset)
    }

    /// All replicas of `from -> to`, in the order they are stroked.
    pub fn replicas(&self, from: Point, to: Point) -> Vec<Line> {
        let step = TAU / self.count as f64;
        let mirror = self.mirror_transform();
        let mut lines = Vec::with_capacity(self.replica_count());

        for i in 0..self.count {
            let rotation = Affine::rotate_about(step * i as f64, self.center);
            lines.push(Line::new(rotation * from, rotation * to));
            if self.mirror {
                let reflected = rotation * mirror;
                lines.push(Line::new(reflected * from, reflected * to));
            }
        }
        lines
    }

    /// Stroke every replica of `from -> to` onto `surface`.
    /// Returns the number of segments drawn.
    pub fn stroke<S: RasterSurface>(
        &self,
        surface: &mut S,
        from: Point,
        to: Point,
        style: StrokeStyle,
    ) -> usize {
        let lines = self.replicas(from, to);
        for line in &lines {
            surface.draw_segment(line.p0, line.p1, style);
        }
        log::trace!("symmetry stroke: {} segment(s)", lines.len());
        lines.len()
    }
}
