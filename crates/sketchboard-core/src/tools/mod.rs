//! Tool selection and brush settings.

use crate::color::SerializableColor;
use crate::shapes::ShapeKind;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Thinnest allowed stroke width.
pub const MIN_LINE_WIDTH: f64 = 1.0;
/// Thickest allowed stroke width.
pub const MAX_LINE_WIDTH: f64 = 20.0;
/// Largest number of rotational symmetry lines.
pub const MAX_SYMMETRY: u8 = 8;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Square,
    Circle,
    Select,
}

impl ToolKind {
    /// Tools that paint onto the raster while the pointer is held.
    pub fn is_freehand(self) -> bool {
        matches!(self, ToolKind::Brush | ToolKind::Eraser)
    }

    /// Shape left behind by this tool, if any.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Square => Some(ShapeKind::Square),
            ToolKind::Circle => Some(ShapeKind::Circle),
            ToolKind::Brush | ToolKind::Eraser | ToolKind::Select => None,
        }
    }

    /// Get display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Brush => "Brush",
            ToolKind::Eraser => "Eraser",
            ToolKind::Square => "Square",
            ToolKind::Circle => "Circle",
            ToolKind::Select => "Select",
        }
    }
}

/// Current tool plus the modifiers that affect how strokes are painted.
///
/// Written only through the setters below; the engine reads it on every
/// pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: ToolKind,
    color: SerializableColor,
    line_width: f64,
    rainbow_mode: bool,
    mirror_mode: bool,
    symmetry_count: u8,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            color: SerializableColor::black(),
            line_width: 5.0,
            rainbow_mode: false,
            mirror_mode: false,
            symmetry_count: 1,
        }
    }
}

impl ToolState {
    /// Create the default tool state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn color(&self) -> Color {
        self.color.into()
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color.into();
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Set the stroke width, clamped to the slider range.
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = if width.is_nan() {
            MIN_LINE_WIDTH
        } else {
            width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH)
        };
    }

    pub fn rainbow_mode(&self) -> bool {
        self.rainbow_mode
    }

    pub fn set_rainbow_mode(&mut self, enabled: bool) {
        self.rainbow_mode = enabled;
    }

    pub fn mirror_mode(&self) -> bool {
        self.mirror_mode
    }

    pub fn set_mirror_mode(&mut self, enabled: bool) {
        self.mirror_mode = enabled;
    }

    pub fn symmetry_count(&self) -> u8 {
        self.symmetry_count
    }

    /// Set the symmetry count directly, clamped to `1..=MAX_SYMMETRY`.
    pub fn set_symmetry_count(&mut self, count: u8) {
        self.symmetry_count = count.clamp(1, MAX_SYMMETRY);
    }

    /// Advance the symmetry count: 1, 2, ..., 8, then back to 1.
    pub fn cycle_symmetry(&mut self) -> u8 {
        self.symmetry_count = self.symmetry_count % MAX_SYMMETRY + 1;
        self.symmetry_count
    }
}
