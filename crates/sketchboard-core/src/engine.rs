//! The drawing engine: routes pointer events to strokes, shape previews and
//! shape drags, and commits finished interactions into the undo history.

use crate::clock::{Clock, SystemClock};
use crate::color::rainbow_color;
use crate::config::EngineConfig;
use crate::history::HistoryStack;
use crate::input::SketchEvent;
use crate::shapes::{self, Shape, ShapeId, ShapeRegistry};
use crate::surface::{RasterSurface, StrokeStyle};
use crate::symmetry::SymmetryRenderer;
use crate::tools::{ToolKind, ToolState};
use kurbo::Point;
use peniko::Color;
use thiserror::Error;

/// Errors raised while setting up a drawing session.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Coarse interaction state, as seen from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMode {
    Idle,
    Stroking,
    ShapeDragging,
}

/// A brush, eraser or shape-tool drag in progress.
#[derive(Debug, Clone, Copy)]
struct PointerStroke {
    tool: ToolKind,
    start: Point,
    last: Point,
    style: StrokeStyle,
}

#[derive(Debug, Clone, Copy)]
enum Interaction {
    Idle,
    Stroke(PointerStroke),
    Drag { shape: ShapeId },
}

/// One drawing session over a raster surface.
///
/// Owns the surface, its history, the tool state and the shape overlay. All
/// mutation goes through the pointer handlers and tool setters below.
pub struct DrawingEngine<S: RasterSurface> {
    surface: S,
    history: HistoryStack<S::Snapshot>,
    tools: ToolState,
    shapes: ShapeRegistry,
    interaction: Interaction,
    background: Color,
    clock: Box<dyn Clock>,
}

impl<S: RasterSurface> DrawingEngine<S> {
    /// Start a session on `surface` using the system clock.
    pub fn new(surface: S, config: &EngineConfig) -> EngineResult<Self> {
        Self::with_clock(surface, config, Box::new(SystemClock))
    }

    /// Start a session reading rainbow time from `clock`.
    ///
    /// The surface is cleared to the configured background and that blank
    /// capture becomes the first history entry.
    pub fn with_clock(mut surface: S, config: &EngineConfig, clock: Box<dyn Clock>) -> EngineResult<Self> {
        let size = surface.size();
        if !(size.width > 0.0 && size.height > 0.0) {
            return Err(EngineError::InvalidSurface {
                width: size.width,
                height: size.height,
            });
        }

        let background: Color = config.background.into();
        surface.clear(background);
        let history = HistoryStack::new(surface.snapshot());
        log::info!("Drawing engine ready on {}x{} surface", size.width, size.height);

        Ok(Self {
            surface,
            history,
            tools: config.tool_state(),
            shapes: ShapeRegistry::new(),
            interaction: Interaction::Idle,
            background,
            clock,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &HistoryStack<S::Snapshot> {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn shapes(&self) -> &ShapeRegistry {
        &self.shapes
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Centre of the surface; the pivot for symmetry and shape sizing.
    pub fn center(&self) -> Point {
        self.surface.center()
    }

    /// Snapshot at the history cursor. Never includes an unfinished stroke.
    pub fn committed(&self) -> &S::Snapshot {
        self.history.current()
    }

    pub fn mode(&self) -> EngineMode {
        match self.interaction {
            Interaction::Idle => EngineMode::Idle,
            Interaction::Stroke(_) => EngineMode::Stroking,
            Interaction::Drag { .. } => EngineMode::ShapeDragging,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.interaction, Interaction::Idle)
    }

    /// Colour and width the current tool would paint with right now.
    fn active_style(&self) -> StrokeStyle {
        let color = if self.tools.rainbow_mode() {
            rainbow_color(self.clock.now_millis())
        } else if self.tools.tool() == ToolKind::Eraser {
            self.background
        } else {
            self.tools.color()
        };
        StrokeStyle::new(color, self.tools.line_width())
    }

    /// Style used for the shape overlay: always the plain current colour.
    fn shape_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.tools.color(), self.tools.line_width())
    }

    // --- Pointer input ---

    /// Begin a stroke, or pick up a shape with the select tool.
    pub fn pointer_down(&mut self, point: Point) {
        if !self.is_idle() {
            self.finish_interaction();
        }

        let tool = self.tools.tool();
        if tool == ToolKind::Select {
            if let Some(id) = self.shapes.hit_test(point) {
                log::debug!("Dragging shape {id}");
                self.interaction = Interaction::Drag { shape: id };
            }
            return;
        }

        self.interaction = Interaction::Stroke(PointerStroke {
            tool,
            start: point,
            last: point,
            style: self.active_style(),
        });
    }

    /// Extend the current stroke, update the preview, or move the dragged shape.
    pub fn pointer_move(&mut self, point: Point) {
        match self.interaction {
            Interaction::Idle => {}
            Interaction::Stroke(mut stroke) => {
                if stroke.tool.is_freehand() {
                    if self.tools.rainbow_mode() {
                        stroke.style.color = rainbow_color(self.clock.now_millis());
                    }
                    let symmetry = SymmetryRenderer::from_tools(&self.tools, self.center());
                    symmetry.stroke(&mut self.surface, stroke.last, point, stroke.style);
                } else if let Some(kind) = stroke.tool.shape_kind() {
                    self.surface.restore(self.history.current());
                    shapes::render_preview(&mut self.surface, kind, stroke.start, point, stroke.style);
                }
                stroke.last = point;
                self.interaction = Interaction::Stroke(stroke);
            }
            Interaction::Drag { shape } => {
                if self.shapes.move_shape(shape, point) {
                    self.redraw();
                }
            }
        }
    }

    /// Finish the current interaction.
    pub fn pointer_up(&mut self) {
        self.finish_interaction();
    }

    /// Leaving the surface commits exactly like releasing the pointer.
    pub fn pointer_leave(&mut self) {
        self.finish_interaction();
    }

    fn finish_interaction(&mut self) {
        match std::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::Idle => {}
            Interaction::Stroke(stroke) => {
                if let Some(kind) = stroke.tool.shape_kind() {
                    let size = stroke.start.distance(self.center());
                    let id = self.shapes.add(Shape::new(kind, stroke.start, size));
                    log::debug!("Added {kind:?} {id} at {:?} with size {size:.1}", stroke.start);
                }
                self.history.push(self.surface.snapshot());
                log::debug!(
                    "Committed {} stroke, history {}/{}",
                    stroke.tool.name(),
                    self.history.cursor() + 1,
                    self.history.len()
                );
            }
            Interaction::Drag { shape } => {
                log::debug!("Released shape {shape}");
            }
        }
    }

    // --- Commands ---

    /// Step back one history entry and show it.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.finish_interaction();
        match self.history.undo() {
            Some(snapshot) => {
                self.surface.restore(snapshot);
                log::debug!("Undo to history entry {}", self.history.cursor());
                true
            }
            None => false,
        }
    }

    /// Restore the committed snapshot and paint every shape on top in the
    /// current colour and width.
    pub fn redraw(&mut self) {
        self.surface.restore(self.history.current());
        let style = self.shape_style();
        self.shapes.render_all(&mut self.surface, style);
    }

    // --- Tool control ---

    /// Switch tools. An unfinished stroke is committed first.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool != self.tools.tool() {
            self.finish_interaction();
        }
        self.tools.set_tool(tool);
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.set_color(color);
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.tools.set_line_width(width);
    }

    pub fn set_rainbow_mode(&mut self, enabled: bool) {
        self.tools.set_rainbow_mode(enabled);
    }

    pub fn set_mirror_mode(&mut self, enabled: bool) {
        self.tools.set_mirror_mode(enabled);
    }

    /// Advance the symmetry count, wrapping from 8 back to 1.
    pub fn cycle_symmetry(&mut self) -> u8 {
        self.tools.cycle_symmetry()
    }

    /// Dispatch a host event to the matching operation.
    pub fn handle_event(&mut self, event: &SketchEvent) {
        log::trace!("Event: {event:?}");
        match event {
            SketchEvent::PointerDown { x, y } => self.pointer_down(Point::new(*x, *y)),
            SketchEvent::PointerMove { x, y } => self.pointer_move(Point::new(*x, *y)),
            SketchEvent::PointerUp => self.pointer_up(),
            SketchEvent::PointerLeave => self.pointer_leave(),
            SketchEvent::SetTool { tool } => self.set_tool(*tool),
            SketchEvent::SetColor { color } => self.set_color((*color).into()),
            SketchEvent::SetLineWidth { width } => self.set_line_width(*width),
            SketchEvent::SetRainbowMode { enabled } => self.set_rainbow_mode(*enabled),
            SketchEvent::SetMirrorMode { enabled } => self.set_mirror_mode(*enabled),
            SketchEvent::CycleSymmetry => {
                self.cycle_symmetry();
            }
            SketchEvent::Undo => {
                self.undo();
            }
            SketchEvent::Redraw => self.redraw(),
        }
    }
}
