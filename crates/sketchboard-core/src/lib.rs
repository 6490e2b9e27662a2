//! Sketchboard Core Library
//!
//! Backend-agnostic drawing engine: raster undo history, symmetry strokes and
//! the square/circle shape overlay.

pub mod clock;
pub mod color;
pub mod config;
pub mod engine;
pub mod history;
pub mod input;
pub mod shapes;
pub mod surface;
pub mod symmetry;
pub mod tools;

#[cfg(test)]
mod testing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use color::{SerializableColor, parse_hex_color, rainbow_color, rainbow_hue};
pub use config::EngineConfig;
pub use engine::{DrawingEngine, EngineError, EngineMode, EngineResult};
pub use history::HistoryStack;
pub use input::SketchEvent;
pub use shapes::{Shape, ShapeId, ShapeKind, ShapeRegistry};
pub use surface::{RasterSurface, StrokeStyle};
pub use symmetry::SymmetryRenderer;
pub use tools::{ToolKind, ToolState};
