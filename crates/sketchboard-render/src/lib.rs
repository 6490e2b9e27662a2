//! Sketchboard Render Library
//!
//! Software rasteriser implementing the core `RasterSurface`, plus PNG export.

pub mod export;
mod raster;

pub use export::{encode_png, export_png_file};
pub use raster::{MAX_DIMENSION, PixelBuffer, RasterSnapshot, RenderError, RenderResult};
