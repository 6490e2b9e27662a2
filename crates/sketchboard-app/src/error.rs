//! Host error type.

use sketchboard_core::EngineError;
use sketchboard_render::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the sketchboard host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Result type for host operations.
pub type AppResult<T> = Result<T, AppError>;

/// Read a UTF-8 file, tagging failures with the path.
pub(crate) fn read_to_string(path: &std::path::Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}
