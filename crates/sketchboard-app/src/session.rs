//! Replaying scripted drawing sessions.
//!
//! A session script is a JSON array. Each entry is either a [`SketchEvent`]
//! handed straight to the engine or a [`HostCommand`] the host carries out
//! itself, for example:
//!
//! ```json
//! [
//!   {"type": "set_tool", "tool": "circle"},
//!   {"type": "pointer_down", "x": 100, "y": 100},
//!   {"type": "pointer_move", "x": 150, "y": 150},
//!   {"type": "pointer_up"},
//!   {"type": "export", "path": "circle.png"}
//! ]
//! ```

use crate::config::AppConfig;
use crate::error::{AppResult, read_to_string};
use serde::Deserialize;
use sketchboard_core::{Clock, DrawingEngine, SketchEvent, SystemClock};
use sketchboard_render::{PixelBuffer, export_png_file};
use std::path::{Path, PathBuf};

/// Commands handled by the host rather than the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    /// Write the committed buffer to a PNG file.
    Export { path: PathBuf },
}

/// One step of a session script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SessionAction {
    Event(SketchEvent),
    Host(HostCommand),
}

/// Parse a session script.
pub fn parse_script(json: &str) -> AppResult<Vec<SessionAction>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a session script from disk.
pub fn load_script(path: &Path) -> AppResult<Vec<SessionAction>> {
    let actions = parse_script(&read_to_string(path)?)?;
    log::debug!("Loaded {} action(s) from {}", actions.len(), path.display());
    Ok(actions)
}

/// A drawing engine over a software pixel buffer.
pub struct Session {
    engine: DrawingEngine<PixelBuffer>,
    exported: Vec<PathBuf>,
}

impl Session {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &AppConfig, clock: Box<dyn Clock>) -> AppResult<Self> {
        let buffer = PixelBuffer::new(config.width, config.height)?;
        let engine = DrawingEngine::with_clock(buffer, &config.engine, clock)?;
        Ok(Self {
            engine,
            exported: Vec::new(),
        })
    }

    pub fn engine(&self) -> &DrawingEngine<PixelBuffer> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DrawingEngine<PixelBuffer> {
        &mut self.engine
    }

    /// Files written by export commands so far, in order.
    pub fn exported(&self) -> &[PathBuf] {
        &self.exported
    }

    pub fn apply(&mut self, action: &SessionAction) -> AppResult<()> {
        match action {
            SessionAction::Event(event) => self.engine.handle_event(event),
            SessionAction::Host(HostCommand::Export { path }) => self.export(path)?,
        }
        Ok(())
    }

    /// Apply every action in order, stopping at the first failure.
    pub fn run(&mut self, actions: &[SessionAction]) -> AppResult<()> {
        for action in actions {
            self.apply(action)?;
        }
        Ok(())
    }

    /// Export the last committed state. An unfinished stroke is left out.
    pub fn export(&mut self, path: &Path) -> AppResult<()> {
        if !self.engine.is_idle() {
            log::warn!("Export during {:?}; writing last committed state", self.engine.mode());
        }
        export_png_file(self.engine.committed(), path)?;
        self.exported.push(path.to_path_buf());
        Ok(())
    }
}
