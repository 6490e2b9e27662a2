//! Engine start-up configuration.

use crate::color::{SerializableColor, hex};
use crate::tools::{ToolKind, ToolState};
use serde::{Deserialize, Serialize};

/// Initial state of a drawing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fill used on start-up and painted by the eraser.
    #[serde(with = "hex")]
    pub background: SerializableColor,
    /// Initial brush colour.
    #[serde(with = "hex")]
    pub color: SerializableColor,
    pub line_width: f64,
    pub tool: ToolKind,
    pub rainbow_mode: bool,
    pub mirror_mode: bool,
    pub symmetry_count: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            background: SerializableColor::white(),
            color: SerializableColor::black(),
            line_width: 5.0,
            tool: ToolKind::Brush,
            rainbow_mode: false,
            mirror_mode: false,
            symmetry_count: 1,
        }
    }
}

impl EngineConfig {
    /// Tool state described by this config. Out-of-range values are clamped.
    pub fn tool_state(&self) -> ToolState {
        let mut tools = ToolState::new();
        tools.set_tool(self.tool);
        tools.set_color(self.color.into());
        tools.set_line_width(self.line_width);
        tools.set_rainbow_mode(self.rainbow_mode);
        tools.set_mirror_mode(self.mirror_mode);
        tools.set_symmetry_count(self.symmetry_count);
        tools
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
