//! Events a host feeds into the drawing engine.
//!
//! Pointer coordinates are already in buffer-local pixels; translating from
//! window or widget space is the host's job.

use crate::color::{SerializableColor, hex};
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Pointer input plus the tool-control commands a toolbar would issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SketchEvent {
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    PointerLeave,
    SetTool {
        tool: ToolKind,
    },
    SetColor {
        #[serde(with = "hex")]
        color: SerializableColor,
    },
    SetLineWidth {
        width: f64,
    },
    SetRainbowMode {
        enabled: bool,
    },
    SetMirrorMode {
        enabled: bool,
    },
    CycleSymmetry,
    Undo,
    Redraw,
}
