use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{TaijiError, TaijiResult};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasDef {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// One symbol in a scene. Every field may be omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaijiDef {
    /// Radius; defaults to a quarter of the canvas width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Center x; defaults to the canvas center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Center y; defaults to the canvas center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Spin direction.
    #[serde(default = "default_true")]
    pub clockwise: bool,
    /// Tick period in milliseconds; 30 when omitted or invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<f64>,
    /// Whether the symbol spins at all.
    #[serde(default = "default_true")]
    pub rotating: bool,
}

impl Default for TaijiDef {
    fn default() -> Self {
        Self {
            radius: None,
            x: None,
            y: None,
            clockwise: true,
            interval_ms: None,
            rotating: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// JSON-facing description of a canvas and the symbols on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas size.
    pub canvas: CanvasDef,
    /// Symbols in creation order.
    #[serde(default)]
    pub taijis: Vec<TaijiDef>,
}

impl Scene {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TaijiResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TaijiError::validation(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TaijiResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TaijiError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that the scene can be rendered.
    pub fn validate(&self) -> TaijiResult<()> {
        let max = u32::from(u16::MAX);
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(TaijiError::validation("canvas width and height must be > 0"));
        }
        if self.canvas.width > max || self.canvas.height > max {
            return Err(TaijiError::validation(format!(
                "canvas dimensions must be <= {max}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
