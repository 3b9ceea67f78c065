//! Canvas configuration.
//!
//! Every option is an explicit field with a default. Unknown keys in a loaded
//! document are kept aside and reported, never applied.

use crate::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_CURSOR, DEFAULT_SELECTION_BORDER_COLOR,
    DEFAULT_SELECTION_COLOR, DEFAULT_SELECTION_LINE_WIDTH, HOVER_CURSOR, MOVE_CURSOR,
    ROTATION_CURSOR,
};
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::ViewportTransform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub background_color: String,
    /// Fill of the drag-select rectangle
    pub selection_color: String,
    pub selection_border_color: String,
    pub selection_line_width: f64,
    pub default_cursor: String,
    pub hover_cursor: String,
    pub move_cursor: String,
    pub rotation_cursor: String,
    pub viewport_transform: ViewportTransform,
    /// Enables drag-select and Shift/Ctrl group selection
    pub selection: bool,

    /// Keys present in the source document that no field recognizes
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, serde_json::Value>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background_color: String::new(),
            selection_color: DEFAULT_SELECTION_COLOR.to_string(),
            selection_border_color: DEFAULT_SELECTION_BORDER_COLOR.to_string(),
            selection_line_width: DEFAULT_SELECTION_LINE_WIDTH,
            default_cursor: DEFAULT_CURSOR.to_string(),
            hover_cursor: HOVER_CURSOR.to_string(),
            move_cursor: MOVE_CURSOR.to_string(),
            rotation_cursor: ROTATION_CURSOR.to_string(),
            viewport_transform: ViewportTransform::IDENTITY,
            selection: true,
            unrecognized: BTreeMap::new(),
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.warn_unrecognized();
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> CanvasResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CanvasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), "Loaded canvas config");
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> CanvasResult<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CanvasError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| CanvasError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> CanvasResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(CanvasError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.selection_line_width < 0.0 {
            return Err(CanvasError::InvalidConfig(
                "selection_line_width must not be negative".to_string(),
            ));
        }
        if self.viewport_transform.invert().is_none() {
            return Err(CanvasError::SingularViewport(self.viewport_transform.0));
        }
        Ok(())
    }

    /// Log every unrecognized key. Returns how many there were.
    pub fn warn_unrecognized(&self) -> usize {
        for key in self.unrecognized.keys() {
            warn!(key = %key, "Ignoring unrecognized canvas option");
        }
        self.unrecognized.len()
    }
}
