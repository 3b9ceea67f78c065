//! Error types for canvas operations
//!
//! Interaction handlers never fail: malformed pointer input is ignored and a
//! hit-test miss is an absent target. Errors only surface from host-facing
//! calls such as loading configuration or addressing an unknown object.

use crate::object::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or driving a canvas
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Reading a configuration file failed
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration JSON could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// No object with this id is on the canvas
    #[error("Unknown object: {0}")]
    UnknownObject(ObjectId),

    /// The viewport transform has no inverse (zero determinant)
    #[error("Viewport transform is not invertible: {0:?}")]
    SingularViewport([f64; 6]),
}

/// Result type alias for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
