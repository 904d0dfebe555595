//! Error types for scene loading.

use raypick::PickError;
use thiserror::Error;

/// Errors that can occur while loading or querying a scene document.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Document is not valid JSON or does not match the schema.
    #[error("invalid scene document: {0}")]
    Json(#[from] serde_json::Error),

    /// A face lists a number of vertices other than 3 or 4.
    #[error("object {object:?}: face {face} has {len} vertices, expected 3 or 4")]
    InvalidFace {
        /// Object name.
        object: String,
        /// Face index.
        face: usize,
        /// Number of indices listed.
        len: usize,
    },

    /// Geometry failed validation.
    #[error("object {object:?}: {source}")]
    Geometry {
        /// Object name.
        object: String,
        /// Underlying geometry error.
        #[source]
        source: PickError,
    },

    /// Invalid pick settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// No object with the given name.
    #[error("no object named {0:?}")]
    UnknownObject(String),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
