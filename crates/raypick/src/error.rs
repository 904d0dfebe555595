//! Error types for picking geometry.

use thiserror::Error;

/// Errors raised while building pickable geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but geometry has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: usize,
        /// Number of vertices in the geometry.
        vertex_count: usize,
    },
}

/// Result type for picking operations.
pub type Result<T> = std::result::Result<T, PickError>;
