//! Error types for the surfmap engine.
//!
//! The projection core itself never errors (it reports failure through
//! [`TriangleId::INVALID`](crate::TriangleId::INVALID)); everything around
//! it returns `SurfmapResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the surfmap crates.
#[derive(Debug, Error)]
pub enum SurfmapError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An operation needed at least one triangle and got none.
    #[error("Mesh has no triangles: {0}")]
    EmptyMesh(String),

    /// Two arrays that must be indexed identically have different lengths.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A point could not be projected onto any usable triangle.
    #[error("Point {index} could not be bound to the surface")]
    UnboundPoint { index: usize },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, SurfmapError>`.
pub type SurfmapResult<T> = Result<T, SurfmapError>;
