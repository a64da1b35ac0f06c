//! # surfmap-types
//!
//! Shared identifiers, error types, and numeric constants for the
//! surfmap point-to-surface projection engine.
//!
//! This crate has zero domain logic; it defines the vocabulary
//! that all other surfmap crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{SurfmapError, SurfmapResult};
pub use ids::{EdgeId, TriangleId, VertexId};
