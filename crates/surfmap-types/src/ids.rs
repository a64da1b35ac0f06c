//! Strongly-typed identifiers for mesh entities.
//!
//! Newtype wrappers prevent accidental mixing of vertex indices
//! with edge or triangle indices.

use serde::{Deserialize, Serialize};

/// Index into the vertex position array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

/// Index into the topology's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

/// Index into the triangle list.
///
/// [`TriangleId::INVALID`] is the failure sentinel of every projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TriangleId(pub u32);

impl VertexId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TriangleId {
    /// Sentinel returned when no triangle owns a projection.
    pub const INVALID: TriangleId = TriangleId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns false for the [`INVALID`](Self::INVALID) sentinel.
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl From<u32> for VertexId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for EdgeId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for TriangleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
