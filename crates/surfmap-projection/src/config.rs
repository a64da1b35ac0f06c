//! Projection configuration.
//!
//! Parameters that control how projections are resolved: clamping,
//! degeneracy threshold and batch parallelism. Loadable from TOML.

use serde::{Deserialize, Serialize};
use surfmap_types::constants::{DEFAULT_DEGENERATE_EPSILON, DEFAULT_PARALLEL_MIN_POINTS};
use surfmap_types::{SurfmapError, SurfmapResult};

use crate::barycentric::BaryMode;

/// Configuration for the projection engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Clamp barycentric coordinates into the owning triangle.
    /// When false the raw planar solve is returned (extrapolation).
    pub constrained: bool,

    /// Relative determinant threshold below which a triangle is degenerate.
    pub degenerate_epsilon: f64,

    /// Allow batch operations to use the rayon thread pool.
    pub parallel: bool,

    /// Minimum batch size before going parallel.
    pub parallel_min_points: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            constrained: true,
            degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
            parallel: true,
            parallel_min_points: DEFAULT_PARALLEL_MIN_POINTS,
        }
    }
}

impl ProjectionConfig {
    /// Single-threaded config, e.g. when the caller already parallelizes.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Returns unclamped (extrapolated) barycentric coordinates.
    pub fn unconstrained() -> Self {
        Self {
            constrained: false,
            ..Default::default()
        }
    }

    /// Barycentric mode implied by [`constrained`](Self::constrained).
    pub fn mode(&self) -> BaryMode {
        if self.constrained {
            BaryMode::Constrained
        } else {
            BaryMode::Unconstrained
        }
    }

    /// Whether a batch of `n` points should be processed in parallel.
    pub fn use_parallel(&self, n: usize) -> bool {
        self.parallel && n >= self.parallel_min_points.max(1)
    }

    /// Checks that all values are usable.
    pub fn validate(&self) -> SurfmapResult<()> {
        let eps = self.degenerate_epsilon;
        if !eps.is_finite() || !(0.0..1.0).contains(&eps) {
            return Err(SurfmapError::InvalidConfig(format!(
                "degenerate_epsilon must be finite and in [0, 1), got {}",
                eps
            )));
        }
        Ok(())
    }
}
