//! Numeric defaults shared by the projection engine.

/// Default relative threshold below which a triangle's normal-equation
/// determinant counts as zero (degenerate, near-zero area).
///
/// Compared against `Δ / ((e1·e1)(e2·e2))`, i.e. `sin²` of the corner angle.
pub const DEFAULT_DEGENERATE_EPSILON: f64 = 1.0e-12;

/// Tolerance used when checking that barycentric weights sum to one.
pub const BARY_SUM_TOLERANCE: f64 = 1.0e-6;

/// Default minimum number of query points before batch operations
/// switch to the rayon thread pool.
pub const DEFAULT_PARALLEL_MIN_POINTS: usize = 256;
