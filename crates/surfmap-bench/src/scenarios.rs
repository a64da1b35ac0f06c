//! Benchmark scenarios: procedural mesh pairs for each measurement case.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Plane offset**: Flat grid against a copy lifted by 0.1 along Z
//! 2. **Grid refinement**: Coarse flat grid against a fine one (coplanar)
//! 3. **Sphere resolution**: Coarse UV sphere against a fine one

use serde::{Deserialize, Serialize};

use surfmap_mesh::generators::{quad_grid, translated, uv_sphere};
use surfmap_mesh::TriangleMesh;
use surfmap_projection::ProjectionConfig;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Grid against an offset copy of itself.
    PlaneOffset,
    /// Two resolutions of the same flat square.
    GridRefinement,
    /// Two tessellations of the unit sphere.
    SphereResolution,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::PlaneOffset,
            ScenarioKind::GridRefinement,
            ScenarioKind::SphereResolution,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::PlaneOffset => "plane_offset",
            ScenarioKind::GridRefinement => "grid_refinement",
            ScenarioKind::SphereResolution => "sphere_resolution",
        }
    }

    /// Parses a name produced by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<ScenarioKind> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Mesh whose deviation is measured.
    pub source: TriangleMesh,
    /// Reference mesh.
    pub target: TriangleMesh,
    /// Projection configuration.
    pub config: ProjectionConfig,
    /// Number of timed measurements.
    pub repetitions: u32,
    /// Known symmetric distance, if the geometry gives one.
    pub expected_distance: Option<f64>,
}

impl Scenario {
    /// Create the plane offset scenario.
    ///
    /// A 1m × 1m grid at 40×40 resolution against the same grid raised
    /// by 0.1m. Every vertex sits exactly 0.1m from the other plane.
    pub fn plane_offset() -> Self {
        let source = quad_grid(40, 40, 1.0, 1.0);
        let target = translated(&source, 0.0, 0.0, 0.1);
        Self {
            kind: ScenarioKind::PlaneOffset,
            source,
            target,
            config: ProjectionConfig::default(),
            repetitions: 5,
            expected_distance: Some(0.1),
        }
    }

    /// Create the grid refinement scenario.
    ///
    /// A 10×10 grid against a 50×50 grid over the same square; the
    /// surfaces coincide so the distance is zero up to rounding.
    pub fn grid_refinement() -> Self {
        Self {
            kind: ScenarioKind::GridRefinement,
            source: quad_grid(10, 10, 1.0, 1.0),
            target: quad_grid(50, 50, 1.0, 1.0),
            config: ProjectionConfig::default(),
            repetitions: 5,
            expected_distance: Some(0.0),
        }
    }

    /// Create the sphere resolution scenario.
    ///
    /// A 12×24 UV sphere against a 48×96 one, both of radius 1.
    pub fn sphere_resolution() -> Self {
        Self {
            kind: ScenarioKind::SphereResolution,
            source: uv_sphere(1.0, 12, 24),
            target: uv_sphere(1.0, 48, 96),
            config: ProjectionConfig::default(),
            repetitions: 3,
            expected_distance: None,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::PlaneOffset => Self::plane_offset(),
            ScenarioKind::GridRefinement => Self::grid_refinement(),
            ScenarioKind::SphereResolution => Self::sphere_resolution(),
        }
    }

    /// Replaces the projection configuration.
    pub fn with_config(mut self, config: ProjectionConfig) -> Self {
        self.config = config;
        self
    }
}
