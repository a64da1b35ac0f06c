//! Input validation.
//!
//! Validates measurement and projection inputs before the engine receives
//! them, catching data-level errors early with clear diagnostics.

use surfmap_mesh::TriangleMesh;
use surfmap_projection::ProjectionConfig;
use surfmap_types::{SurfmapError, SurfmapResult};

use crate::contract::{MeasurementInput, ProjectionInput};

/// Validates a measurement input.
///
/// Checks:
/// - Source and target mesh integrity (SoA consistency, valid indices)
/// - Both meshes have at least one triangle
/// - Projection config values
pub fn validate_input(input: &MeasurementInput) -> SurfmapResult<()> {
    validate_surface("Source", &input.source)?;
    validate_surface("Target", &input.target)?;
    validate_config(&input.config)
}

/// Validates a projection input.
pub fn validate_projection_input(input: &ProjectionInput) -> SurfmapResult<()> {
    validate_surface("Surface", &input.mesh)?;
    if let Some(i) = input
        .points
        .iter()
        .position(|p| p.iter().any(|c| !c.is_finite()))
    {
        return Err(SurfmapError::InvalidConfig(format!(
            "Query point {i} has a non-finite coordinate"
        )));
    }
    validate_config(&input.config)
}

/// Validates projection parameters.
pub fn validate_config(config: &ProjectionConfig) -> SurfmapResult<()> {
    config.validate()
}

fn validate_surface(label: &str, mesh: &TriangleMesh) -> SurfmapResult<()> {
    mesh.validate()
        .map_err(|e| SurfmapError::InvalidMesh(format!("{label} mesh: {e}")))?;
    if mesh.triangle_count() == 0 {
        return Err(SurfmapError::EmptyMesh(format!("{label} mesh has no triangles")));
    }
    Ok(())
}
