//! Contract-level entry points: validate, run the engine, build a report.

use std::time::Instant;

use surfmap_math::Vec3;
use surfmap_projection::{surface_distance, PointProjector, Surface};
use surfmap_types::{SurfmapResult, TriangleId};
use tracing::info;

use crate::contract::{MeasurementInput, MeasurementReport, ProjectedPoint, ProjectionInput, ProjectionReport};
use crate::validator::{validate_input, validate_projection_input};

/// Measures the symmetric surface distance described by `input`.
pub fn run_measurement(input: &MeasurementInput) -> SurfmapResult<MeasurementReport> {
    validate_input(input)?;
    let source = Surface::from_mesh(&input.source)?;
    let target = Surface::from_mesh(&input.target)?;

    let start = Instant::now();
    let distance = surface_distance(source.view(), target.view(), &input.config)?;
    let elapsed = start.elapsed().as_secs_f64();

    Ok(MeasurementReport::from_distance(input, &distance, elapsed))
}

/// Projects the query points of `input` onto its mesh.
pub fn run_projection(input: &ProjectionInput) -> SurfmapResult<ProjectionReport> {
    validate_projection_input(input)?;
    let surface = Surface::from_mesh(&input.mesh)?;
    let view = surface.view();
    let projector = PointProjector::with_config(view, input.config);

    let points: Vec<Vec3> = input.points.iter().map(|&p| Vec3::from_array(p)).collect();
    let projections = match &input.triangles {
        Some(ids) => {
            let ids: Vec<TriangleId> = ids.iter().copied().map(TriangleId).collect();
            projector.project_points_restricted(&points, &ids)
        }
        None => projector.project_points(&points),
    };

    let projections: Vec<ProjectedPoint> = projections
        .iter()
        .map(|p| ProjectedPoint::new(p, p.point(view).map(|x| x.to_array())))
        .collect();
    let invalid_count = projections.iter().filter(|p| p.triangle.is_none()).count();

    info!(
        points = points.len(),
        invalid = invalid_count,
        restricted = input.triangles.is_some(),
        "projection run finished"
    );

    Ok(ProjectionReport {
        projections,
        invalid_count,
    })
}
