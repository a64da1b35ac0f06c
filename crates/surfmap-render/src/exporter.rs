//! JSON deviation exporter.
//!
//! Captures the mesh indices on `init`, one frame of positions, distances
//! and colours per `submit_frame`, and writes the whole document on
//! `finalize()`.

use serde::Serialize;
use surfmap_math::positions_to_interleaved;
use surfmap_mesh::TriangleMesh;
use surfmap_types::{SurfmapError, SurfmapResult};
use tracing::info;

use crate::colormap::deviation_colors;
use crate::sink::{DeviationFrame, DeviationSink};

#[derive(Serialize)]
struct FrameData {
    step: u32,
    positions: Vec<f64>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
    distances: Vec<Option<f64>>,
    max_distance: f64,
    colors: Vec<f64>, // Interleaved [r0,g0,b0, ...]
}

#[derive(Serialize)]
struct DeviationData {
    vertex_count: usize,
    triangle_count: usize,
    indices: Vec<u32>,
    frames: Vec<FrameData>,
}

/// Writes deviation frames to a JSON file.
///
/// ```text
/// let mut exporter = DeviationExporter::new("deviation.json");
/// exporter.init(&mesh)?;
/// exporter.submit_frame(&frame)?;
/// exporter.finalize()?; // writes the file
/// ```
pub struct DeviationExporter {
    output_path: String,
    indices: Vec<u32>,
    vertex_count: usize,
    triangle_count: usize,
    frames: Vec<FrameData>,
}

impl DeviationExporter {
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            indices: Vec::new(),
            vertex_count: 0,
            triangle_count: 0,
            frames: Vec::new(),
        }
    }
}

impl DeviationSink for DeviationExporter {
    fn init(&mut self, mesh: &TriangleMesh) -> SurfmapResult<()> {
        self.vertex_count = mesh.vertex_count();
        self.triangle_count = mesh.triangle_count();
        self.indices = mesh.indices.clone();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &DeviationFrame) -> SurfmapResult<()> {
        let n = frame.positions.len();
        if frame.distances.len() != n {
            return Err(SurfmapError::LengthMismatch {
                what: "frame distances",
                expected: n,
                actual: frame.distances.len(),
            });
        }

        let positions = positions_to_interleaved(&frame.positions);
        let colors = deviation_colors(&frame.distances, frame.max_distance)
            .into_iter()
            .flatten()
            .collect();
        // JSON has no infinity; unprojected vertices become null.
        let distances = frame
            .distances
            .iter()
            .map(|&d| d.is_finite().then_some(d))
            .collect();

        self.frames.push(FrameData {
            step: frame.step,
            positions,
            distances,
            max_distance: frame.max_distance,
            colors,
        });
        Ok(())
    }

    fn finalize(&mut self) -> SurfmapResult<()> {
        let data = DeviationData {
            vertex_count: self.vertex_count,
            triangle_count: self.triangle_count,
            indices: self.indices.clone(),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| SurfmapError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        info!(
            path = %self.output_path,
            frames = data.frames.len(),
            "deviation export written"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "deviation_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
