//! Deviation sink trait and the headless stub.

use surfmap_math::Vec3;
use surfmap_mesh::TriangleMesh;
use surfmap_types::SurfmapResult;

/// One measured state of the mesh.
pub struct DeviationFrame {
    /// Label of the snapshot, e.g. the deformation step.
    pub step: u32,
    /// Vertex positions at this step.
    pub positions: Vec<Vec3>,
    /// Per-vertex distance to the reference surface.
    pub distances: Vec<f64>,
    /// Distance mapped to pure red.
    pub max_distance: f64,
}

impl DeviationFrame {
    /// Frame from the mesh's own positions.
    pub fn from_mesh(step: u32, mesh: &TriangleMesh, distances: Vec<f64>, max_distance: f64) -> Self {
        Self {
            step,
            positions: mesh.positions(),
            distances,
            max_distance,
        }
    }
}

/// Receiver of measured deviation frames.
///
/// # Implementations
/// - [`HeadlessSink`]: discards frames (benchmarks, CI)
/// - [`DeviationExporter`](crate::DeviationExporter): JSON file output
pub trait DeviationSink: Send {
    /// Captures the mesh connectivity.
    fn init(&mut self, mesh: &TriangleMesh) -> SurfmapResult<()>;

    fn submit_frame(&mut self, frame: &DeviationFrame) -> SurfmapResult<()>;

    /// Flushes output.
    fn finalize(&mut self) -> SurfmapResult<()>;

    fn name(&self) -> &str;

    fn frame_count(&self) -> u32;
}

/// Sink that only counts frames.
#[derive(Default)]
pub struct HeadlessSink {
    frames: u32,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviationSink for HeadlessSink {
    fn init(&mut self, _mesh: &TriangleMesh) -> SurfmapResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &DeviationFrame) -> SurfmapResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> SurfmapResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
