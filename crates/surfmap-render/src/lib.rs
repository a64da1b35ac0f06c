//! # surfmap-render
//!
//! Visual output for surface measurements.
//!
//! Maps per-vertex deviations onto a blue-to-red colour ramp and writes
//! them, together with the mesh, through a [`DeviationSink`]: either the
//! no-op [`HeadlessSink`] or the [`DeviationExporter`] JSON writer.

pub mod colormap;
pub mod exporter;
pub mod sink;

pub use colormap::{deviation_colors, hsl_to_rgb};
pub use exporter::DeviationExporter;
pub use sink::{DeviationFrame, DeviationSink, HeadlessSink};
