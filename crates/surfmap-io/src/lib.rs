//! # surfmap-io
//!
//! Measurement input/output contract and validation.
//!
//! Defines the boundary types the CLI and external tools use to hand
//! meshes to the projection engine and read its results back, plus JSON
//! and TOML file loading.

pub mod contract;
pub mod files;
pub mod measure;
pub mod validator;

pub use contract::{MeasurementInput, MeasurementReport, ProjectedPoint, ProjectionInput, ProjectionReport};
pub use measure::{run_measurement, run_projection};
