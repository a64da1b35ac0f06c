//! JSON and TOML file loading.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use surfmap_mesh::TriangleMesh;
use surfmap_projection::ProjectionConfig;
use surfmap_types::{SurfmapError, SurfmapResult};

/// Reads and deserializes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> SurfmapResult<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| SurfmapError::Serialization(format!("{}: invalid JSON: {e}", path.display())))
}

/// Serializes `value` as pretty JSON and writes it to `path`.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> SurfmapResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| SurfmapError::Serialization(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Loads a mesh from its JSON (SoA) form.
pub fn load_mesh(path: impl AsRef<Path>) -> SurfmapResult<TriangleMesh> {
    read_json(path)
}

/// Loads a projection config from TOML. Missing keys take defaults.
pub fn load_config(path: impl AsRef<Path>) -> SurfmapResult<ProjectionConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let config: ProjectionConfig = toml::from_str(&text)
        .map_err(|e| SurfmapError::Serialization(format!("{}: invalid TOML: {e}", path.display())))?;
    config.validate()?;
    Ok(config)
}
