use crate::detector::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the `detect-lane` tool: one input frame, parameter overrides,
/// and output locations.
#[derive(Debug, Deserialize)]
pub struct DetectorToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: LaneParams,
    pub output: DetectorOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DetectorOutputConfig {
    pub report_json: PathBuf,
    /// Optional grayscale dump of the binary edge map for inspection.
    #[serde(default)]
    pub edge_map: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DetectorToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
