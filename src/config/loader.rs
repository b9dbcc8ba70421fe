//! Configuration loading functionality.
//!
//! Loads the engine defaults from a YAML file. A missing or malformed file
//! is reported as an error so the binary can decide whether to fall back to
//! the built-in defaults.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads engine configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the configuration file (e.g. "./config/engine.yaml")
///
/// # Returns
///
/// Returns the parsed [`EngineConfig`], or an error if the file is missing
/// or contains invalid YAML.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::load_config;
///
/// let config = load_config("./config/engine.yaml")?;
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> EngineResult<EngineConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
