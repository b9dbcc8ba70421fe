//! Configuration for the Attendance Summary Engine.
//!
//! This module provides types for the engine defaults configuration and
//! functionality for loading it from a YAML file.

mod loader;
mod types;

pub use loader::load_config;
pub use types::{DefaultsConfig, EngineConfig};
