//! Configuration module for direction
//!
//! This module handles:
//! - Project-level configuration (direction.toml)
//! - Explicit source lists and sample-size caps
//! - Output and worker defaults

mod project_config;

pub use project_config::{
    load_config_file,
    load_project_config,
    validate_sample_size,
    OutputConfig,
    ProjectConfig,
    RunDefaults,
    SamplingConfig,
    SourceEntry,
    CONFIG_FILE_NAME,
    DEFAULT_PRECISION,
    EXAMPLE_CONFIG,
    JSON_CONFIG_FILE_NAME,
};
