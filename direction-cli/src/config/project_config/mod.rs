//! Project-level configuration support
//!
//! Loads run configuration from `direction.toml` or `.directionrc.json` in
//! the corpus directory (or from an explicit `--config` path).
//!
//! # Configuration Format
//!
//! ```toml
//! # direction.toml
//!
//! [sampling]
//! default_sample_size = 50000
//!
//! [[sources]]
//! id = "English"
//! path = "europarl/english.txt"
//! group = "europarl"
//!
//! [[sources]]
//! id = "Hebrew"
//! path = "udhr/hebrew.txt"
//! sample_size = 8000
//! group = "udhr"
//!
//! [output]
//! format = "tsv"
//! precision = 4
//!
//! [run]
//! workers = 4
//! ```

use crate::corpus::CorpusSource;
use crate::error::{AnalysisError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Preferred config file name
pub const CONFIG_FILE_NAME: &str = "direction.toml";
/// JSON fallback
pub const JSON_CONFIG_FILE_NAME: &str = ".directionrc.json";

/// Default number of decimals in delimited/text output
pub const DEFAULT_PRECISION: usize = 4;

/// Example written by `direction init`
pub const EXAMPLE_CONFIG: &str = r#"# direction configuration

[sampling]
# Leading characters analysed per source (omit to analyse whole texts)
# default_sample_size = 50000

# Sources are analysed in the order listed. Paths are relative to this file.
# [[sources]]
# id = "English"
# path = "english.txt"
# group = "europarl"

# [[sources]]
# id = "Arabic"
# path = "arabic.txt"
# sample_size = 8000
# group = "udhr"

[output]
# Output format: text, tsv, csv, json
format = "text"
# Decimal places for text/tsv/csv output
precision = 4

[run]
# Parallel workers (1-64)
workers = 1
"#;

/// Project configuration loaded from direction.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Explicit source list, in run order
    #[serde(default)]
    pub sources: Vec<SourceEntry>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub run: RunDefaults,

    /// Directory source paths are resolved against (not serialized)
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// Sample-size defaults
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SamplingConfig {
    /// Signed so that negative values are reported instead of failing to parse
    #[serde(default)]
    pub default_sample_size: Option<i64>,
}

/// One `[[sources]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct SourceEntry {
    pub id: String,
    pub path: PathBuf,
    #[serde(default)]
    pub sample_size: Option<i64>,
    /// Free-form label (e.g. the collection the text came from)
    #[serde(default)]
    pub group: Option<String>,
}

/// Output defaults
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    /// text, tsv, csv, json
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub precision: Option<usize>,
}

/// Run defaults
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RunDefaults {
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Check a raw sample-size value: absent is fine, anything below 1 is fatal.
pub fn validate_sample_size(raw: Option<i64>, what: &str) -> Result<Option<NonZeroUsize>> {
    match raw {
        None => Ok(None),
        Some(n) if n >= 1 => usize::try_from(n)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Some)
            .ok_or_else(|| AnalysisError::InvalidConfig(format!("{what}: {n} is too large"))),
        Some(n) => Err(AnalysisError::InvalidConfig(format!(
            "{what} must be a positive integer, got {n}"
        ))),
    }
}

/// Load project configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `direction.toml`
/// 2. `.directionrc.json`
///
/// Returns default configuration if no config file is found. A config file
/// that exists but does not parse is an error.
pub fn load_project_config(dir: &Path) -> Result<ProjectConfig> {
    for name in [CONFIG_FILE_NAME, JSON_CONFIG_FILE_NAME] {
        let path = dir.join(name);
        if path.is_file() {
            return load_config_file(&path);
        }
    }

    debug!("No project config found in {}, using defaults", dir.display());
    Ok(ProjectConfig::default())
}

/// Load a specific config file (TOML unless the extension is `.json`)
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AnalysisError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
    })?;

    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    let mut config: ProjectConfig = if is_json {
        serde_json::from_str(&content)
            .map_err(|e| AnalysisError::InvalidConfig(format!("{}: {}", path.display(), e)))?
    } else {
        toml::from_str(&content)
            .map_err(|e| AnalysisError::InvalidConfig(format!("{}: {}", path.display(), e)))?
    };

    config.base_dir = path.parent().map(Path::to_path_buf);
    debug!(
        "Loaded project config from {} ({} sources)",
        path.display(),
        config.sources.len()
    );
    Ok(config)
}

impl ProjectConfig {
    /// Validated `[sampling] default_sample_size`
    pub fn default_sample_size(&self) -> Result<Option<NonZeroUsize>> {
        validate_sample_size(self.sampling.default_sample_size, "sampling.default_sample_size")
    }

    pub fn precision(&self) -> usize {
        self.output.precision.unwrap_or(DEFAULT_PRECISION)
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Check everything that would make a run fail before it starts.
    pub fn validate(&self) -> Result<()> {
        self.default_sample_size()?;

        let mut seen = HashSet::new();
        for entry in &self.sources {
            if entry.id.trim().is_empty() {
                return Err(AnalysisError::InvalidConfig(format!(
                    "source with path {} has an empty id",
                    entry.path.display()
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "duplicate source id '{}'",
                    entry.id
                )));
            }
            validate_sample_size(entry.sample_size, &format!("sources.{}.sample_size", entry.id))?;
        }

        if let Some(workers) = self.run.workers {
            if !(1..=64).contains(&workers) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "run.workers must be between 1 and 64, got {workers}"
                )));
            }
        }
        Ok(())
    }

    /// Build the configured sources.
    ///
    /// A source's own `sample_size` wins over `fallback_cap`, which the
    /// caller derives from the CLI flag or `[sampling]`.
    pub fn corpus_sources(&self, fallback_cap: Option<NonZeroUsize>) -> Result<Vec<CorpusSource>> {
        self.validate()?;

        self.sources
            .iter()
            .map(|entry| {
                let own = validate_sample_size(
                    entry.sample_size,
                    &format!("sources.{}.sample_size", entry.id),
                )?;
                let path = match &self.base_dir {
                    Some(base) if entry.path.is_relative() => base.join(&entry.path),
                    _ => entry.path.clone(),
                };
                Ok(CorpusSource::file(entry.id.clone(), path)
                    .with_sample_size(own.or(fallback_cap))
                    .with_group(entry.group.clone()))
            })
            .collect()
    }
}
