//! Corpus sources handed to the pipeline
//!
//! A [`CorpusSource`] is plain data: an id, a [`TextSupplier`] and an
//! optional character-count sample cap. Which sources exist is decided by
//! the caller (config file, command line, or an explicit directory listing);
//! the engine never goes looking for them.

mod traits;

pub use traits::TextSupplier;

use crate::error::{AnalysisError, Result};
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// File extension picked up when a directory is given as a source list
pub const CORPUS_EXTENSION: &str = "txt";

/// Text already resident in memory
#[derive(Debug, Clone)]
pub struct InlineText(Arc<str>);

impl InlineText {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }
}

impl TextSupplier for InlineText {
    fn describe(&self) -> String {
        format!("inline text ({} bytes)", self.0.len())
    }

    fn load(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// UTF-8 text file on disk
#[derive(Debug, Clone)]
pub struct FileText {
    source_id: String,
    path: PathBuf,
}

impl FileText {
    pub fn new(source_id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            path: path.into(),
        }
    }
}

impl TextSupplier for FileText {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| AnalysisError::SourceUnavailable {
            source_id: self.source_id.clone(),
            reason: format!("{}: {}", self.path.display(), e),
        })
    }
}

/// One named text to analyse
#[derive(Clone)]
pub struct CorpusSource {
    pub id: String,
    supplier: Arc<dyn TextSupplier>,
    /// Leading characters to keep; `None` analyses the whole text
    pub sample_size: Option<NonZeroUsize>,
    /// Collection label (e.g. "europarl"), shown in logs
    pub group: Option<String>,
}

impl CorpusSource {
    pub fn new(id: impl Into<String>, supplier: Arc<dyn TextSupplier>) -> Self {
        Self {
            id: id.into(),
            supplier,
            sample_size: None,
            group: None,
        }
    }

    /// Source backed by an in-memory string
    pub fn inline(id: impl Into<String>, text: impl Into<Arc<str>>) -> Self {
        Self::new(id, Arc::new(InlineText::new(text)))
    }

    /// Source backed by a file
    pub fn file(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let id = id.into();
        let supplier = FileText::new(id.clone(), path);
        Self::new(id, Arc::new(supplier))
    }

    pub fn with_sample_size(mut self, sample_size: Option<NonZeroUsize>) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_group(mut self, group: Option<String>) -> Self {
        self.group = group;
        self
    }

    pub fn load(&self) -> Result<String> {
        self.supplier.load()
    }

    pub fn describe(&self) -> String {
        match &self.group {
            Some(group) => format!("{} [{}]", self.supplier.describe(), group),
            None => self.supplier.describe(),
        }
    }
}

impl fmt::Debug for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorpusSource")
            .field("id", &self.id)
            .field("supplier", &self.supplier.describe())
            .field("sample_size", &self.sample_size)
            .field("group", &self.group)
            .finish()
    }
}

/// Display id for a file: its stem, first letter upper-cased, rest lowercased
pub fn source_id_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => stem,
    }
}

/// Turn command-line paths into sources.
///
/// Files are taken as-is. Directories contribute their `*.txt` files in
/// sorted file-name order. Paths that do not exist still become sources so
/// the run reports them as unavailable instead of silently dropping them.
pub fn sources_from_paths(paths: &[PathBuf]) -> Result<Vec<CorpusSource>> {
    let mut sources = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| {
                    p.is_file()
                        && p.extension().and_then(|e| e.to_str()) == Some(CORPUS_EXTENSION)
                })
                .collect();
            files.sort();
            debug!("{}: {} corpus files", path.display(), files.len());

            for file in files {
                sources.push(CorpusSource::file(source_id_from_path(&file), file));
            }
        } else {
            sources.push(CorpusSource::file(source_id_from_path(path), path.clone()));
        }
    }

    Ok(sources)
}
