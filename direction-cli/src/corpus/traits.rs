//! Text supplier trait
//!
//! Corpus text is owned outside the engine. Suppliers hand it over already
//! resident in memory; fetching or caching happens before a run starts.

use crate::error::Result;

/// Common interface for anything that can produce a source's raw text
pub trait TextSupplier: Send + Sync {
    /// Short description of where the text comes from (for logging)
    fn describe(&self) -> String;

    /// Produce the full raw text.
    ///
    /// Failures surface as `AnalysisError::SourceUnavailable`.
    fn load(&self) -> Result<String>;
}
