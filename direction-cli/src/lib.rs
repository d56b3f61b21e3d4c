//! direction - reading-direction inference from word-edge character statistics
//!
//! For every text the first and last characters of each word are counted,
//! summarised by Gini concentration and Shannon entropy, and the two
//! summaries are contrasted to guess whether the script is written
//! left-to-right or right-to-left. Each text is also analysed with its
//! characters reversed as a self-check.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reporters;

pub use analysis::{analyze, ScoreBreakdown};
pub use error::{AnalysisError, ErrorKind, Result};
pub use models::{AnalysisResult, RunReport, Variant, Verdict};
pub use pipeline::{analyze_text, Pipeline};
