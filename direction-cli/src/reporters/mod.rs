//! Output reporters for direction run results
//!
//! Supports multiple output formats:
//! - `text` - Terminal table with colors
//! - `tsv` - Tab-separated rows (the classic console table)
//! - `csv` - Comma-separated rows for spreadsheets
//! - `json` - Machine-readable JSON of the whole run report

mod delimited;
mod json;
mod text;

use crate::config::DEFAULT_PRECISION;
use crate::models::RunReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Column headers shared by the tabular formats
pub const COLUMNS: &[&str] = &[
    "Language",
    "Sample Size",
    "Token Count",
    "Text Type",
    "Initial Gini",
    "Final Gini",
    "Initial Entropy",
    "Final Entropy",
    "Gini Difference",
    "Entropy Difference",
    "Normalized Gini Difference",
    "Normalized Entropy Difference",
    "Combined Score",
    "Likely Direction",
];

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Tsv,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "tsv" | "tab" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, tsv, csv, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Rendering knobs shared by the formats
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Decimal places for floats (text/tsv/csv; JSON keeps full precision)
    pub precision: usize,
    /// ANSI colors in text output
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            color: true,
        }
    }
}

/// Render a run report in the specified format
pub fn report(report: &RunReport, format: &str, options: RenderOptions) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt, options)
}

/// Render a run report using an OutputFormat enum
pub fn report_with_format(
    report: &RunReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, options),
        OutputFormat::Tsv => delimited::render(report, b'\t', options.precision),
        OutputFormat::Csv => delimited::render(report, b',', options.precision),
        OutputFormat::Json => json::render(report),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Tsv => "tsv",
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    }
}

/// Fixed-point float, never printing a negative zero
pub(crate) fn format_float(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::corpus::CorpusSource;
    use crate::pipeline::Pipeline;

    /// A small real run: one analysed source and one failure
    pub(crate) fn test_report() -> RunReport {
        Pipeline::new().run(&[
            CorpusSource::inline("English", "The cat sat on the mat"),
            CorpusSource::inline("Silent", "a b c"),
        ])
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("tsv").unwrap(), OutputFormat::Tsv);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.1333333333333333, 4), "0.1333");
        assert_eq!(format_float(-0.08888888888888902, 4), "-0.0889");
        assert_eq!(format_float(-0.00001, 4), "0.0000");
        assert_eq!(format_float(2.0, 2), "2.00");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(OutputFormat::Csv), "csv");
        assert_eq!(file_extension(OutputFormat::Tsv), "tsv");
    }

    #[test]
    fn test_report_dispatch() {
        let report = test_report();
        let out = super::report(&report, "tsv", RenderOptions::default()).unwrap();
        assert!(out.starts_with("Language\tSample Size"));
        assert!(super::report(&report, "yaml", RenderOptions::default()).is_err());
    }
}
