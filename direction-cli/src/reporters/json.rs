//! JSON reporter
//!
//! Outputs the full RunReport as pretty-printed JSON at full precision.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::RunReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
