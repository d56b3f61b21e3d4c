//! Delimited (TSV / CSV) reporter
//!
//! One header row, then one row per result in run order. Floats are rounded
//! to the configured precision.

use super::{format_float, COLUMNS};
use crate::models::{AnalysisResult, RunReport};
use anyhow::Result;

/// Quote a field if it contains the delimiter, a quote, or a line break
fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains(['"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn row(result: &AnalysisResult, precision: usize) -> Vec<String> {
    let f = |v: f64| format_float(v, precision);
    vec![
        result.source_id.clone(),
        result.sample_size_chars.to_string(),
        result.token_count.to_string(),
        result.variant.to_string(),
        f(result.initial_gini),
        f(result.final_gini),
        f(result.initial_entropy),
        f(result.final_entropy),
        f(result.gini_difference),
        f(result.entropy_difference),
        f(result.normalized_gini_difference),
        f(result.normalized_entropy_difference),
        f(result.combined_score),
        result.verdict.to_string(),
    ]
}

/// Render report rows separated by `delimiter` (`b'\t'` or `b','`)
pub fn render(report: &RunReport, delimiter: u8, precision: usize) -> Result<String> {
    let delimiter = delimiter as char;

    if report.results.is_empty() && delimiter == '\t' {
        return Ok("No results to display.\n".to_string());
    }

    let join = |fields: Vec<String>| {
        fields
            .iter()
            .map(|field| escape_field(field, delimiter))
            .collect::<Vec<_>>()
            .join(&delimiter.to_string())
    };

    let mut out = join(COLUMNS.iter().map(|c| c.to_string()).collect());
    out.push('\n');
    for result in &report.results {
        out.push_str(&join(row(result, precision)));
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_tsv_golden_row() {
        let report = test_report();
        let out = render(&report, b'\t', 4).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split('\t').count(), COLUMNS.len());
        assert_eq!(
            lines[1],
            "English\t22\t6\tNormal\t0.1333\t0.2222\t2.2516\t1.4591\t-0.0889\t0.7925\t0.4556\t0.6411\t0.1856\tLeft-to-Right"
        );
        assert!(lines[2].starts_with("English\t22\t6\tReversed\t"));
        assert!(lines[2].ends_with("-0.1856\tRight-to-Left"));
    }

    #[test]
    fn test_csv_quotes_awkward_ids() {
        let mut report = test_report();
        report.results[0].source_id = "Farsi, \"Persian\"".into();
        let out = render(&report, b',', 2).unwrap();
        assert!(out.lines().nth(1).unwrap().starts_with("\"Farsi, \"\"Persian\"\"\",22,6,Normal,0.13,"));
    }

    #[test]
    fn test_empty_results() {
        let report = RunReport::default();
        assert_eq!(render(&report, b'\t', 4).unwrap(), "No results to display.\n");
        let csv = render(&report, b',', 4).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("Language,Sample Size,"));
    }
}
