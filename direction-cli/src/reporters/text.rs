//! Text (terminal) reporter with colors and formatting

use super::{format_float, RenderOptions};
use crate::models::{RunReport, Verdict};
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Verdict colors
fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::LeftToRight => "\x1b[32m", // Green
        Verdict::RightToLeft => "\x1b[36m", // Cyan
        Verdict::Indeterminate => "\x1b[33m", // Yellow
    }
}

/// Pad or truncate to `width` characters (UTF-8 safe)
fn fit(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{:<width$}", s)
    }
}

/// Render report as a formatted terminal table
pub fn render(report: &RunReport, options: RenderOptions) -> Result<String> {
    let (reset, bold, dim) = if options.color {
        (RESET, BOLD, DIM)
    } else {
        ("", "", "")
    };
    let p = options.precision;
    let mut out = String::new();

    out.push_str(&format!("\n{bold}Directionality Analysis{reset}\n"));
    out.push_str(&format!(
        "{dim}──────────────────────────────────────{reset}\n"
    ));

    if report.results.is_empty() {
        out.push_str("No results to display.\n");
    } else {
        out.push_str(&format!(
            "{dim}{} {} {:>9} {:>7} {:>9} {:>9} {:>9} {:>9} {:>9}  DIRECTION{reset}\n",
            fit("SOURCE", 16),
            fit("TEXT", 8),
            "CHARS",
            "TOKENS",
            "GINI(I)",
            "GINI(F)",
            "H(I)",
            "H(F)",
            "SCORE"
        ));

        for r in &report.results {
            let color = if options.color {
                verdict_color(r.verdict)
            } else {
                ""
            };
            out.push_str(&format!(
                "{} {} {:>9} {:>7} {:>9} {:>9} {:>9} {:>9} {:>9}  {color}{}{reset}\n",
                fit(&r.source_id, 16),
                fit(&r.variant.to_string(), 8),
                r.sample_size_chars,
                r.token_count,
                format_float(r.initial_gini, p),
                format_float(r.final_gini, p),
                format_float(r.initial_entropy, p),
                format_float(r.final_entropy, p),
                format_float(r.combined_score, p),
                r.verdict
            ));
        }
    }

    if !report.failures.is_empty() {
        out.push_str(&format!("\n{bold}SKIPPED{reset} ({})\n", report.failures.len()));
        for failure in &report.failures {
            out.push_str(&format!(
                "  {} {dim}[{}]{reset} {}\n",
                failure.source_id, failure.kind, failure.message
            ));
        }
    }

    out.push_str(&format!("\n{dim}{}{reset}\n", report.stats.summary()));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    fn plain() -> RenderOptions {
        RenderOptions {
            color: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_render_rows() {
        let out = render(&test_report(), plain()).unwrap();
        assert!(out.contains("Directionality Analysis"));
        assert!(out.contains("Left-to-Right"));
        assert!(out.contains("Right-to-Left"));
        assert!(out.contains("0.1856"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_text_lists_failures() {
        let out = render(&test_report(), plain()).unwrap();
        assert!(out.contains("SKIPPED"));
        assert!(out.contains("Silent"));
        assert!(out.contains("empty input"));
    }

    #[test]
    fn test_text_colors_when_enabled() {
        let out = render(&test_report(), RenderOptions::default()).unwrap();
        assert!(out.contains("\x1b[32mLeft-to-Right"));
    }

    #[test]
    fn test_text_empty_report() {
        let out = render(&RunReport::default(), plain()).unwrap();
        assert!(out.contains("No results to display."));
    }

    #[test]
    fn test_fit_truncates_long_ids() {
        assert_eq!(fit("Portuguese-Brazilian", 10), "Portugues…");
        assert_eq!(fit("Greek", 8), "Greek   ");
    }
}
