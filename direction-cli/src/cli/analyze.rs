//! Analyze command - run the directionality pipeline over corpus sources
//!
//! Resolution order for settings: CLI flag > direction.toml > built-in default.
//! Configuration problems are reported before any source is touched.

use super::AnalyzeArgs;
use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::corpus::{sources_from_paths, CorpusSource};
use crate::models::RunReport;
use crate::pipeline::Pipeline;
use crate::reporters::{self, OutputFormat, RenderOptions};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// What a command run produced, for the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOutcome {
    pub analysed: usize,
    pub failed: usize,
}

impl AnalyzeOutcome {
    fn from_report(report: &RunReport) -> Self {
        Self {
            analysed: report.stats.analysed,
            failed: report.stats.failed,
        }
    }

    /// Exit with code 1 when not a single source could be analysed
    pub fn exit_if_nothing_analysed(self) {
        if self.analysed == 0 {
            std::process::exit(1);
        }
    }
}

/// Create bar progress style
fn create_bar_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
        .progress_chars("█▓▒░  "))
}

/// Pick the config: explicit `--config`, else the single corpus directory, else cwd
fn load_config(args: &AnalyzeArgs) -> Result<ProjectConfig> {
    let config = match (&args.config, args.paths.as_slice()) {
        (Some(path), _) => load_config_file(path)?,
        (None, [dir]) if dir.is_dir() => load_project_config(dir)?,
        (None, []) => load_project_config(Path::new("."))?,
        _ => ProjectConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Explicit files win; otherwise configured sources; otherwise directory listings.
fn resolve_sources(
    args: &AnalyzeArgs,
    config: &ProjectConfig,
    cap: Option<NonZeroUsize>,
) -> Result<Vec<CorpusSource>> {
    let explicit_files = args.paths.iter().any(|p| !p.is_dir());
    if !explicit_files && config.has_sources() {
        return Ok(config.corpus_sources(cap)?);
    }

    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    Ok(sources_from_paths(&paths)?
        .into_iter()
        .map(|source| source.with_sample_size(cap))
        .collect())
}

fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Results saved to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Run the analyze command
pub fn run(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let config = load_config(args)?;

    let cap = match args.sample_size {
        Some(cap) => Some(cap),
        None => config.default_sample_size()?,
    };

    let format_name = args
        .format
        .clone()
        .or_else(|| config.output.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let format = OutputFormat::from_str(&format_name)?;

    let sources = resolve_sources(args, &config, cap)?;
    if sources.is_empty() {
        anyhow::bail!(
            "No corpus sources found. Pass *.txt files or directories, or list [[sources]] in direction.toml"
        );
    }

    let workers = args.workers.or(config.run.workers).unwrap_or(1);
    let mut pipeline = Pipeline::new().with_workers(workers);
    info!(
        "Analysing {} sources with {} worker(s), sample size {}",
        sources.len(),
        pipeline.workers(),
        cap.map(|c| c.to_string()).unwrap_or_else(|| "unlimited".into())
    );

    if sources.len() > 1 && console::Term::stderr().is_term() {
        let bar = ProgressBar::new(sources.len() as u64);
        bar.set_style(create_bar_style()?);
        pipeline = pipeline.with_progress(bar);
    }

    let report = pipeline.run(&sources);

    let options = RenderOptions {
        precision: args.precision.unwrap_or_else(|| config.precision()),
        color: !args.no_color && args.output.is_none() && console::colors_enabled(),
    };
    let rendered = reporters::report_with_format(&report, format, options)?;
    let output = args.output.as_ref().map(|path| {
        if path.extension().is_none() {
            path.with_extension(reporters::file_extension(format))
        } else {
            path.clone()
        }
    });
    write_output(&rendered, output.as_deref())?;

    Ok(AnalyzeOutcome::from_report(&report))
}

/// Flags of the text command
#[derive(Debug, Clone)]
pub struct InlineOptions {
    pub sample_size: Option<NonZeroUsize>,
    pub format: String,
    pub precision: Option<usize>,
    pub no_color: bool,
}

fn inline_render_options(options: &InlineOptions, config: &ProjectConfig) -> RenderOptions {
    RenderOptions {
        precision: options.precision.unwrap_or_else(|| config.precision()),
        color: !options.no_color && console::colors_enabled(),
    }
}

/// Run the text command on a single inline string.
///
/// Sample size and precision fall back to direction.toml in the current
/// directory, like the analyze command.
pub fn run_inline(id: &str, text: &str, options: InlineOptions) -> Result<AnalyzeOutcome> {
    let config = load_project_config(Path::new("."))?;
    config.validate()?;

    let cap = match options.sample_size {
        Some(cap) => Some(cap),
        None => config.default_sample_size()?,
    };
    let source = CorpusSource::inline(id, text).with_sample_size(cap);
    let report = Pipeline::new().run(&[source]);

    let rendered = reporters::report(
        &report,
        &options.format,
        inline_render_options(&options, &config),
    )?;
    write_output(&rendered, None)?;

    Ok(AnalyzeOutcome::from_report(&report))
}
