//! CLI command definitions and handlers

mod analyze;
mod init;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub use analyze::AnalyzeOutcome;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// Parse and validate a sample-size cap (positive character count)
fn parse_sample_size(s: &str) -> Result<NonZeroUsize, String> {
    let n: i64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n <= 0 {
        return Err(format!("sample size must be a positive integer, got {}", n));
    }
    usize::try_from(n)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| format!("sample size {} is too large", n))
}

/// direction - reading-direction inference from positional character statistics
#[derive(Parser, Debug)]
#[command(name = "direction")]
#[command(
    version,
    args_conflicts_with_subcommands = true,
    about = "Infer whether texts read left-to-right or right-to-left from word-edge character statistics",
    long_about = "direction contrasts the distribution of word-initial and word-final characters \
of a text (Gini concentration and Shannon entropy) to guess its reading direction. \
Every source is also analysed with its characters reversed as a self-check.\n\n\
Run without a subcommand to analyse files or directories of *.txt corpora:\n  \
direction corpora/",
    after_help = "\
Examples:
  direction corpora/                         Analyse every *.txt file in corpora/
  direction english.txt hebrew.txt           Analyse specific files
  direction corpora/ --sample-size 50000     Only the first 50000 characters of each text
  direction corpora/ --format csv -o out.csv Save results as CSV
  direction text \"The cat sat on the mat\"    Analyse an inline string
  direction init                             Write an example direction.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by the default command and `analyze`
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Corpus files or directories (default: sources from direction.toml, else *.txt in .)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Analyse only the first N characters of each text
    #[arg(long, short = 's', value_parser = parse_sample_size)]
    pub sample_size: Option<NonZeroUsize>,

    /// Output format: text, tsv, csv, json
    #[arg(long, short = 'f', value_parser = ["text", "tsv", "csv", "json"])]
    pub format: Option<String>,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Number of parallel workers (1-64)
    #[arg(long, value_parser = parse_workers)]
    pub workers: Option<usize>,

    /// Config file (default: direction.toml in the corpus directory)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Decimal places in text/tsv/csv output
    #[arg(long)]
    pub precision: Option<usize>,

    /// Disable colors in text output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse corpus files (the default command)
    #[command(after_help = "\
Examples:
  direction analyze corpora/                          Analyse a directory of *.txt files
  direction analyze -c runs/udhr.toml                 Use an explicit source list
  direction analyze corpora/ --format tsv             Tab-separated output
  direction analyze corpora/ --workers 8              Analyse sources in parallel")]
    Analyze(AnalyzeArgs),

    /// Analyse an inline string
    Text {
        /// The text to analyse
        text: String,

        /// Label used in the output
        #[arg(long, default_value = "Inline")]
        id: String,

        /// Analyse only the first N characters
        #[arg(long, short = 's', value_parser = parse_sample_size)]
        sample_size: Option<NonZeroUsize>,

        /// Output format: text, tsv, csv, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "tsv", "csv", "json"])]
        format: String,

        /// Decimal places in text/tsv/csv output (default: direction.toml, else 4)
        #[arg(long)]
        precision: Option<usize>,

        /// Disable colors in text output
        #[arg(long)]
        no_color: bool,
    },

    /// Write an example direction.toml
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Analyze(args)) => {
            analyze::run(&args).map(AnalyzeOutcome::exit_if_nothing_analysed)
        }

        Some(Commands::Text {
            text,
            id,
            sample_size,
            format,
            precision,
            no_color,
        }) => analyze::run_inline(
            &id,
            &text,
            analyze::InlineOptions {
                sample_size,
                format,
                precision,
                no_color,
            },
        )
        .map(AnalyzeOutcome::exit_if_nothing_analysed),

        Some(Commands::Init { dir, force }) => init::run(&dir, force),

        Some(Commands::Version) => {
            println!("direction {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        None => analyze::run(&cli.analyze).map(AnalyzeOutcome::exit_if_nothing_analysed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workers() {
        assert_eq!(parse_workers("8"), Ok(8));
        assert!(parse_workers("0").is_err());
        assert!(parse_workers("65").is_err());
        assert!(parse_workers("many").is_err());
    }

    #[test]
    fn test_parse_sample_size() {
        assert_eq!(parse_sample_size("5000"), Ok(NonZeroUsize::new(5000).unwrap()));
        assert!(parse_sample_size("0").is_err());
        assert!(parse_sample_size("-3").unwrap_err().contains("-3"));
    }

    #[test]
    fn test_default_command_takes_paths() {
        let cli = Cli::try_parse_from(["direction", "corpora", "--sample-size", "100"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.analyze.paths, vec![PathBuf::from("corpora")]);
        assert_eq!(cli.analyze.sample_size, NonZeroUsize::new(100));
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::try_parse_from(["direction", "text", "The cat sat", "-f", "json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Text { ref format, .. }) if format == "json"));

        let cli = Cli::try_parse_from(["direction", "analyze", "a.txt", "--workers", "2"]).unwrap();
        match cli.command {
            Some(Commands::Analyze(args)) => assert_eq!(args.workers, Some(2)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_text_precision_flag() {
        let cli = Cli::try_parse_from(["direction", "text", "ab cd", "--precision", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Text { precision: Some(2), .. })));
    }

    #[test]
    fn test_negative_sample_size_rejected_by_parser() {
        assert!(Cli::try_parse_from(["direction", "x.txt", "--sample-size=-5"]).is_err());
    }
}
