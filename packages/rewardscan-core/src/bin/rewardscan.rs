//! Rewardscan CLI
//!
//! Audits a directory of reward-function submissions. Every sub-directory of
//! the root is one group (bucket / team); `--flat` treats the root itself as
//! a single group.
//!
//! # Usage
//!
//! ```bash
//! # Hardcoded waypoints, flag files with more than 10 literals
//! rewardscan waypoints ./submissions --threshold 10
//!
//! # Cross-group plagiarism at 85%, JSON report
//! rewardscan --format json plagiarism ./submissions --threshold 85 --parallel
//!
//! # Report a pair when either the structural or the textual score reaches 85%
//! rewardscan plagiarism ./submissions --threshold 85 --textual-fallback either
//!
//! # Both checks, settings from YAML, report written to a file
//! rewardscan --config audit.yaml --output report.json audit ./submissions
//! ```
//!
//! Exit status is 1 when configuration or storage fails.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rewardscan_core::config::{parse_count_threshold, parse_threshold, AuditConfig};
use rewardscan_core::features::clone_detection::TextualFallback;
use rewardscan_core::features::waypoint_detection::PatternSet;
use rewardscan_core::usecases::{AuditReport, AuditScope, AuditService};
use rewardscan_storage::{FilesystemStore, JsonReportSink, ResultSink};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rewardscan")]
#[command(about = "Reward-function audit - hardcoded waypoints and cross-team plagiarism", long_about = None)]
struct Cli {
    /// YAML configuration (schema v1)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report format on stdout
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Write the JSON report to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
struct StoreArgs {
    /// Submission root directory
    root: PathBuf,

    /// Treat the root as a single group
    #[arg(long)]
    flat: bool,

    /// Only groups whose name starts with this
    #[arg(long)]
    group_prefix: Option<String>,

    /// Only files whose key contains this (e.g. MUDR)
    #[arg(long)]
    key_contains: Option<String>,

    /// Only files whose key ends with this (default reward_function.py)
    #[arg(long)]
    key_suffix: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flag files with hardcoded waypoint coordinates
    Waypoints {
        #[command(flatten)]
        store: StoreArgs,

        /// Flag when the literal count is strictly above this
        #[arg(short, long)]
        threshold: Option<String>,

        /// Also count numeric lists and x_coords / y_coords arrays
        #[arg(long)]
        extended: bool,
    },

    /// Compare submissions across groups
    Plagiarism {
        #[command(flatten)]
        store: StoreArgs,

        /// Report pairs at or above this similarity percentage
        #[arg(short, long)]
        threshold: Option<String>,

        #[command(flatten)]
        comparison: ComparisonArgs,
    },

    /// Run both checks into one report
    Audit {
        #[command(flatten)]
        store: StoreArgs,

        /// Similarity percentage threshold
        #[arg(long)]
        similarity_threshold: Option<String>,

        /// Waypoint literal-count threshold
        #[arg(long)]
        waypoint_threshold: Option<String>,

        /// Also count numeric lists and x_coords / y_coords arrays
        #[arg(long)]
        extended: bool,

        #[command(flatten)]
        comparison: ComparisonArgs,
    },
}

#[derive(Args)]
struct ComparisonArgs {
    /// Compare pairs on all cores
    #[arg(long)]
    parallel: bool,

    /// Also score pairs by character-sequence ratio: for unparsable pairs
    /// only (the default when given without a value) or for any pair
    /// below the threshold
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "parse-failures")]
    textual_fallback: Option<TextualArg>,

    /// Strip comments and docstrings before parsing
    #[arg(long)]
    strip_comments: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TextualArg {
    Off,
    ParseFailures,
    Either,
}

impl From<TextualArg> for TextualFallback {
    fn from(arg: TextualArg) -> Self {
        match arg {
            TextualArg::Off => TextualFallback::Off,
            TextualArg::ParseFailures => TextualFallback::ParseFailures,
            TextualArg::Either => TextualFallback::Either,
        }
    }
}

impl ComparisonArgs {
    fn apply(&self, mut config: AuditConfig) -> AuditConfig {
        if self.parallel {
            config = config.parallel(true);
        }
        if let Some(mode) = self.textual_fallback {
            config = config.textual_fallback(mode.into());
        }
        if self.strip_comments {
            config = config.strip_comments_before_scoring(true);
        }
        config
    }
}

impl StoreArgs {
    fn apply(&self, mut config: AuditConfig) -> AuditConfig {
        if let Some(prefix) = &self.group_prefix {
            config.filter = config.filter.with_group_prefix(prefix);
        }
        if let Some(needle) = &self.key_contains {
            config.filter = config.filter.with_key_contains(needle);
        }
        if let Some(suffix) = &self.key_suffix {
            config.filter = config.filter.with_key_suffix(suffix);
        }
        config
    }

    fn open(&self) -> Result<FilesystemStore> {
        let store = if self.flat {
            FilesystemStore::flat(&self.root)
        } else {
            FilesystemStore::grouped(&self.root)
        };
        store.with_context(|| format!("cannot open submissions at {}", self.root.display()))
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn base_config(path: Option<&PathBuf>) -> Result<AuditConfig> {
    match path {
        Some(path) => AuditConfig::from_yaml(path)
            .with_context(|| format!("invalid configuration file {}", path.display())),
        None => Ok(AuditConfig::default()),
    }
}

/// Resolve configuration and the store before any analysis work
fn prepare(cli: &Cli) -> Result<(AuditConfig, FilesystemStore, AuditScope)> {
    let mut config = base_config(cli.config.as_ref())?;

    let (store, scope) = match &cli.command {
        Commands::Waypoints {
            store,
            threshold,
            extended,
        } => {
            if let Some(raw) = threshold {
                config = config.waypoint_threshold(parse_count_threshold("threshold", raw)?);
            }
            if *extended {
                config = config.pattern_set(PatternSet::Extended);
            }
            (store, AuditScope::Waypoints)
        }
        Commands::Plagiarism {
            store,
            threshold,
            comparison,
        } => {
            if let Some(raw) = threshold {
                config = config.similarity_threshold(parse_threshold("threshold", raw)?);
            }
            config = comparison.apply(config);
            (store, AuditScope::Plagiarism)
        }
        Commands::Audit {
            store,
            similarity_threshold,
            waypoint_threshold,
            extended,
            comparison,
        } => {
            if let Some(raw) = similarity_threshold {
                config = config
                    .similarity_threshold(parse_threshold("similarity_threshold", raw)?);
            }
            if let Some(raw) = waypoint_threshold {
                config = config
                    .waypoint_threshold(parse_count_threshold("waypoint_threshold", raw)?);
            }
            if *extended {
                config = config.pattern_set(PatternSet::Extended);
            }
            config = comparison.apply(config);
            (store, AuditScope::Full)
        }
    };

    let config = store.apply(config);
    config.validate()?;
    Ok((config, store.open()?, scope))
}

fn print_text(report: &AuditReport, scope: AuditScope) {
    if matches!(scope, AuditScope::Waypoints | AuditScope::Full) {
        println!(
            "Hardcoded waypoints (more than {} literals): {} file(s)",
            report.thresholds.waypoint_threshold,
            report.waypoint_flags.len()
        );
        for flag in &report.waypoint_flags {
            println!("  {}  {} literals", flag.file, flag.match_count);
        }
    }

    if matches!(scope, AuditScope::Plagiarism | AuditScope::Full) {
        println!(
            "Similar submissions (>= {}%): {} pair(s)",
            report.thresholds.similarity_threshold,
            report.matches.len()
        );
        for record in &report.matches {
            println!(
                "  {}  ~  {}  {:.2}%",
                record.left_identifier(),
                record.right_identifier(),
                record.similarity_percentage
            );
        }
    }

    let stats = &report.stats;
    println!(
        "{} groups, {} files ({} unavailable), {} pairs compared, {} parse failures, {} ms",
        stats.groups,
        stats.files,
        stats.files_unavailable,
        stats.pairs_compared,
        stats.parse_failures,
        stats.execution_time_ms
    );
}

fn run(cli: Cli) -> Result<()> {
    let (config, store, scope) = prepare(&cli)?;

    let service = AuditService::new(config);
    let report = service
        .run_on(&store, scope)
        .context("failed to load submissions")?;

    if let Some(path) = &cli.output {
        JsonReportSink::create(path)
            .and_then(|mut sink| sink.write_report(&report))
            .with_context(|| format!("cannot write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
        return Ok(());
    }

    match cli.format {
        OutputFormat::Text => print_text(&report, scope),
        OutputFormat::Json => {
            let mut sink = JsonReportSink::new(std::io::stdout().lock());
            sink.write_report(&report)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
