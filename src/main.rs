mod config;
mod error;
mod filters;
mod git;
mod instrument;
mod reporters;
mod sources;
mod stats;
mod types;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use config::Options;
use error::HotspotError;
use filters::PathFilter;
use instrument::{fmt_dur, timed};
use types::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "code-hotspot",
    about = "🔥 Rank files by churn × complexity to surface maintenance hotspots",
    version,
    long_about = "Combines four per-file signals from your repository (churn, \
                  complexity, time-decayed update frequency, and test \
                  coverage) into one ranked, filterable report of the files \
                  riskiest to maintain."
)]
struct Args {
    /// Root directory of the repository to analyze.
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Only count history since this date, e.g. "6 months ago", "2024-01-01"
    #[arg(long)]
    since: Option<String>,

    /// Only count history up to this date
    #[arg(long)]
    until: Option<String>,

    /// Glob pattern restricting the report; prefix with ! to exclude (repeatable)
    #[arg(long = "filter", value_name = "GLOB")]
    filter: Vec<String>,

    /// Sort key: score | ratio | churn | complexity | file
    #[arg(long)]
    sort: Option<String>,

    /// Keep only the first N results (applied after sorting)
    #[arg(long)]
    limit: Option<usize>,

    /// Output format: table | json | csv
    #[arg(long)]
    format: Option<String>,

    /// LCOV tracefile for the coverage column
    #[arg(long, value_name = "PATH")]
    coverage_report: Option<PathBuf>,

    /// Complexity measurement: sloc | cyclomatic
    #[arg(long, value_name = "STRATEGY")]
    complexity: Option<String>,

    /// YAML config file (CLI flags take precedence)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print an annotated config template and exit
    #[arg(long)]
    generate_config: bool,

    /// Suppress progress output on stderr
    #[arg(long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", config::TEMPLATE);
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

// ─── Analysis pipeline ─────────────────────────────────────────────────────────

fn run(args: &Args) -> Result<(), HotspotError> {
    let options = resolve_options(args)?;

    if !options.directory.exists() {
        return Err(HotspotError::Config(format!(
            "directory does not exist: {}",
            options.directory.display()
        )));
    }

    let show_progress = options.format == OutputFormat::Table && !args.quiet;
    let progress = Progress::new(show_progress);
    let total_start = Instant::now();

    // Churn is queried first: the key set of its map defines the universe of
    // paths for every other source. A file with zero recorded churn is
    // invisible to the rest of the pipeline.
    progress.step("[1/3] Reading git history...");
    let commits = timed("git log", || {
        git::log_parser::parse_log(
            &options.directory,
            options.since.as_deref(),
            options.until.as_deref(),
        )
    })?;
    if commits.is_empty() {
        return Err(HotspotError::EmptyHistory {
            directory: options.directory.clone(),
            since: options.since.clone(),
        });
    }

    let filter = PathFilter::compile(&options.filter).map_err(HotspotError::Config)?;
    let churn = timed("churn", || sources::churn::compute(&commits, &filter));
    progress.done(format!(
        "  ✓ [1/3] {} commits, {} files in scope",
        commits.len(),
        churn.paths.len()
    ));

    // The remaining sources are independent once the universe is fixed.
    progress.step("[2/3] Computing complexity, frequency and coverage...");
    let now = chrono::Utc::now().timestamp();
    let (complexity, (frequency, coverage)) = rayon::join(
        || {
            timed("complexity", || {
                sources::complexity::compute(&churn.paths, &options.directory, options.complexity)
            })
        },
        || {
            rayon::join(
                || timed("frequency", || sources::frequency::compute(&churn.paths, &commits, now)),
                || {
                    timed("coverage", || {
                        sources::coverage::compute(&churn.paths, options.coverage_report.as_deref())
                    })
                },
            )
        },
    );
    progress.done("  ✓ [2/3] Metric sources computed".to_string());

    progress.step("[3/3] Scoring...");
    let collection = timed("aggregate", || {
        stats::aggregate(
            &churn.paths,
            &churn.counts,
            &complexity,
            &frequency,
            &coverage,
            options.sort,
            options.limit,
        )
    });
    progress.done(format!("  ✓ [3/3] {} records scored", collection.len()));
    progress.finish();

    if !args.quiet {
        eprintln!(
            "✔ {} commits, {} files — ⏱ {}",
            commits.len(),
            churn.paths.len(),
            fmt_dur(total_start.elapsed())
        );
    }

    let output = reporters::render(&collection, options.format)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

// ─── Configuration merge ───────────────────────────────────────────────────────

/// CLI flags win over the config file; the config file wins over built-in
/// defaults.
fn resolve_options(args: &Args) -> Result<Options, HotspotError> {
    let file = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::FileConfig::default(),
    };

    let directory = args
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let sort_raw = args.sort.clone().or(file.sort);
    let format_raw = args.format.clone().or(file.format);
    let strategy_raw = args.complexity.clone().or(file.complexity);

    Ok(Options {
        directory,
        since: args.since.clone().or(file.since),
        until: args.until.clone().or(file.until),
        filter: if args.filter.is_empty() {
            file.filter.unwrap_or_default()
        } else {
            args.filter.clone()
        },
        sort: config::resolve_sort(sort_raw.as_deref()),
        limit: args.limit.or(file.limit),
        format: config::resolve_format(format_raw.as_deref()),
        coverage_report: args.coverage_report.clone().or(file.coverage_report),
        complexity: config::resolve_strategy(strategy_raw.as_deref())?,
    })
}

// ─── Progress spinner ──────────────────────────────────────────────────────────

/// Thin wrapper so the pipeline reads the same whether or not a terminal
/// spinner is wanted (json/csv output and --quiet disable it).
struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    fn new(enabled: bool) -> Self {
        if !enabled {
            return Progress { bar: None };
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        pb.enable_steady_tick(Duration::from_millis(80));
        Progress { bar: Some(pb) }
    }

    fn step(&self, msg: &str) {
        if let Some(pb) = &self.bar {
            pb.set_message(msg.to_string());
        }
    }

    fn done(&self, msg: String) {
        if let Some(pb) = &self.bar {
            pb.println(msg);
        }
    }

    fn finish(&self) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
