use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::HotspotError;
use crate::filters::PathFilter;
use crate::sources::complexity::Strategy;
use crate::types::{OutputFormat, Sort};

/// Resolved run configuration: CLI flags merged over the optional YAML
/// config file, with CLI taking precedence. This is what the pipeline
/// consumes; the raw string-typed layers never leave this module.
#[derive(Debug)]
pub struct Options {
    /// Root directory for resolving relative file paths.
    pub directory: PathBuf,
    pub since: Option<String>,
    pub until: Option<String>,
    /// Glob include/exclude patterns (`!`-prefixed = exclude).
    pub filter: Vec<String>,
    /// `None` means insertion order, which is also the fallback for an
    /// unrecognized sort key.
    pub sort: Option<Sort>,
    pub limit: Option<usize>,
    pub format: OutputFormat,
    /// LCOV tracefile location; without it every path's coverage is 0.
    pub coverage_report: Option<PathBuf>,
    pub complexity: Strategy,
}

/// All settings that can be placed in a config file. Every field is
/// optional; omitted fields fall back to CLI values or built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub since: Option<String>,
    pub until: Option<String>,
    pub filter: Option<Vec<String>>,
    pub sort: Option<String>,
    pub limit: Option<usize>,
    pub format: Option<String>,
    pub coverage_report: Option<PathBuf>,
    pub complexity: Option<String>,
}

impl FileConfig {
    /// Validates semantic constraints that serde cannot enforce, with
    /// messages naming the offending value and the accepted ones.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(patterns) = &self.filter {
            PathFilter::compile(patterns)?;
        }

        if let Some(strategy) = &self.complexity {
            if Strategy::parse(strategy).is_none() {
                return Err(format!(
                    "Invalid 'complexity' value: \"{strategy}\". Expected one of: \"sloc\", \"cyclomatic\""
                ));
            }
        }

        Ok(())
    }
}

/// Reads, parses, and validates a YAML config file from `path`.
pub fn load_config(path: &Path) -> Result<FileConfig, HotspotError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        HotspotError::Config(format!("cannot read config file '{}': {e}", path.display()))
    })?;
    let cfg: FileConfig = serde_yaml::from_str(&content).map_err(|e| {
        HotspotError::Config(format!("invalid config file '{}': {e}", path.display()))
    })?;
    cfg.validate()
        .map_err(|e| HotspotError::Config(format!("config file '{}': {e}", path.display())))?;
    Ok(cfg)
}

/// Lenient sort parsing: an unrecognized key keeps insertion order with a
/// warning, never a failure.
pub fn resolve_sort(raw: Option<&str>) -> Option<Sort> {
    let raw = raw?;
    let sort = Sort::parse(raw);
    if sort.is_none() {
        log::warn!("unrecognized sort key \"{raw}\"; keeping insertion order");
    }
    sort
}

/// Lenient format parsing: anything unrecognized falls back to the table.
pub fn resolve_format(raw: Option<&str>) -> OutputFormat {
    match raw {
        None => OutputFormat::default(),
        Some(raw) => OutputFormat::parse(raw).unwrap_or_else(|| {
            log::warn!("unrecognized format \"{raw}\"; falling back to table");
            OutputFormat::default()
        }),
    }
}

/// Complexity strategy is strict: silently switching measurement semantics
/// would change every score in the report.
pub fn resolve_strategy(raw: Option<&str>) -> Result<Strategy, HotspotError> {
    match raw {
        None => Ok(Strategy::default()),
        Some(raw) => Strategy::parse(raw).ok_or_else(|| {
            HotspotError::Config(format!(
                "invalid complexity strategy \"{raw}\" (expected \"sloc\" or \"cyclomatic\")"
            ))
        }),
    }
}

/// Annotated YAML template, printed by `--generate-config`.
pub static TEMPLATE: &str = r#"# code-hotspot configuration file
# Generated by: code-hotspot --generate-config
#
# All settings are optional. Omit any field to use the built-in default.
# CLI flags always take precedence over values in this file.
# Save this file next to your repository, then run:
#
#   code-hotspot --config code-hotspot.yml [directory]

# Analyze commits since / until this date (any git date format).
# since: "1 year ago"
# until: "2025-01-01"

# Glob patterns restricting which paths enter the report.
# Prefix a pattern with ! to exclude matches instead.
# filter:
#   - "src/**"
#   - "!test/**"

# Sort key: score, ratio, churn, complexity, file.
# Omit to keep files in the order git log first mentions them.
# sort: "score"

# Keep only the first N results (applied after sorting).
# limit: 20

# Output format: table, json, csv
# format: "table"

# LCOV tracefile used for the coverage column.
# coverage_report: "coverage/lcov.info"

# Complexity measurement: sloc (non-blank lines) or cyclomatic.
# complexity: "sloc"
"#;

// ─── Tests ────────────────────────────────────────────────────────────────────
