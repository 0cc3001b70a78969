use std::path::Path;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

use crate::types::MetricMap;

/// How per-file complexity is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Count of non-blank source lines. Works for any text file.
    #[default]
    Sloc,
    /// 1 + count of branch points (decision keywords and short-circuit
    /// operators). A rough cyclomatic estimate, language-agnostic.
    Cyclomatic,
}

impl Strategy {
    pub fn parse(s: &str) -> Option<Strategy> {
        match s {
            "sloc" => Some(Strategy::Sloc),
            "cyclomatic" => Some(Strategy::Cyclomatic),
            _ => None,
        }
    }
}

/// Computes complexity for each path, relative to `root`. Unreadable or
/// non-text files produce no entry; absent keys are resolved downstream
/// by the engine's default policy, never treated as fatal.
pub fn compute(paths: &[String], root: &Path, strategy: Strategy) -> MetricMap {
    let entries: Vec<(String, u64)> = paths
        .par_iter()
        .filter_map(|path| {
            let source = std::fs::read_to_string(root.join(path)).ok()?;
            Some((path.clone(), measure(&source, strategy)))
        })
        .collect();

    log::debug!("complexity: {} of {} paths measured", entries.len(), paths.len());
    entries.into_iter().collect()
}

fn measure(source: &str, strategy: Strategy) -> u64 {
    match strategy {
        Strategy::Sloc => source.lines().filter(|l| !l.trim().is_empty()).count() as u64,
        Strategy::Cyclomatic => 1 + BRANCH_RE.find_iter(source).count() as u64,
    }
}

static BRANCH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(if|elif|for|while|case|when|catch)\b|&&|\|\|").unwrap());

// ─── Tests ────────────────────────────────────────────────────────────────────
