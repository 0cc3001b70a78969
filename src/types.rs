use serde::Serialize;
use std::collections::HashMap;

// ─── Core Git Data ────────────────────────────────────────────────────────────

/// One commit as parsed from `git log`, reduced to what the metric
/// sources consume.
#[derive(Debug, Clone)]
pub struct Commit {
    #[allow(dead_code)]
    pub hash: String,
    pub timestamp: i64,
    pub files: Vec<String>,
}

// ─── Metric Maps ──────────────────────────────────────────────────────────────

/// Path → integer metric (churn, complexity, coverage percentage).
/// Keys are always forward-slash relative paths; a source may omit a path
/// it has no data for.
pub type MetricMap = HashMap<String, u64>;

/// Path → update-frequency score.
pub type FrequencyMap = HashMap<String, f64>;

// ─── Statistics ───────────────────────────────────────────────────────────────

/// Per-file statistics record. Immutable once constructed; `score` is
/// derived in the constructor and never settable independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileStats {
    pub path: String,
    pub churn: u64,
    pub complexity: u64,
    pub frequency: f64,
    pub coverage: u64,
    pub score: u64,
}

impl FileStats {
    /// `score = churn * complexity`. Frequency and coverage are reported
    /// alongside but intentionally not part of the composite score.
    pub fn new(path: String, churn: u64, complexity: u64, frequency: f64, coverage: u64) -> Self {
        FileStats {
            path,
            churn,
            complexity,
            frequency,
            coverage,
            score: churn * complexity,
        }
    }
}

/// The ordered, path-addressable result set. Iteration order is the
/// post-sort, post-limit order, never arbitrary map iteration order.
#[derive(Debug, Clone, Default)]
pub struct StatsCollection {
    records: Vec<FileStats>,
    index: HashMap<String, usize>,
}

impl StatsCollection {
    pub fn from_records(records: Vec<FileStats>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.path.clone(), i))
            .collect();
        StatsCollection { records, index }
    }

    pub fn get(&self, path: &str) -> Option<&FileStats> {
        self.index.get(path).map(|&i| &self.records[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileStats> {
        self.records.iter()
    }

    pub fn records(&self) -> &[FileStats] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a StatsCollection {
    type Item = &'a FileStats;
    type IntoIter = std::slice::Iter<'a, FileStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ─── Selectors ────────────────────────────────────────────────────────────────

/// Sort criterion for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// churn × complexity, descending. `ratio` is accepted as an alias.
    Score,
    Churn,
    Complexity,
    /// Path, ascending lexical order.
    File,
}

impl Sort {
    /// Lenient parse: an unrecognized key yields `None`, which means
    /// "keep insertion order" rather than an error.
    pub fn parse(s: &str) -> Option<Sort> {
        match s {
            "score" | "ratio" => Some(Sort::Score),
            "churn" => Some(Sort::Churn),
            "complexity" => Some(Sort::Complexity),
            "file" => Some(Sort::File),
            _ => None,
        }
    }
}

/// Output format for the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<OutputFormat> {
        match s {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
