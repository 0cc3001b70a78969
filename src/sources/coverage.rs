use std::collections::HashMap;
use std::path::Path;

use lcov::{Reader, Record};

use crate::types::MetricMap;

/// Line-coverage percentage per path, read from an LCOV tracefile.
///
/// A missing or malformed report is not fatal: it degrades to "no coverage
/// data for any path" with a warning, and the engine's default policy fills
/// in 0. Paths with no matching `SF:` entry are simply absent.
pub fn compute(paths: &[String], report: Option<&Path>) -> MetricMap {
    let Some(report) = report else {
        log::debug!("coverage: no report configured, all paths default to 0");
        return MetricMap::new();
    };

    let totals = match parse_report(report) {
        Ok(totals) => totals,
        Err(e) => {
            log::warn!(
                "coverage report '{}' unusable ({e}); coverage defaults to 0",
                report.display()
            );
            return MetricMap::new();
        }
    };

    paths
        .iter()
        .filter_map(|path| {
            let &(found, hit) = totals.get(path.as_str())?;
            if found == 0 {
                return None;
            }
            let percent = (hit as f64 / found as f64 * 100.0).round() as u64;
            Some((path.clone(), percent))
        })
        .collect()
}

/// Reads the tracefile into file → (lines found, lines hit), keyed by the
/// normalized `SF:` path so it can be matched against universe keys.
fn parse_report(path: &Path) -> Result<HashMap<String, (u64, u64)>, String> {
    let reader = Reader::open_file(path).map_err(|e| e.to_string())?;

    let mut totals: HashMap<String, (u64, u64)> = HashMap::new();
    let mut current: Option<String> = None;

    for record in reader {
        let record = record.map_err(|e| e.to_string())?;
        match record {
            Record::SourceFile { path } => {
                current = Some(normalize_path(&path.to_string_lossy()));
            }
            Record::LinesFound { found } => {
                if let Some(file) = &current {
                    totals.entry(file.clone()).or_default().0 += found as u64;
                }
            }
            Record::LinesHit { hit } => {
                if let Some(file) = &current {
                    totals.entry(file.clone()).or_default().1 += hit as u64;
                }
            }
            Record::EndOfRecord => {
                current = None;
            }
            _ => {}
        }
    }

    Ok(totals)
}

/// Both sides of the path comparison must agree on separators, so SF paths
/// get the same canonical forward-slash form as universe keys.
fn normalize_path(raw: &str) -> String {
    let normalized = raw.replace('\\', "/");
    normalized.strip_prefix("./").unwrap_or(&normalized).to_string()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
