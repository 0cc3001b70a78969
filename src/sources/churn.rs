use std::collections::HashMap;

use crate::filters::PathFilter;
use crate::types::{Commit, MetricMap};

/// Churn for every path that survives the filter: the number of commits
/// touching the path within the selected window. The key set of this map
/// defines the universe of paths for the whole run: a file with zero
/// recorded churn is invisible to the rest of the pipeline.
#[derive(Debug, Default)]
pub struct ChurnMetrics {
    /// Paths in first-seen order, which is the report's insertion order
    /// when no sort is requested.
    pub paths: Vec<String>,
    pub counts: MetricMap,
}

/// Folds parsed commits into per-path commit counts, preserving the order
/// in which paths first appear in the log.
pub fn compute(commits: &[Commit], filter: &PathFilter) -> ChurnMetrics {
    let mut paths: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for commit in commits {
        for file in &commit.files {
            if !filter.matches(file) {
                continue;
            }
            match counts.get_mut(file) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(file.clone(), 1);
                    paths.push(file.clone());
                }
            }
        }
    }

    log::debug!("churn: {} paths in universe", paths.len());
    ChurnMetrics { paths, counts }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(timestamp: i64, files: &[&str]) -> Commit {
        Commit {
            hash: "abc".to_string(),
            timestamp,
            files: files.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn no_filter() -> PathFilter {
        PathFilter::compile(&[]).unwrap()
    }

    #[test]
    fn test_counts_commits_per_path() {
        let commits = vec![
            make_commit(300, &["hot.rs", "cold.rs"]),
            make_commit(200, &["hot.rs"]),
            make_commit(100, &["hot.rs"]),
        ];
        let churn = compute(&commits, &no_filter());
        assert_eq!(churn.counts["hot.rs"], 3);
        assert_eq!(churn.counts["cold.rs"], 1);
    }

    #[test]
    fn test_universe_order_is_first_seen() {
        let commits = vec![
            make_commit(300, &["b.rs", "a.rs"]),
            make_commit(200, &["c.rs", "a.rs"]),
        ];
        let churn = compute(&commits, &no_filter());
        assert_eq!(churn.paths, vec!["b.rs", "a.rs", "c.rs"]);
    }

    #[test]
    fn test_filtered_paths_never_enter_universe() {
        let commits = vec![make_commit(100, &["src/app.rs", "test/app_test.rs"])];
        let filter = PathFilter::compile(&["!test/**".to_string()]).unwrap();
        let churn = compute(&commits, &filter);
        assert_eq!(churn.paths, vec!["src/app.rs"]);
        assert!(!churn.counts.contains_key("test/app_test.rs"));
    }

    #[test]
    fn test_no_commits_yields_empty_universe() {
        let churn = compute(&[], &no_filter());
        assert!(churn.paths.is_empty());
        assert!(churn.counts.is_empty());
    }
}
