use crate::types::{FileStats, FrequencyMap, MetricMap, Sort, StatsCollection};

const DEFAULT_CHURN: u64 = 1;
const DEFAULT_COMPLEXITY: u64 = 1;
const DEFAULT_FREQUENCY: f64 = 0.0;
const DEFAULT_COVERAGE: u64 = 0;

/// Merges the four metric maps into the final ordered collection.
///
/// `universe` is the churn map's key set in first-seen order: a path with
/// no recorded churn never appears, and the order is what "insertion order"
/// means when no sort is requested. Pure data transformation: no I/O, no
/// errors, byte-identical output for identical inputs.
pub fn aggregate(
    universe: &[String],
    churn: &MetricMap,
    complexity: &MetricMap,
    frequency: &FrequencyMap,
    coverage: &MetricMap,
    sort: Option<Sort>,
    limit: Option<usize>,
) -> StatsCollection {
    let mut records: Vec<FileStats> = universe
        .iter()
        .map(|path| {
            // Churn and complexity default to 1 even when present as 0:
            // a zero factor would mask a file that has some activity.
            let churn_v = non_zero(churn.get(path)).unwrap_or(DEFAULT_CHURN);
            let complexity_v = non_zero(complexity.get(path)).unwrap_or(DEFAULT_COMPLEXITY);
            let frequency_v = frequency.get(path).copied().unwrap_or(DEFAULT_FREQUENCY);
            let coverage_v = coverage.get(path).copied().unwrap_or(DEFAULT_COVERAGE);
            FileStats::new(path.clone(), churn_v, complexity_v, frequency_v, coverage_v)
        })
        .collect();

    sort_records(&mut records, sort);

    if let Some(n) = limit {
        records.truncate(n);
    }

    StatsCollection::from_records(records)
}

fn non_zero(value: Option<&u64>) -> Option<u64> {
    value.copied().filter(|&v| v != 0)
}

/// Stable sort per the requested criterion; `None` keeps insertion order.
fn sort_records(records: &mut [FileStats], sort: Option<Sort>) {
    match sort {
        Some(Sort::Score) => records.sort_by(|a, b| b.score.cmp(&a.score)),
        Some(Sort::Churn) => records.sort_by(|a, b| b.churn.cmp(&a.churn)),
        Some(Sort::Complexity) => records.sort_by(|a, b| b.complexity.cmp(&a.complexity)),
        Some(Sort::File) => records.sort_by(|a, b| a.path.cmp(&b.path)),
        None => {}
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
