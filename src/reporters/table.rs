use comfy_table::{presets::UTF8_FULL, Table};

use crate::types::StatsCollection;

/// Human-readable grid with the same column order and header labels as the
/// CSV output.
pub fn render(stats: &StatsCollection) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["file", "complexity", "churn", "frequency", "coverage", "score"]);

    for r in stats {
        table.add_row(vec![
            r.path.clone(),
            r.complexity.to_string(),
            r.churn.to_string(),
            r.frequency.to_string(),
            r.coverage.to_string(),
            r.score.to_string(),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileStats;

    #[test]
    fn test_header_labels_in_column_order() {
        let stats = StatsCollection::from_records(Vec::new());
        let out = render(&stats);
        let header = out.lines().nth(1).unwrap_or_default();
        let positions: Vec<usize> = ["file", "complexity", "churn", "frequency", "coverage", "score"]
            .iter()
            .map(|label| header.find(label).unwrap_or_else(|| panic!("missing column '{label}'")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "columns out of order: {header}");
    }

    #[test]
    fn test_rows_contain_all_values() {
        let stats = StatsCollection::from_records(vec![
            FileStats::new("lib/response.js".to_string(), 340, 516, 3.35, 80),
        ]);
        let out = render(&stats);
        for needle in ["lib/response.js", "516", "340", "3.35", "80", "175440"] {
            assert!(out.contains(needle), "table should contain '{needle}':\n{out}");
        }
    }

    #[test]
    fn test_integral_frequency_renders_without_decimals() {
        let stats = StatsCollection::from_records(vec![
            FileStats::new("x.js".to_string(), 2, 5, 0.0, 0),
        ]);
        assert!(render(&stats).contains(" 0 "), "frequency 0.0 must render as 0");
    }
}
