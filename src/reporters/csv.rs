use crate::types::StatsCollection;

const HEADER: &str = "file,complexity,churn,frequency,coverage,score";

pub fn render(stats: &StatsCollection) -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for r in stats {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.path, r.complexity, r.churn, r.frequency, r.coverage, r.score
        ));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileStats;

    #[test]
    fn test_single_record_rendering() {
        let stats = StatsCollection::from_records(vec![
            FileStats::new("x.js".to_string(), 2, 5, 0.0, 0),
        ]);
        assert_eq!(render(&stats), "file,complexity,churn,frequency,coverage,score\nx.js,5,2,0,0,10\n");
    }

    #[test]
    fn test_rows_follow_input_order() {
        let stats = StatsCollection::from_records(vec![
            FileStats::new("b.js".to_string(), 1, 2, 0.0, 0),
            FileStats::new("a.js".to_string(), 3, 4, 0.0, 0),
        ]);
        let rendered = render(&stats);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "b.js,2,1,0,0,2");
        assert_eq!(lines[2], "a.js,4,3,0,0,12");
    }

    #[test]
    fn test_fractional_frequency_keeps_precision() {
        let stats = StatsCollection::from_records(vec![
            FileStats::new("x.js".to_string(), 1, 1, 3.35, 50),
        ]);
        assert!(render(&stats).contains("x.js,1,1,3.35,50,1"));
    }

    #[test]
    fn test_empty_collection_renders_header_only() {
        let stats = StatsCollection::from_records(Vec::new());
        assert_eq!(render(&stats), "file,complexity,churn,frequency,coverage,score\n");
    }
}
