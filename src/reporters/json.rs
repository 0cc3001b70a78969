use crate::error::HotspotError;
use crate::types::StatsCollection;

/// A plain JSON array of records, in input order.
pub fn render(stats: &StatsCollection) -> Result<String, HotspotError> {
    Ok(serde_json::to_string_pretty(stats.records())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileStats;

    #[test]
    fn test_renders_array_of_records_in_order() {
        let stats = StatsCollection::from_records(vec![
            FileStats::new("b.js".to_string(), 2, 3, 0.5, 10),
            FileStats::new("a.js".to_string(), 1, 1, 0.0, 0),
        ]);
        let json = render(&stats).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = parsed.as_array().expect("output must be a plain array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["path"], "b.js");
        assert_eq!(array[1]["path"], "a.js");
    }

    #[test]
    fn test_every_field_is_reproduced() {
        let stats = StatsCollection::from_records(vec![
            FileStats::new("x.js".to_string(), 2, 5, 3.35, 80),
        ]);
        let parsed: serde_json::Value = serde_json::from_str(&render(&stats).unwrap()).unwrap();
        let record = &parsed[0];
        assert_eq!(record["churn"], 2);
        assert_eq!(record["complexity"], 5);
        assert_eq!(record["frequency"], 3.35);
        assert_eq!(record["coverage"], 80);
        assert_eq!(record["score"], 10);
    }

    #[test]
    fn test_empty_collection_is_an_empty_array() {
        let stats = StatsCollection::from_records(Vec::new());
        let parsed: serde_json::Value = serde_json::from_str(&render(&stats).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }
}
