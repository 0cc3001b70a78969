mod csv;
mod json;
mod table;

use crate::error::HotspotError;
use crate::types::{OutputFormat, StatsCollection};

/// Renders the final collection in the requested format. Column order is
/// identical everywhere: file, complexity, churn, frequency, coverage, score.
pub fn render(stats: &StatsCollection, format: OutputFormat) -> Result<String, HotspotError> {
    match format {
        OutputFormat::Table => Ok(table::render(stats)),
        OutputFormat::Json => json::render(stats),
        OutputFormat::Csv => Ok(csv::render(stats)),
    }
}
