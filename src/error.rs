use std::path::PathBuf;

/// Failures that terminate a run. Missing metric data is never an error;
/// it is resolved by the engine's default policy before it gets here.
#[derive(Debug, thiserror::Error)]
pub enum HotspotError {
    #[error("git is not available on this system: {source}")]
    GitUnavailable { source: std::io::Error },

    #[error("git log failed: {stderr}")]
    Git { stderr: String },

    #[error("no commits found in '{}'{}", .directory.display(), window_hint(.since))]
    EmptyHistory { directory: PathBuf, since: Option<String> },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn window_hint(since: &Option<String>) -> String {
    match since {
        Some(s) => format!(" since \"{s}\"; widen the time window or drop --since"),
        None => String::new(),
    }
}
