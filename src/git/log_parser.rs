use std::path::Path;
use std::process::Command;

use crate::error::HotspotError;
use crate::types::Commit;

/// Runs a single `git log --name-only` and returns structured Commit
/// objects with timestamps and touched files in one pass. Churn and
/// update-frequency are both derived from this output, so the repository
/// is interrogated exactly once per run.
pub fn parse_log(
    cwd: &Path,
    since: Option<&str>,
    until: Option<&str>,
) -> Result<Vec<Commit>, HotspotError> {
    let mut args: Vec<String> = vec![
        "log".into(),
        "--format=COMMIT|%H|%ad".into(),
        "--date=unix".into(),
        "--name-only".into(),
    ];

    if let Some(s) = since {
        args.push(format!("--since={s}"));
    }
    if let Some(u) = until {
        args.push(format!("--until={u}"));
    }

    let output = Command::new("git")
        .args(&args)
        .current_dir(cwd)
        .output()
        .map_err(|source| HotspotError::GitUnavailable { source })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(HotspotError::Git { stderr });
    }

    let text = String::from_utf8_lossy(&output.stdout);
    Ok(parse_commit_output(&text))
}

fn parse_commit_output(output: &str) -> Vec<Commit> {
    let mut commits: Vec<Commit> = Vec::new();
    let mut current: Option<Commit> = None;

    for line in output.lines() {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("COMMIT|") {
            if let Some(c) = current.take() {
                commits.push(c);
            }
            // Format: hash|timestamp
            let parts: Vec<&str> = rest.splitn(2, '|').collect();
            if parts.len() == 2 {
                current = Some(Commit {
                    hash: parts[0].to_string(),
                    timestamp: parts[1].parse().unwrap_or(0),
                    files: Vec::new(),
                });
            }
        } else if trimmed.is_empty() {
            // blank lines between commits — ignored
        } else if let Some(filename) = normalize_filename(trimmed) {
            if let Some(ref mut c) = current {
                c.files.push(filename);
            }
        }
    }

    if let Some(c) = current {
        commits.push(c);
    }

    commits
}

/// Normalizes git rename notations and path separators so every file name
/// is a forward-slash relative path usable as a merge key:
///   "src/{old => new}/file.js" → "src/new/file.js"
///   "old-name => new-name"     → "new-name"
///   "src\\app.js"              → "src/app.js"
fn normalize_filename(raw: &str) -> Option<String> {
    let raw = raw.replace('\\', "/");
    if raw.contains('{') && raw.contains("=>") {
        let re = once_cell::sync::Lazy::force(&RENAME_RE);
        let result = re.replace(&raw, "$1").replace("//", "/");
        return if result.contains('{') { None } else { Some(result.trim().to_string()) };
    }
    if raw.contains(" => ") {
        return raw.split(" => ").last().map(|s| s.trim().to_string());
    }
    let t = raw.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}

static RENAME_RE: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"\{[^}]+ => ([^}]+)\}").unwrap());

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
COMMIT|a1b2c3|1700000200
lib/response.js
lib/router/index.js

COMMIT|d4e5f6|1700000100
lib/response.js

COMMIT|090807|1700000000
.travis.yml
";

    #[test]
    fn test_parses_commits_with_timestamps_and_files() {
        let commits = parse_commit_output(SAMPLE);
        assert_eq!(commits.len(), 3);
        assert_eq!(commits[0].hash, "a1b2c3");
        assert_eq!(commits[0].timestamp, 1_700_000_200);
        assert_eq!(commits[0].files, vec!["lib/response.js", "lib/router/index.js"]);
        assert_eq!(commits[2].files, vec![".travis.yml"]);
    }

    #[test]
    fn test_preserves_log_order_newest_first() {
        let commits = parse_commit_output(SAMPLE);
        assert!(commits[0].timestamp > commits[2].timestamp,
            "git log emits newest commits first; parse order must match");
    }

    #[test]
    fn test_empty_output_yields_no_commits() {
        assert!(parse_commit_output("").is_empty());
    }

    #[test]
    fn test_normalize_brace_rename() {
        assert_eq!(
            normalize_filename("src/{old => new}/file.js"),
            Some("src/new/file.js".to_string())
        );
    }

    #[test]
    fn test_normalize_plain_rename() {
        assert_eq!(normalize_filename("old-name.js => new-name.js"), Some("new-name.js".to_string()));
    }

    #[test]
    fn test_normalize_backslash_separators() {
        assert_eq!(normalize_filename("src\\lib\\app.js"), Some("src/lib/app.js".to_string()));
    }

    #[test]
    fn test_malformed_timestamp_defaults_to_zero() {
        let commits = parse_commit_output("COMMIT|abc|not-a-number\nfile.rs\n");
        assert_eq!(commits[0].timestamp, 0);
    }
}
