use glob::Pattern;

/// Compiled include/exclude patterns. Patterns prefixed with `!` exclude;
/// the rest include. A path passes when it matches at least one include
/// pattern (or none were given) and matches no exclude pattern.
/// Exclusions always win.
#[derive(Debug, Default)]
pub struct PathFilter {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
}

impl PathFilter {
    /// Compiles the raw pattern list. Invalid patterns are rejected with a
    /// message naming the offending pattern.
    pub fn compile(patterns: &[String]) -> Result<PathFilter, String> {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for raw in patterns {
            let (target, pattern) = match raw.strip_prefix('!') {
                Some(rest) => (&mut excludes, rest),
                None => (&mut includes, raw.as_str()),
            };
            let compiled = Pattern::new(pattern)
                .map_err(|e| format!("invalid filter pattern \"{raw}\": {e}"))?;
            target.push(compiled);
        }

        Ok(PathFilter { includes, excludes })
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.excludes.iter().any(|p| p.matches(path)) {
            return false;
        }
        self.includes.is_empty() || self.includes.iter().any(|p| p.matches(path))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
