use std::collections::HashMap;

use rayon::prelude::*;

use crate::types::{Commit, FrequencyMap};

/// Computes the recency-weighted activity score for every path, from the
/// modification timestamps in the shared parsed log. Per-path scoring is
/// independent and runs in parallel; each path's fold is sequential.
pub fn compute(paths: &[String], commits: &[Commit], now: i64) -> FrequencyMap {
    let mut history: HashMap<&str, Vec<i64>> = HashMap::new();
    for commit in commits {
        for file in &commit.files {
            history.entry(file.as_str()).or_default().push(commit.timestamp);
        }
    }

    paths
        .par_iter()
        .map(|path| {
            let mut timestamps = history.get(path.as_str()).cloned().unwrap_or_default();
            timestamps.sort_unstable();
            (path.clone(), score_timestamps(&timestamps, now))
        })
        .collect()
}

/// Scores one path's ascending-sorted modification timestamps.
///
/// The earliest event is the baseline and contributes 0. Every later event
/// at ordinal i contributes a logistic weight
/// `1 / (1 + e^(−12·tw·(i+1) + 12))` where `tw = (ts − base) / (now − base)`,
/// so the sigmoid saturates toward 1 once `tw·(i+1)` exceeds 1, rewarding
/// updates that are both recent and part of a longer history. The sum is
/// unbounded above and rounded to two decimals.
pub fn score_timestamps(timestamps: &[i64], now: i64) -> f64 {
    let Some(&base) = timestamps.first() else {
        return 0.0;
    };
    let span = (now - base) as f64;

    let sum: f64 = timestamps
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &ts)| {
            if span == 0.0 {
                // All events coincide with now; no meaningful recency signal.
                return 0.0;
            }
            let time_weight = (ts - base) as f64 / span;
            1.0 / (1.0 + (-12.0 * time_weight * (i as f64 + 1.0) + 12.0).exp())
        })
        .sum();

    (sum * 100.0).round() / 100.0
}

// ─── Tests ────────────────────────────────────────────────────────────────────
