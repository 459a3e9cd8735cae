//! Ranking and score buckets.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Scores at or above this are High.
pub const HIGH_THRESHOLD: f64 = 70.0;
/// Scores at or above this (and below `HIGH_THRESHOLD`) are Medium.
pub const MEDIUM_THRESHOLD: f64 = 40.0;

/// One résumé's identifier and match score in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub file_name: String,
    pub score: f64,
}

/// Ranked screening output: the full descending order, the top-N slice, and
/// the three disjoint score buckets partitioning the same records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub ranked: Vec<ScoreRecord>,
    pub top_n: Vec<ScoreRecord>,
    pub high: Vec<ScoreRecord>,
    pub medium: Vec<ScoreRecord>,
    pub low: Vec<ScoreRecord>,
}

/// Sorts records descending by score (stable: equal scores keep their input
/// order), takes the first `min(n, len)` as top-N, and buckets every record:
/// high ≥ 70, 40 ≤ medium < 70, low < 40. Boundary scores belong to the
/// higher bucket. Total for any `n` ≥ 0, including the empty input.
pub fn rank(records: Vec<ScoreRecord>, n: usize) -> RankedResult {
    let mut ranked = records;
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let top_n: Vec<ScoreRecord> = ranked.iter().take(n).cloned().collect();

    let mut high = Vec::new();
    let mut medium = Vec::new();
    let mut low = Vec::new();
    for record in &ranked {
        if record.score >= HIGH_THRESHOLD {
            high.push(record.clone());
        } else if record.score >= MEDIUM_THRESHOLD {
            medium.push(record.clone());
        } else {
            low.push(record.clone());
        }
    }

    RankedResult {
        ranked,
        top_n,
        high,
        medium,
        low,
    }
}
