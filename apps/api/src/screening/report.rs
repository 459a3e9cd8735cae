//! Per-résumé keyword match report.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Matched and missing keywords for one (job, résumé) pair.
///
/// `matched` is the intersection of the two keyword sets, `missing` is the
/// job set minus the résumé set. Both are sorted lexicographically so
/// rendered output is reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub matched_count: usize,
}

/// Builds the report for exactly one (job, résumé) keyword-set pair.
pub fn build_match_report(
    job_keywords: &HashSet<String>,
    resume_keywords: &HashSet<String>,
) -> MatchReport {
    let mut matched: Vec<String> = job_keywords.intersection(resume_keywords).cloned().collect();
    matched.sort_unstable();
    let mut missing: Vec<String> = job_keywords.difference(resume_keywords).cloned().collect();
    missing.sort_unstable();
    MatchReport {
        matched_count: matched.len(),
        matched,
        missing,
    }
}
