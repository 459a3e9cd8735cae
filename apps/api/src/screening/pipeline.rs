//! Batch screening pipeline: job description + extracted résumé texts in,
//! per-résumé scores and reports plus the ranked aggregate out.
//!
//! Pure over its inputs; extraction happens at the handler boundary, and no
//! entity here outlives the request.

use serde::Serialize;

use crate::errors::AppError;
use crate::lexicon::Lexicon;
use crate::screening::keywords::{extract_keywords, join_keywords};
use crate::screening::ranking::{rank, RankedResult, ScoreRecord};
use crate::screening::report::{build_match_report, MatchReport};
use crate::screening::tfidf::match_score;

/// Hard cap on résumés per screening request.
pub const MAX_RESUMES: usize = 10;
/// Top-N size when the client does not ask for one.
pub const DEFAULT_TOP_N: usize = 5;

/// One résumé with its text already extracted. Discarded after the request.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: String,
    pub text: String,
}

/// Score and match report for one résumé, in upload order.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenedResume {
    pub file_name: String,
    pub score: f64,
    pub report: MatchReport,
}

/// Full result of one screening run.
#[derive(Debug, Serialize)]
pub struct ScreeningOutcome {
    pub job_keywords: Vec<String>,
    pub resumes: Vec<ScreenedResume>,
    pub ranking: RankedResult,
}

/// Screens a batch of résumés against one job description.
///
/// Validates the caller-side limits up front: a non-empty job description,
/// 1..=10 résumés, and `top_n` within [1, upload count]. Each (job, résumé)
/// pair is then scored independently (IDF is relative to the pair, so no
/// vectorizer state crosses iterations) and match reports are keyed per
/// résumé.
pub fn screen_batch(
    job_description: &str,
    resumes: &[ResumeDocument],
    top_n: usize,
    lexicon: &Lexicon,
) -> Result<ScreeningOutcome, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation("job_description cannot be empty".to_string()));
    }
    if resumes.is_empty() {
        return Err(AppError::Validation("at least one resume file is required".to_string()));
    }
    if resumes.len() > MAX_RESUMES {
        return Err(AppError::Validation(format!(
            "at most {MAX_RESUMES} resumes per screening, got {}",
            resumes.len()
        )));
    }
    if top_n < 1 || top_n > MAX_RESUMES {
        return Err(AppError::Validation(format!(
            "top_n must be between 1 and {MAX_RESUMES}, got {top_n}"
        )));
    }
    if top_n > resumes.len() {
        return Err(AppError::Validation(format!(
            "top_n ({top_n}) exceeds the number of uploaded resumes ({})",
            resumes.len()
        )));
    }

    let job_keywords = extract_keywords(job_description, lexicon);
    let job_doc = join_keywords(&job_keywords);

    let mut screened = Vec::with_capacity(resumes.len());
    let mut records = Vec::with_capacity(resumes.len());
    for resume in resumes {
        let resume_keywords = extract_keywords(&resume.text, lexicon);
        let score = match_score(&job_doc, &join_keywords(&resume_keywords));
        let report = build_match_report(&job_keywords, &resume_keywords);
        records.push(ScoreRecord {
            file_name: resume.file_name.clone(),
            score,
        });
        screened.push(ScreenedResume {
            file_name: resume.file_name.clone(),
            score,
            report,
        });
    }

    let ranking = rank(records, top_n);

    let mut job_keywords: Vec<String> = job_keywords.into_iter().collect();
    job_keywords.sort_unstable();

    Ok(ScreeningOutcome {
        job_keywords,
        resumes: screened,
        ranking,
    })
}
