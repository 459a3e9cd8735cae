//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{extract_text, FileKind};
use crate::screening::keywords::{extract_keywords, join_keywords};
use crate::screening::pipeline::{screen_batch, ResumeDocument, ScreeningOutcome, DEFAULT_TOP_N};
use crate::screening::report::{build_match_report, MatchReport};
use crate::screening::tfidf::match_score;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub screening_id: Uuid,
    #[serde(flatten)]
    pub outcome: ScreeningOutcome,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ScorePairRequest {
    pub job_text: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ScorePairResponse {
    pub score: f64,
    pub report: MatchReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screenings
///
/// Multipart form: one `job_description` text field, an optional `top_n`
/// field (default: min(5, file count)), and 1–10 `resume` file parts (PDF
/// or DOCX). A résumé
/// that fails to parse is screened as empty text; an unsupported extension
/// rejects the request.
pub async fn handle_create_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut job_description: Option<String> = None;
    let mut top_n: Option<usize> = None;
    let mut resumes: Vec<ResumeDocument> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                job_description = Some(field.text().await.map_err(bad_multipart)?);
            }
            "top_n" => {
                let raw = field.text().await.map_err(bad_multipart)?;
                let parsed = raw.trim().parse::<usize>().map_err(|_| {
                    AppError::Validation(format!("top_n must be an integer, got '{raw}'"))
                })?;
                top_n = Some(parsed);
            }
            "resume" => {
                let file_name = field
                    .file_name()
                    .map(str::to_owned)
                    .ok_or_else(|| {
                        AppError::Validation("resume part is missing a file name".to_string())
                    })?;
                let kind = FileKind::from_file_name(&file_name).map_err(|_| {
                    AppError::UnsupportedFile(format!("'{file_name}' is not a PDF or DOCX file"))
                })?;
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                let text = match extract_text(kind, &bytes) {
                    Ok(text) => text,
                    Err(err) => {
                        // Corrupt file: screen it as empty text instead of
                        // failing the rest of the batch.
                        warn!("Extraction failed for '{file_name}': {err}");
                        String::new()
                    }
                };
                resumes.push(ResumeDocument { file_name, text });
            }
            other => {
                return Err(AppError::Validation(format!("Unexpected field '{other}'")));
            }
        }
    }

    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description field is required".to_string()))?;

    // An explicit top_n is validated strictly; the default clamps to the
    // number of uploaded files.
    let top_n = top_n.unwrap_or_else(|| DEFAULT_TOP_N.min(resumes.len()));

    let outcome = screen_batch(&job_description, &resumes, top_n, &state.lexicon)?;

    Ok(Json(ScreeningResponse {
        screening_id: Uuid::new_v4(),
        outcome,
    }))
}

/// POST /api/v1/screenings/keywords
///
/// Extraction preview: returns the sorted keyword set of a piece of text.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let mut keywords: Vec<String> = extract_keywords(&request.text, &state.lexicon)
        .into_iter()
        .collect();
    keywords.sort_unstable();
    let count = keywords.len();
    Ok(Json(KeywordsResponse { keywords, count }))
}

/// POST /api/v1/screenings/score
///
/// Scores one raw-text (job, résumé) pair without a file upload.
pub async fn handle_score_pair(
    State(state): State<AppState>,
    Json(request): Json<ScorePairRequest>,
) -> Result<Json<ScorePairResponse>, AppError> {
    if request.job_text.trim().is_empty() {
        return Err(AppError::Validation("job_text cannot be empty".to_string()));
    }

    let job_keywords = extract_keywords(&request.job_text, &state.lexicon);
    let resume_keywords = extract_keywords(&request.resume_text, &state.lexicon);
    let score = match_score(&join_keywords(&job_keywords), &join_keywords(&resume_keywords));
    let report = build_match_report(&job_keywords, &resume_keywords);

    Ok(Json(ScorePairResponse { score, report }))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart request: {err}"))
}
