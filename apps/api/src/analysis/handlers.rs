//! Axum route handler for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::analysis::extractor::extract_resume_text;
use crate::analysis::models::{parse_analysis, ApiResponse};
use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESC_FIELD: &str = "job_desc";

/// The uploaded résumé file.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Raw multipart fields as received. The first occurrence of each field wins.
#[derive(Debug, Default)]
pub struct AnalyzeForm {
    pub resume: Option<ResumeUpload>,
    pub job_desc: Option<String>,
}

impl AnalyzeForm {
    /// Reads every part of the body. `resume` only counts when sent as a file
    /// part; `job_desc` only counts when sent as a plain field.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = AnalyzeForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            let file_name = field.file_name().map(str::to_owned);

            match (name.as_deref(), file_name) {
                (Some(RESUME_FIELD), Some(filename)) if form.resume.is_none() => {
                    let bytes = field.bytes().await?;
                    form.resume = Some(ResumeUpload { filename, bytes });
                }
                (Some(JOB_DESC_FIELD), None) if form.job_desc.is_none() => {
                    form.job_desc = Some(field.text().await?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Checks, in order: resume part present, job description present, filename non-empty.
    pub fn validate(self) -> Result<(ResumeUpload, String), AppError> {
        let resume = self.resume.ok_or(AppError::MissingFile)?;
        let job_desc = self.job_desc.ok_or(AppError::MissingField)?;
        if resume.filename.is_empty() {
            return Err(AppError::EmptyFilename);
        }
        Ok((resume, job_desc))
    }
}

/// POST /api/analyze
///
/// multipart: `resume` (PDF file) + `job_desc` (text).
/// Extracts the résumé text, asks the model for a fit analysis, and returns it
/// validated against the six-field schema.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse>, AppError> {
    // A body that is not multipart has no file parts at all.
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!("Not a multipart request: {rejection}");
        AppError::MissingFile
    })?;

    let (resume, job_desc) = AnalyzeForm::read(multipart).await?.validate()?;
    info!(
        filename = %resume.filename,
        bytes = resume.bytes.len(),
        job_desc_chars = job_desc.chars().count(),
        "Resume upload accepted"
    );

    let resume_text = extract_resume_text(state.extractor.clone(), resume.bytes)
        .await
        .map_err(|e| AppError::ExtractionFailed(e.to_string()))?;
    info!(resume_chars = resume_text.chars().count(), "Resume text extracted");

    let prompt = build_analysis_prompt(&job_desc, &resume_text);
    let raw = state.model.generate(&prompt).await?;

    let analysis = parse_analysis(&raw).map_err(|e| AppError::InvalidModelOutput {
        reason: e.to_string(),
        raw: raw.clone(),
    })?;
    info!(overall_score = analysis.overall_score, "Analysis complete");

    Ok(Json(ApiResponse::success(analysis)))
}
