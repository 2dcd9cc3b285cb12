use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::resume_analyzer::documents::{decode_base64_pdf, extract_pdf_text_blocking};
use crate::resume_analyzer::models::{AnalysisResult, CandidateProfile, ResumeAnalysisParams};
use crate::state::AppState;

/// Upload size cap for `/api/v1/upload-resume`.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const UPLOAD_FIELD: &str = "resume";
const PDF_MIME: &str = "application/pdf";
const WORD_MIMES: [&str; 2] = [
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
    pub analysis: CandidateProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfUploadRequest {
    pub pdf_base64: String,
}

/// POST /api/v1/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeAnalysisParams>,
) -> Result<Json<AnalysisResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText cannot be empty".to_string()));
    }
    info!(
        "Received resume analysis request with text length: {}",
        req.resume_text.len()
    );

    let analysis = state.resume_analyzer.analyze(&req).await?;
    Ok(Json(AnalysisResponse { analysis }))
}

/// POST /api/v1/analyze-resume-pdf
pub async fn handle_analyze_resume_pdf(
    State(state): State<AppState>,
    Json(req): Json<PdfUploadRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    info!("Received PDF resume analysis request");
    let pdf = decode_base64_pdf(&req.pdf_base64)?;
    let analysis = state.resume_analyzer.analyze_pdf(pdf).await?;
    Ok(Json(AnalysisResponse { analysis }))
}

/// POST /api/v1/upload-resume (multipart, field `resume`)
///
/// Extracts the resume text and a candidate profile for seeding an interview.
/// Only PDF is read; Word documents get a 415 and any other type a 400.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        match field.content_type() {
            Some(PDF_MIME) => {}
            Some(mime) if WORD_MIMES.contains(&mime) => {
                return Err(AppError::UnsupportedMediaType(
                    "Word documents are not supported; upload the resume as a PDF".to_string(),
                ));
            }
            _ => return Err(AppError::Validation("Unsupported file format".to_string())),
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let pdf = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        info!("Received resume upload {file_name} ({} bytes)", pdf.len());

        let text = extract_pdf_text_blocking(pdf.to_vec()).await?;
        let analysis = state.resume_analyzer.extract_profile(&text).await?;
        return Ok(Json(UploadResponse { text, analysis }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
