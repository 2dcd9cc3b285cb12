//! Axum route handlers for the Resume Generator.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume_generator::ResumeParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume: String,
}

/// POST /api/v1/resume
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeParams>,
) -> Result<Json<ResumeResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }
    info!("Received resume generation request");

    let resume = state.resume_generator.generate(&request).await?;
    Ok(Json(ResumeResponse { resume }))
}
