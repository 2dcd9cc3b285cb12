use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::interviewer::models::{
    AnalysisRequest, AnalysisResponse, FeedbackRequest, FeedbackResponse, QuestionsRequest,
    QuestionsResponse,
};
use crate::interviewer::reply_to_value;
use crate::state::AppState;

/// POST /api/v1/interviewer/questions
pub async fn handle_questions(
    State(state): State<AppState>,
    Json(req): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    if req.count == 0 {
        return Err(AppError::Validation("count must be at least 1".to_string()));
    }

    let questions = state
        .interviewer
        .generate_questions(&req.profile, req.count)
        .await?;
    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/v1/interviewer/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let text = state
        .interviewer
        .analyze_response(&req.question, &req.response, &req.profile)
        .await?;
    Ok(Json(AnalysisResponse {
        analysis: reply_to_value(&text),
    }))
}

/// POST /api/v1/interviewer/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let text = state
        .interviewer
        .generate_feedback(&req.profile, &req.questions, &req.responses, &req.analyses)
        .await?;
    Ok(Json(FeedbackResponse {
        feedback: reply_to_value(&text),
    }))
}
