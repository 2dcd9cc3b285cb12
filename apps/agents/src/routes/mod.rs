pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::chat::handlers as chat;
use crate::interviewer::handlers as interviewer;
use crate::resume_analyzer::handlers as analyzer;
use crate::resume_generator::handlers as generator;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat surface shared by every agent
        .route("/api/v1/agents/:agent/chat", post(chat::handle_chat))
        .route("/api/v1/agents/:agent/ack", post(chat::handle_acknowledgement))
        // Resume generator
        .route("/api/v1/resume", post(generator::handle_generate_resume))
        // Resume analyzer
        .route("/api/v1/analyze-resume", post(analyzer::handle_analyze_resume))
        .route(
            "/api/v1/analyze-resume-pdf",
            post(analyzer::handle_analyze_resume_pdf),
        )
        .route(
            "/api/v1/upload-resume",
            post(analyzer::handle_upload_resume)
                .layer(DefaultBodyLimit::max(analyzer::MAX_UPLOAD_BYTES)),
        )
        // Learning roadmap
        .route("/api/v1/roadmap", post(roadmap::handle_generate_roadmap))
        // Mock interviewer
        .route(
            "/api/v1/interviewer/questions",
            post(interviewer::handle_questions),
        )
        .route("/api/v1/interviewer/analyze", post(interviewer::handle_analyze))
        .route(
            "/api/v1/interviewer/feedback",
            post(interviewer::handle_feedback),
        )
        .with_state(state)
}
