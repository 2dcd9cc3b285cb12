use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::roadmap::models::{Roadmap, RoadmapParams};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: Roadmap,
}

/// POST /api/v1/roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(params): Json<RoadmapParams>,
) -> Result<Json<RoadmapResponse>, AppError> {
    if params.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let roadmap = state.roadmap.generate(&params).await?;
    Ok(Json(RoadmapResponse { roadmap }))
}
