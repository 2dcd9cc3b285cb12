//! Axum route handlers for the chat surface.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::{collect_text, ChatAcknowledgement, ChatMessage};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatEnvelope {
    pub sender: String,
    pub message: ChatMessage,
}

#[derive(Debug, Serialize)]
pub struct ChatExchange {
    pub acknowledgement: ChatAcknowledgement,
    pub reply: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct AckEnvelope {
    pub sender: String,
    pub acknowledgement: ChatAcknowledgement,
}

/// POST /api/v1/agents/:agent/chat
///
/// Acknowledges the incoming message and returns the agent's reply.
/// Agent failures are reported inside the reply, not as HTTP errors.
pub async fn handle_chat(
    State(state): State<AppState>,
    Path(agent_name): Path<String>,
    Json(envelope): Json<ChatEnvelope>,
) -> Result<Json<ChatExchange>, AppError> {
    let agent = state
        .chat_agent(&agent_name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown agent '{agent_name}'")))?;

    info!("[{}] Received message from {}", agent.name(), envelope.sender);
    let acknowledgement = ChatAcknowledgement::for_message(&envelope.message);

    let text = collect_text(&envelope.message, &envelope.sender);
    let reply = agent.respond(&envelope.sender, &text).await;
    info!(
        "[{}] Replying to {} ({} chars, session ended: {})",
        agent.name(),
        envelope.sender,
        reply.text().len(),
        reply.ends_session()
    );

    Ok(Json(ChatExchange {
        acknowledgement,
        reply,
    }))
}

/// POST /api/v1/agents/:agent/ack
pub async fn handle_acknowledgement(
    State(state): State<AppState>,
    Path(agent_name): Path<String>,
    Json(envelope): Json<AckEnvelope>,
) -> Result<StatusCode, AppError> {
    let agent = state
        .chat_agent(&agent_name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown agent '{agent_name}'")))?;

    info!(
        "[{}] Received acknowledgement from {} for message {}",
        agent.name(),
        envelope.sender,
        envelope.acknowledgement.acknowledged_msg_id
    );
    Ok(StatusCode::NO_CONTENT)
}
