//! Chat surface shared by every agent.
//!
//! A chat message carries a list of content items; agents only read the text
//! items and always answer with a single text message, optionally closing the
//! session.

pub mod handlers;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChatContent {
    Text { text: String },
    StartSession,
    EndSession,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub timestamp: DateTime<Utc>,
    pub msg_id: Uuid,
    pub content: Vec<ChatContent>,
}

impl ChatMessage {
    /// Concatenated text items, for callers that only want the reply body.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match c {
                ChatContent::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn ends_session(&self) -> bool {
        self.content.contains(&ChatContent::EndSession)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAcknowledgement {
    pub timestamp: DateTime<Utc>,
    pub acknowledged_msg_id: Uuid,
}

impl ChatAcknowledgement {
    pub fn for_message(msg: &ChatMessage) -> Self {
        Self {
            timestamp: Utc::now(),
            acknowledged_msg_id: msg.msg_id,
        }
    }
}

/// Wraps plain text into a chat message, appending an end-of-session marker if asked.
pub fn create_text_chat(text: impl Into<String>, end_session: bool) -> ChatMessage {
    let mut content = vec![ChatContent::Text { text: text.into() }];
    if end_session {
        content.push(ChatContent::EndSession);
    }
    ChatMessage {
        timestamp: Utc::now(),
        msg_id: Uuid::new_v4(),
        content,
    }
}

/// Joins the non-empty text items of `msg` with newlines and trims the result.
pub fn collect_text(msg: &ChatMessage, sender: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for item in &msg.content {
        match item {
            ChatContent::StartSession => info!("Session started with {sender}"),
            ChatContent::Text { text } => {
                info!("Text message from {sender}: {text}");
                if !text.is_empty() {
                    parts.push(text);
                }
            }
            ChatContent::EndSession => info!("Session ended with {sender}"),
            ChatContent::Unknown => info!("Received unexpected content type from {sender}"),
        }
    }
    parts.join("\n").trim().to_string()
}

/// An agent reachable through the chat endpoint.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produces the reply for the text a sender supplied.
    async fn respond(&self, sender: &str, text: &str) -> ChatMessage;
}
