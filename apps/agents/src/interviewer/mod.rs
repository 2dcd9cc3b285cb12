//! Mock Interviewer: question generation, answer analysis and session feedback.
//!
//! Chat sessions are driven by commands (`QUESTIONS:`, `ANALYZE:`, `FEEDBACK:`)
//! each followed by a JSON payload. Only `FEEDBACK:` ends the session.

pub mod handlers;
pub mod models;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::chat::{create_text_chat, ChatAgent, ChatMessage};
use crate::errors::AppError;
use crate::knowledge::education::{BACKEND, DSA, FRONTEND, SYSTEM_DESIGN};
use crate::knowledge::EducationKnowledge;
use crate::llm_client::json::{extract_json_payload, fenced_json_block};
use crate::llm_client::prompts::{render, CONCISE_SYSTEM};
use crate::llm_client::{CompletionParams, LlmClient};
use models::{AnalysisRequest, FeedbackRequest, InterviewProfile, QuestionsRequest};
use prompts::{
    ANALYSIS_PROMPT_TEMPLATE, CHAT_USAGE, FEEDBACK_PROMPT_TEMPLATE, QUESTIONS_PROMPT_TEMPLATE,
};

pub const AGENT_NAME: &str = "interviewer";

const QUESTION_PARAMS: CompletionParams = CompletionParams::new(0.6, 1200).with_top_p(0.9);
const REVIEW_PARAMS: CompletionParams = CompletionParams::new(0.3, 800).with_top_p(0.9);
const MAX_HINTS: usize = 8;

const QUESTIONS_COMMAND: &str = "QUESTIONS:";
const ANALYZE_COMMAND: &str = "ANALYZE:";
const FEEDBACK_COMMAND: &str = "FEEDBACK:";

pub struct Interviewer {
    llm: LlmClient,
    knowledge: Arc<EducationKnowledge>,
}

impl Interviewer {
    pub fn new(llm: LlmClient, knowledge: Arc<EducationKnowledge>) -> Self {
        Self { llm, knowledge }
    }

    /// Curriculum focus areas for a role, keyed on loose role keywords.
    pub fn build_rag_hints(&self, target_role: &str, level: &str) -> Value {
        let role = target_role.to_lowercase();
        let topic = if role.contains("front") {
            FRONTEND
        } else if role.contains("dsa") || role.contains("algo") {
            DSA
        } else if role.contains("back") {
            BACKEND
        } else {
            SYSTEM_DESIGN
        };

        let mut subtopics = self.knowledge.subtopics_for(topic, level);
        subtopics.truncate(MAX_HINTS);
        let mut resources = self.knowledge.resources_for(topic, level);
        resources.truncate(MAX_HINTS);

        json!({
            "topic": topic,
            "subtopics": subtopics,
            "resources": resources,
        })
    }

    pub async fn generate_questions(
        &self,
        profile: &InterviewProfile,
        count: usize,
    ) -> Result<Vec<String>, AppError> {
        info!(
            "Generating {count} interview questions for {}",
            profile.target_role()
        );
        let rag = self.build_rag_hints(
            profile.target_role.as_deref().unwrap_or_default(),
            &profile.difficulty_level,
        );
        let (count_text, experience, skills, rag) = (
            count.to_string(),
            profile.experience(),
            profile.skills_list(),
            rag.to_string(),
        );
        let prompt = render(
            QUESTIONS_PROMPT_TEMPLATE,
            &[
                ("target_role", profile.target_role()),
                ("industry", profile.industry()),
                ("count", count_text.as_str()),
                ("job_title", profile.job_title()),
                ("experience", experience.as_str()),
                ("skills", skills.as_str()),
                ("interview_type", profile.interview_type()),
                ("rag_hints", rag.as_str()),
            ],
        );

        let content = self.ask(&prompt, QUESTION_PARAMS).await?;
        Ok(question_lines(&content, count))
    }

    /// Returns the model's JSON assessment as text.
    pub async fn analyze_response(
        &self,
        question: &str,
        response: &str,
        profile: &InterviewProfile,
    ) -> Result<String, AppError> {
        info!("Analyzing interview response ({} chars)", response.len());
        let technical_key = if profile.is_technical() {
            ", technicalAccuracy"
        } else {
            ""
        };
        let (experience, skills) = (profile.experience(), profile.skills_list());
        let prompt = render(
            ANALYSIS_PROMPT_TEMPLATE,
            &[
                ("question", question),
                ("response", response),
                ("target_role", profile.target_role()),
                ("industry", profile.industry()),
                ("experience", experience.as_str()),
                ("skills", skills.as_str()),
                ("interview_type", profile.interview_type()),
                ("technical_key", technical_key),
            ],
        );

        let content = self.ask(&prompt, REVIEW_PARAMS).await?;
        Ok(reply_json_text(&content).to_string())
    }

    /// Returns the model's overall session feedback as JSON text.
    pub async fn generate_feedback(
        &self,
        profile: &InterviewProfile,
        questions: &[String],
        responses: &[String],
        analyses: &[Value],
    ) -> Result<String, AppError> {
        info!("Generating feedback for {} questions", questions.len());
        let (experience, skills) = (profile.experience(), profile.skills_list());
        let summary = transcript(questions, responses, analyses);
        let prompt = render(
            FEEDBACK_PROMPT_TEMPLATE,
            &[
                ("target_role", profile.target_role()),
                ("experience", experience.as_str()),
                ("skills", skills.as_str()),
                ("transcript", summary.as_str()),
            ],
        );

        let content = self.ask(&prompt, REVIEW_PARAMS).await?;
        Ok(reply_json_text(&content).to_string())
    }

    async fn ask(&self, prompt: &str, params: CompletionParams) -> Result<String, AppError> {
        self.llm
            .complete(CONCISE_SYSTEM, prompt, params)
            .await
            .map_err(|e| AppError::Llm(format!("Interviewer request failed: {e}")))
    }

    async fn run_command(&self, text: &str) -> Result<ChatMessage, AppError> {
        if let Some(payload) = text.strip_prefix(QUESTIONS_COMMAND) {
            let req: QuestionsRequest = parse_payload(payload)?;
            let questions = self.generate_questions(&req.profile, req.count).await?;
            return Ok(create_text_chat(questions.join("\n"), false));
        }

        if let Some(payload) = text.strip_prefix(ANALYZE_COMMAND) {
            let req: AnalysisRequest = parse_payload(payload)?;
            let analysis = self
                .analyze_response(&req.question, &req.response, &req.profile)
                .await?;
            return Ok(create_text_chat(analysis, false));
        }

        if let Some(payload) = text.strip_prefix(FEEDBACK_COMMAND) {
            let req: FeedbackRequest = parse_payload(payload)?;
            let feedback = self
                .generate_feedback(&req.profile, &req.questions, &req.responses, &req.analyses)
                .await?;
            return Ok(create_text_chat(feedback, true));
        }

        Ok(create_text_chat(CHAT_USAGE, true))
    }
}

/// Lines ending in `?` (at most `count`), else every non-empty line.
fn question_lines(content: &str, count: usize) -> Vec<String> {
    let lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

    let questions: Vec<String> = lines
        .clone()
        .filter(|l| l.ends_with('?'))
        .take(count)
        .map(str::to_string)
        .collect();

    if questions.is_empty() {
        lines.map(str::to_string).collect()
    } else {
        questions
    }
}

fn reply_json_text(content: &str) -> &str {
    fenced_json_block(content).unwrap_or(content).trim()
}

/// Parses a model reply as JSON, wrapping unparseable text as `{"raw": text}`.
pub fn reply_to_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

fn transcript(questions: &[String], responses: &[String], analyses: &[Value]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let answer = responses.get(i).map(String::as_str).unwrap_or_default();
            let analysis = analyses.get(i).cloned().unwrap_or_else(|| json!({}));
            format!("Q{n}: {q}\nA{n}: {answer}\nAnalysis: {analysis}", n = i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn parse_payload<T: DeserializeOwned>(payload: &str) -> Result<T, AppError> {
    let value = extract_json_payload(payload).map_err(|e| AppError::Validation(e.to_string()))?;
    serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("Invalid command payload: {e}")))
}

#[async_trait]
impl ChatAgent for Interviewer {
    fn name(&self) -> &'static str {
        AGENT_NAME
    }

    async fn respond(&self, _sender: &str, text: &str) -> ChatMessage {
        match self.run_command(text).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Interviewer error: {e}");
                create_text_chat(format!("Error: {e}"), true)
            }
        }
    }
}
