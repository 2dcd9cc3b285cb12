//! Resume generator: turns a job description into an ATS-friendly plain-text resume.
//!
//! Flow: cache lookup → keyword hints → prompt → LLM → cache.

pub mod handlers;
pub mod hints;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::cache::ResponseCache;
use crate::chat::{create_text_chat, ChatAgent, ChatMessage};
use crate::errors::AppError;
use crate::knowledge::ResumeKnowledge;
use crate::llm_client::{CompletionParams, LlmClient};
use hints::infer_hints;
use prompts::{RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM};

pub const AGENT_NAME: &str = "resume-generator";

const GENERATION_PARAMS: CompletionParams = CompletionParams::new(0.7, 100_000);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeParams {
    pub job_description: String,
}

pub struct ResumeGenerator {
    llm: LlmClient,
    knowledge: Arc<ResumeKnowledge>,
    cache: ResponseCache<String>,
}

impl ResumeGenerator {
    pub fn new(llm: LlmClient, knowledge: Arc<ResumeKnowledge>) -> Self {
        Self {
            llm,
            knowledge,
            cache: ResponseCache::unbounded(),
        }
    }

    /// Generates (or returns the cached) resume for a job description.
    pub async fn generate(&self, params: &ResumeParams) -> Result<String, AppError> {
        info!(
            "Generating resume for job description ({} chars)",
            params.job_description.len()
        );

        let cache_key = ResponseCache::<String>::key_for(params)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build cache key: {e}")))?;
        if let Some(cached) = self.cache.get(&cache_key).await {
            info!("Returning cached resume");
            return Ok(cached);
        }

        let prompt = build_prompt(params, &self.knowledge);

        info!("Calling LLM for resume generation");
        let resume = self
            .llm
            .complete(RESUME_SYSTEM, &prompt, GENERATION_PARAMS)
            .await
            .map_err(|e| AppError::Llm(format!("Resume generation failed: {e}")))?;

        self.cache.insert(cache_key, resume.clone()).await;
        info!("Resume generated and cached");
        Ok(resume)
    }
}

fn build_prompt(params: &ResumeParams, knowledge: &ResumeKnowledge) -> String {
    let hints = infer_hints(&params.job_description, knowledge);
    let years = hints
        .years
        .map(|y| y.to_string())
        .unwrap_or_else(|| "match JD".to_string());
    let location = if hints.location.is_empty() {
        "general"
    } else {
        hints.location.as_str()
    };

    RESUME_PROMPT_TEMPLATE
        .replace("{role}", &hints.role)
        .replace("{years}", &years)
        .replace("{location}", location)
        .replace("{job_description}", &params.job_description)
}

#[async_trait]
impl ChatAgent for ResumeGenerator {
    fn name(&self) -> &'static str {
        AGENT_NAME
    }

    async fn respond(&self, _sender: &str, text: &str) -> ChatMessage {
        if text.is_empty() {
            return create_text_chat(
                "Please provide a job description text to generate a resume.",
                true,
            );
        }

        let params = ResumeParams {
            job_description: text.to_string(),
        };
        match self.generate(&params).await {
            Ok(resume) => create_text_chat(resume, true),
            Err(e) => {
                error!("Failed to generate resume: {e}");
                create_text_chat(format!("Error generating resume: {e}"), true)
            }
        }
    }
}
