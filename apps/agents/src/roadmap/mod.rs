//! Learning Roadmap: week-by-week study plans for educational topics.

pub mod format;
pub mod handlers;
pub mod models;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};

use crate::cache::ResponseCache;
use crate::chat::{create_text_chat, ChatAgent, ChatMessage};
use crate::errors::AppError;
use crate::knowledge::EducationKnowledge;
use crate::llm_client::prompts::{render, JSON_ONLY_SYSTEM};
use crate::llm_client::{CompletionParams, LlmClient};
use format::format_roadmap_markdown;
use models::{Category, Level, Roadmap, RoadmapParams, Timeframe};
use prompts::ROADMAP_PROMPT_TEMPLATE;

pub const AGENT_NAME: &str = "roadmap";

const ROADMAP_PARAMS: CompletionParams = CompletionParams::new(0.5, 8000)
    .with_top_p(0.9)
    .with_web_search();
const MAX_HINTS: usize = 8;
const CHAT_GOALS: &str = "Learn fundamentals and build projects";

pub struct RoadmapGenerator {
    llm: LlmClient,
    knowledge: Arc<EducationKnowledge>,
    cache: ResponseCache<Roadmap>,
}

impl RoadmapGenerator {
    pub fn new(llm: LlmClient, knowledge: Arc<EducationKnowledge>) -> Self {
        Self {
            llm,
            knowledge,
            cache: ResponseCache::unbounded(),
        }
    }

    pub async fn generate(&self, params: &RoadmapParams) -> Result<Roadmap, AppError> {
        info!(
            "Generating roadmap for topic '{}' ({}, {})",
            params.topic,
            params.current_level.as_str(),
            params.timeframe.label()
        );

        let cache_key = ResponseCache::<Roadmap>::key_for(params)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build cache key: {e}")))?;
        if let Some(cached) = self.cache.get(&cache_key).await {
            info!("Returning cached roadmap");
            return Ok(cached);
        }

        let prompt = self.build_prompt(params);

        info!("Calling LLM for roadmap generation");
        let roadmap: Roadmap = self
            .llm
            .complete_json(JSON_ONLY_SYSTEM, &prompt, ROADMAP_PARAMS)
            .await
            .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;

        self.cache.insert(cache_key, roadmap.clone()).await;
        info!("Roadmap generated and cached");
        Ok(roadmap)
    }

    fn build_prompt(&self, params: &RoadmapParams) -> String {
        let topic = self
            .knowledge
            .resolve_topic(&params.topic)
            .unwrap_or(params.topic.as_str());
        let level = params.current_level.as_str();

        let mut subtopics = self.knowledge.subtopics_for(topic, level);
        subtopics.truncate(MAX_HINTS);
        let mut resources = self.knowledge.resources_for(topic, level);
        resources.truncate(MAX_HINTS);
        let rag_hints = json!({
            "subtopics": subtopics,
            "recommendedResources": resources,
        });

        let rag_hints = rag_hints.to_string();
        let total_weeks = params.timeframe.weeks().to_string();

        render(
            ROADMAP_PROMPT_TEMPLATE,
            &[
                ("level", level),
                ("timeframe", params.timeframe.label()),
                ("rag_hints", rag_hints.as_str()),
                ("total_weeks", total_weeks.as_str()),
                ("topic", params.topic.as_str()),
            ],
        )
    }
}

/// Reads the learner's level and timeframe from free text.
/// Defaults: beginner, 3 months.
pub fn infer_level_and_timeframe(text: &str) -> (Level, Timeframe) {
    let t = text.to_lowercase();
    let has_any = |needles: &[&str]| needles.iter().any(|n| t.contains(n));

    let level = if t.contains("advanced") {
        Level::Advanced
    } else if t.contains("intermediate") {
        Level::Intermediate
    } else {
        Level::Beginner
    };

    let timeframe = if has_any(&["1 year", "one year", "12 months"]) {
        Timeframe::OneYear
    } else if has_any(&["6-month", "6 month"]) {
        Timeframe::SixMonths
    } else if has_any(&["3-month", "3 month"]) {
        Timeframe::ThreeMonths
    } else if has_any(&["1-month", "1 month", "4 weeks"]) {
        Timeframe::OneMonth
    } else {
        Timeframe::ThreeMonths
    };

    (level, timeframe)
}

#[async_trait]
impl ChatAgent for RoadmapGenerator {
    fn name(&self) -> &'static str {
        AGENT_NAME
    }

    async fn respond(&self, _sender: &str, text: &str) -> ChatMessage {
        if text.is_empty() {
            return create_text_chat(
                "Please provide an educational topic to generate a roadmap.",
                true,
            );
        }

        let (current_level, timeframe) = infer_level_and_timeframe(text);
        let params = RoadmapParams {
            category: Category::Education,
            topic: text.to_string(),
            current_level,
            goals: CHAT_GOALS.to_string(),
            timeframe,
        };

        match self.generate(&params).await {
            Ok(roadmap) => create_text_chat(format_roadmap_markdown(&roadmap), true),
            Err(e) => {
                error!("Failed to generate roadmap: {e}");
                create_text_chat(format!("Error generating roadmap: {e}"), true)
            }
        }
    }
}
