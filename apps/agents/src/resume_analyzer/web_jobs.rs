//! Live job openings found through the LLM's web search.

use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::{json::fenced_json_block, CompletionParams, LlmClient};

use super::models::WebJob;
use super::prompts::{WEB_JOBS_PROMPT_TEMPLATE, WEB_JOBS_SYSTEM};

const WEB_SEARCH_PARAMS: CompletionParams = CompletionParams::new(0.2, 1000)
    .with_top_p(0.9)
    .with_web_search();

const SENIOR_TITLE_WORDS: &[&str] = &["senior", "lead", "principal"];

/// Searches for openings matching `query`. Every failure yields an empty list.
pub async fn search_web_jobs(llm: &LlmClient, query: &str) -> Vec<WebJob> {
    info!("Searching web jobs for: {query}");
    let prompt = WEB_JOBS_PROMPT_TEMPLATE.replace("{query}", query);

    match llm.complete(WEB_JOBS_SYSTEM, &prompt, WEB_SEARCH_PARAMS).await {
        Ok(content) => parse_web_jobs(&content),
        Err(e) => {
            warn!("Web job search failed: {e}");
            Vec::new()
        }
    }
}

/// Accepts a JSON array or `{"jobs": [...]}`, raw or inside a ```json block.
pub fn parse_web_jobs(content: &str) -> Vec<WebJob> {
    [Some(content.trim()), fenced_json_block(content)]
        .into_iter()
        .flatten()
        .find_map(|candidate| serde_json::from_str::<Value>(candidate).ok().and_then(job_list))
        .map(|items| {
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn job_list(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("jobs") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Narrows results to the searched location and the candidate's seniority.
pub fn filter_web_jobs(jobs: Vec<WebJob>, location: &str, experience_bucket: &str) -> Vec<WebJob> {
    let early_career = matches!(experience_bucket, "0-1" | "2" | "3");

    jobs.into_iter()
        .filter(|job| location != "india" || job.location.to_lowercase().contains("india"))
        .filter(|job| {
            if !early_career {
                return true;
            }
            let title = job.title.to_lowercase();
            !SENIOR_TITLE_WORDS.iter().any(|w| title.contains(w))
        })
        .collect()
}
