//! Resume Analyzer: ATS scoring, improvement suggestions and job recommendations.
//!
//! Flow: cache lookup → LLM analysis (offline default on failure) → JSearch
//! recommendations → cache. Chat replies are additionally enriched with live
//! web-search openings filtered by location and seniority.

pub mod documents;
pub mod format;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod web_jobs;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::cache::ResponseCache;
use crate::chat::{create_text_chat, ChatAgent, ChatMessage};
use crate::errors::AppError;
use crate::jobs_client::{JobPosting, JobsClient};
use crate::knowledge::ResumeKnowledge;
use crate::llm_client::prompts::render;
use crate::llm_client::{json::extract_json_text, CompletionParams, LlmClient};
use documents::DriveFetcher;
use format::format_analysis;
use models::{
    AnalysisResult, CandidateProfile, JobRecommendation, ResumeAnalysisParams, SalaryRange,
};
use prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYZER_SYSTEM, PROFILE_PROMPT_TEMPLATE, PROFILE_SYSTEM};
use web_jobs::{filter_web_jobs, search_web_jobs};

pub const AGENT_NAME: &str = "resume-analyzer";

const ANALYSIS_PARAMS: CompletionParams = CompletionParams::new(0.5, 100_000);
const PROFILE_PARAMS: CompletionParams = CompletionParams::new(0.3, 1000);
const RECOMMENDATION_LOCATION: &str = "united states";
const DEFAULT_JOB_QUERY: &str = "software developer";
const DEFAULT_WEB_ROLE: &str = "software engineer";
const DEFAULT_WEB_LOCATION: &str = "india";
const MAX_RECOMMENDATIONS: usize = 3;
const DESCRIPTION_PREVIEW_CHARS: usize = 200;

pub struct ResumeAnalyzer {
    llm: LlmClient,
    jobs: JobsClient,
    drive: DriveFetcher,
    knowledge: Arc<ResumeKnowledge>,
    cache: ResponseCache<AnalysisResult>,
    offline_fallback: bool,
}

impl ResumeAnalyzer {
    pub fn new(
        llm: LlmClient,
        jobs: JobsClient,
        drive: DriveFetcher,
        knowledge: Arc<ResumeKnowledge>,
        cache_ttl: Duration,
        offline_fallback: bool,
    ) -> Self {
        Self {
            llm,
            jobs,
            drive,
            knowledge,
            cache: ResponseCache::with_ttl(cache_ttl),
            offline_fallback,
        }
    }

    /// Analyzes resume text. Results are cached by input for the configured TTL.
    pub async fn analyze(&self, params: &ResumeAnalysisParams) -> Result<AnalysisResult, AppError> {
        info!(
            "Analyzing resume with text length: {}",
            params.resume_text.len()
        );

        let cache_key = ResponseCache::<AnalysisResult>::key_for(params)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build cache key: {e}")))?;
        if let Some(cached) = self.cache.get(&cache_key).await {
            info!("Returning cached analysis");
            return Ok(cached);
        }

        let mut analysis = self.llm_analysis(&params.resume_text).await?;
        analysis.job_recommendations = self.job_recommendations(&analysis.skills).await;

        self.cache.insert(cache_key, analysis.clone()).await;
        info!("Analysis generated and cached");
        Ok(analysis)
    }

    async fn llm_analysis(&self, resume_text: &str) -> Result<AnalysisResult, AppError> {
        let prompt = ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

        let content = match self.llm.complete(ANALYZER_SYSTEM, &prompt, ANALYSIS_PARAMS).await {
            Ok(content) => content,
            Err(e) if self.offline_fallback => {
                warn!("LLM analysis call failed: {e}. Returning default analysis.");
                return Ok(AnalysisResult::offline_default());
            }
            Err(e) => return Err(AppError::Llm(format!("Resume analysis failed: {e}"))),
        };

        serde_json::from_str(extract_json_text(&content))
            .map_err(|e| AppError::Llm(format!("Failed to extract JSON from response: {e}")))
    }

    async fn job_recommendations(&self, skills: &[String]) -> Vec<JobRecommendation> {
        let job_title = skills
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_JOB_QUERY);

        match self.jobs.search(job_title, RECOMMENDATION_LOCATION).await {
            Ok(response) => map_job_postings(&response.data, skills),
            Err(e) => {
                warn!("Job recommendation fetch failed: {e}");
                Vec::new()
            }
        }
    }

    /// Extracts text from an uploaded PDF and analyzes it.
    pub async fn analyze_pdf(&self, pdf: Vec<u8>) -> Result<AnalysisResult, AppError> {
        let resume_text = documents::extract_pdf_text_blocking(pdf).await?;
        info!("Extracted resume text length: {}", resume_text.len());
        self.analyze(&ResumeAnalysisParams { resume_text }).await
    }

    /// Pulls name, contact and career details out of resume text for an interview profile.
    pub async fn extract_profile(&self, resume_text: &str) -> Result<CandidateProfile, AppError> {
        let prompt = render(PROFILE_PROMPT_TEMPLATE, &[("resume_text", resume_text)]);
        self.llm
            .complete_json(PROFILE_SYSTEM, &prompt, PROFILE_PARAMS)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse resume analysis: {e}")))
    }

    /// Adds live openings for the candidate's likely role and location.
    async fn enrich_with_web_jobs(&self, analysis: &mut AnalysisResult, resume_text: &str) {
        let primary_skill = analysis
            .skills
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_WEB_ROLE);
        let role = self
            .knowledge
            .map_skill_to_role(primary_skill)
            .into_iter()
            .next()
            .unwrap_or_else(|| primary_skill.to_string());
        let location = self
            .knowledge
            .normalize_country(resume_text)
            .unwrap_or_else(|| DEFAULT_WEB_LOCATION.to_string());

        let jobs = search_web_jobs(&self.llm, &format!("{role} in {location}")).await;
        if jobs.is_empty() {
            return;
        }

        let bucket = self.knowledge.experience_bucket(analysis.whole_years());
        analysis.web_job_search = filter_web_jobs(jobs, &location, bucket);
    }

    async fn chat_reply(&self, text: &str) -> String {
        if text.starts_with('{') && text.ends_with('}') {
            match serde_json::from_str::<AnalysisResult>(text) {
                Ok(pasted) => return format_analysis(&pasted),
                Err(e) => debug!("Pasted text is not an analysis ({e}); analyzing as resume"),
            }
        }

        let resume_text = if text.contains("drive.google.com/file/d/") {
            match self.drive.fetch_pdf_text(text).await {
                Ok(extracted) => extracted,
                Err(e) => return format!("Error reading PDF: {e}"),
            }
        } else {
            text.to_string()
        };

        let params = ResumeAnalysisParams {
            resume_text: resume_text.clone(),
        };
        match self.analyze(&params).await {
            Ok(mut analysis) => {
                self.enrich_with_web_jobs(&mut analysis, &resume_text).await;
                format_analysis(&analysis)
            }
            Err(e) => {
                error!("Failed to analyze resume: {e}");
                format!("Error analyzing resume: {e}")
            }
        }
    }
}

/// Maps the first JSearch postings to recommendations carrying the candidate's skills.
pub fn map_job_postings(postings: &[JobPosting], skills: &[String]) -> Vec<JobRecommendation> {
    postings
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(index, job)| JobRecommendation {
            id: index as u32 + 1,
            title: text_or(&job.job_title, "Software Developer"),
            company: text_or(&job.employer_name, "Tech Company"),
            location: posting_location(job),
            description: format!(
                "{}...",
                job.job_description
                    .as_deref()
                    .unwrap_or("Software development position")
                    .chars()
                    .take(DESCRIPTION_PREVIEW_CHARS)
                    .collect::<String>()
            ),
            match_percentage: Some((70 + 5 * index as u32).min(95)),
            skills: skills.iter().take(5).cloned().collect(),
            link: job.job_apply_link.clone(),
            salary: posting_salary(job),
            source_link: job.job_posting_url.clone(),
        })
        .collect()
}

fn text_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn posting_location(job: &JobPosting) -> String {
    let city = text_or(&job.job_city, "Remote");
    match job.job_state.as_deref().filter(|s| !s.is_empty()) {
        Some(state) => format!("{city}, {state}"),
        None => city,
    }
}

/// Present only when the posting names a minimum or maximum salary.
fn posting_salary(job: &JobPosting) -> Option<SalaryRange> {
    let known = |v: Option<f64>| v.filter(|s| *s != 0.0);
    if known(job.job_min_salary).is_none() && known(job.job_max_salary).is_none() {
        return None;
    }
    Some(SalaryRange {
        min: Some(known(job.job_min_salary).unwrap_or(60_000.0)),
        median: Some(known(job.job_median_salary).unwrap_or(80_000.0)),
        max: Some(known(job.job_max_salary).unwrap_or(100_000.0)),
    })
}

#[async_trait]
impl ChatAgent for ResumeAnalyzer {
    fn name(&self) -> &'static str {
        AGENT_NAME
    }

    async fn respond(&self, _sender: &str, text: &str) -> ChatMessage {
        if text.is_empty() {
            return create_text_chat(
                "Please provide resume text or a Google Drive PDF link to analyze.",
                true,
            );
        }
        create_text_chat(self.chat_reply(text).await, true)
    }
}
