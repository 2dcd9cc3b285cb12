use std::sync::Arc;

use anyhow::Result;

use crate::chat::ChatAgent;
use crate::config::Config;
use crate::interviewer::{self, Interviewer};
use crate::jobs_client::JobsClient;
use crate::knowledge::{EducationKnowledge, ResumeKnowledge};
use crate::llm_client::LlmClient;
use crate::resume_analyzer::documents::{DriveFetcher, DRIVE_BASE_URL};
use crate::resume_analyzer::{self, ResumeAnalyzer};
use crate::resume_generator::{self, ResumeGenerator};
use crate::roadmap::{self, RoadmapGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resume_generator: Arc<ResumeGenerator>,
    pub resume_analyzer: Arc<ResumeAnalyzer>,
    pub roadmap: Arc<RoadmapGenerator>,
    pub interviewer: Arc<Interviewer>,
}

impl AppState {
    /// Builds the outbound clients from configuration and wires up every agent.
    pub fn from_config(config: &Config) -> Result<Self> {
        let llm = LlmClient::new(config.asi1_api_key.clone(), &config.asi1_api_url)?
            .with_retry_policy(config.llm_max_retries, config.llm_retry_delay);
        let jobs = JobsClient::new(
            config.jsearch_api_key.clone(),
            config.jsearch_api_host.clone(),
            &config.jsearch_base_url(),
        )?;
        let drive = DriveFetcher::new(DRIVE_BASE_URL)?;

        Ok(Self::assemble(llm, jobs, drive, config))
    }

    /// Wires agents around already-built clients. Fact tables are seeded once and shared.
    pub fn assemble(llm: LlmClient, jobs: JobsClient, drive: DriveFetcher, config: &Config) -> Self {
        let resume_knowledge = Arc::new(ResumeKnowledge::seeded());
        let education_knowledge = Arc::new(EducationKnowledge::seeded());

        Self {
            resume_generator: Arc::new(ResumeGenerator::new(
                llm.clone(),
                Arc::clone(&resume_knowledge),
            )),
            resume_analyzer: Arc::new(ResumeAnalyzer::new(
                llm.clone(),
                jobs,
                drive,
                resume_knowledge,
                config.analysis_cache_ttl,
                config.analyzer_offline_fallback,
            )),
            roadmap: Arc::new(RoadmapGenerator::new(
                llm.clone(),
                Arc::clone(&education_knowledge),
            )),
            interviewer: Arc::new(Interviewer::new(llm, education_knowledge)),
        }
    }

    /// Looks up a chat agent by its route name.
    pub fn chat_agent(&self, name: &str) -> Option<Arc<dyn ChatAgent>> {
        let agent: Arc<dyn ChatAgent> = match name {
            resume_generator::AGENT_NAME => self.resume_generator.clone(),
            resume_analyzer::AGENT_NAME => self.resume_analyzer.clone(),
            roadmap::AGENT_NAME => self.roadmap.clone(),
            interviewer::AGENT_NAME => self.interviewer.clone(),
            _ => return None,
        };
        Some(agent)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use wiremock::MockServer;

    use super::AppState;
    use crate::config::Config;
    use crate::jobs_client::JobsClient;
    use crate::llm_client::test_support::mock_llm;
    use crate::resume_analyzer::documents::DriveFetcher;

    pub fn test_config() -> Config {
        Config {
            asi1_api_key: "test-key".into(),
            asi1_api_url: "http://127.0.0.1:9".into(),
            llm_max_retries: 0,
            llm_retry_delay: Duration::ZERO,
            jsearch_api_key: None,
            jsearch_api_host: "jsearch.p.rapidapi.com".into(),
            analysis_cache_ttl: Duration::from_secs(60),
            analyzer_offline_fallback: false,
            port: 0,
            rust_log: "info".into(),
        }
    }

    /// State whose LLM and download traffic goes to `server`; job search is unconfigured.
    pub fn mock_state(server: &MockServer) -> AppState {
        let config = test_config();
        let jobs = JobsClient::new(None, config.jsearch_api_host.clone(), &server.uri()).unwrap();
        let drive = DriveFetcher::new(&server.uri()).unwrap();
        AppState::assemble(mock_llm(server), jobs, drive, &config)
    }
}
