//! Data models for resume analysis results.
//!
//! Every field tolerates absence, `null` and loosely typed values: the structure is
//! produced by an LLM and may also be pasted back in by a user.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "lenient::number")]
    pub ats_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub format_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub keyword_count: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub years_of_experience: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub education_level: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub job_match_score: Option<f64>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::records")]
    pub score_breakdown: Vec<ScoreBreakdown>,
    #[serde(deserialize_with = "lenient::records")]
    pub improvement_suggestions: Vec<ImprovementSuggestion>,
    #[serde(deserialize_with = "lenient::records")]
    pub job_recommendations: Vec<JobRecommendation>,
    #[serde(
        deserialize_with = "lenient::records",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub web_job_search: Vec<WebJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBreakdown {
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementSuggestion {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub section: String,
    /// "high" | "medium" | "low"
    #[serde(deserialize_with = "lenient::string")]
    pub priority: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRange {
    #[serde(deserialize_with = "lenient::number")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub median: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecommendation {
    #[serde(deserialize_with = "lenient::whole_number_or_zero")]
    pub id: u32,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::whole_number")]
    pub match_percentage: Option<u32>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub link: Option<String>,
    #[serde(deserialize_with = "lenient::optional_record")]
    pub salary: Option<SalaryRange>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub source_link: Option<String>,
}

/// A live opening found through web search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebJob {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(alias = "url", deserialize_with = "lenient::optional_string")]
    pub link: Option<String>,
    #[serde(
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Value>,
}

/// Candidate details pulled from an uploaded resume. The shape matches the
/// interviewer profile so a client can pass it straight through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub job_title: String,
    #[serde(deserialize_with = "lenient::number")]
    pub years_of_experience: Option<f64>,
    /// Comma-separated.
    #[serde(deserialize_with = "lenient::comma_joined")]
    pub skills: String,
    #[serde(deserialize_with = "lenient::string")]
    pub target_role: String,
    #[serde(deserialize_with = "lenient::string")]
    pub industry: String,
    #[serde(deserialize_with = "lenient::string_items")]
    pub education: Vec<String>,
    #[serde(deserialize_with = "lenient::string_items")]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisParams {
    pub resume_text: String,
}

impl AnalysisResult {
    /// Neutral analysis used when the LLM cannot be reached.
    pub fn offline_default() -> Self {
        let row = |category: &str, description: &str| ScoreBreakdown {
            category: category.to_string(),
            score: Some(50.0),
            description: description.to_string(),
        };

        Self {
            ats_score: Some(50.0),
            format_score: Some(50.0),
            keyword_count: Some(10.0),
            years_of_experience: Some(2.0),
            education_level: Some("Unknown".to_string()),
            job_match_score: Some(50.0),
            skills: vec!["Unknown".to_string()],
            score_breakdown: vec![
                row("Content", "Content could not be scored automatically"),
                row("Structure", "Structure could not be scored automatically"),
                row("Keywords", "Keywords could not be scored automatically"),
            ],
            improvement_suggestions: vec![ImprovementSuggestion {
                title: "Retry analysis".to_string(),
                description: "The analysis service was unavailable; scores are placeholders."
                    .to_string(),
                section: "General".to_string(),
                priority: "medium".to_string(),
                examples: vec![],
            }],
            job_recommendations: vec![],
            web_job_search: vec![],
        }
    }

    /// Whole years of experience, treating absent or negative values as zero.
    pub fn whole_years(&self) -> u32 {
        self.years_of_experience
            .filter(|y| y.is_finite() && *y > 0.0)
            .map(|y| y as u32)
            .unwrap_or(0)
    }
}
