use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lenient;

const UNSPECIFIED: &str = "unspecified";

fn default_difficulty() -> String {
    "intermediate".to_string()
}

fn default_count() -> usize {
    5
}

fn count_or_default<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::count(deserializer)?.unwrap_or_else(default_count))
}

/// Candidate profile shared by every interviewer operation. Clients send it in
/// loose shapes: years as text, skills as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewProfile {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub target_role: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub job_title: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub years_of_experience: Option<f64>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub interview_type: Option<String>,
    #[serde(deserialize_with = "difficulty_or_default")]
    pub difficulty_level: String,
}

fn difficulty_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::optional_string(deserializer)?.unwrap_or_else(default_difficulty))
}

impl Default for InterviewProfile {
    fn default() -> Self {
        Self {
            target_role: None,
            industry: None,
            job_title: None,
            years_of_experience: None,
            skills: Vec::new(),
            interview_type: None,
            difficulty_level: default_difficulty(),
        }
    }
}

impl InterviewProfile {
    pub fn target_role(&self) -> &str {
        self.target_role.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn industry(&self) -> &str {
        self.industry.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn job_title(&self) -> &str {
        self.job_title.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn interview_type(&self) -> &str {
        self.interview_type.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn experience(&self) -> String {
        self.years_of_experience
            .map_or_else(|| UNSPECIFIED.to_string(), |y| y.to_string())
    }

    pub fn skills_list(&self) -> String {
        self.skills.join(", ")
    }

    pub fn is_technical(&self) -> bool {
        self.interview_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("technical"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionsRequest {
    pub profile: InterviewProfile,
    #[serde(deserialize_with = "count_or_default")]
    pub count: usize,
}

impl Default for QuestionsRequest {
    fn default() -> Self {
        Self {
            profile: InterviewProfile::default(),
            count: default_count(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub profile: InterviewProfile,
    #[serde(deserialize_with = "lenient::string")]
    pub question: String,
    #[serde(deserialize_with = "lenient::string")]
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackRequest {
    pub profile: InterviewProfile,
    #[serde(deserialize_with = "lenient::string_items")]
    pub questions: Vec<String>,
    #[serde(deserialize_with = "lenient::string_items")]
    pub responses: Vec<String>,
    #[serde(deserialize_with = "lenient::records")]
    pub analyses: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_defaults() {
        let profile: InterviewProfile = serde_json::from_value(json!({
            "targetRole": "Backend Engineer",
            "skills": ["Go", "Postgres"],
            "interviewType": "Technical"
        }))
        .unwrap();
        assert_eq!(profile.difficulty_level, "intermediate");
        assert_eq!(profile.industry(), "unspecified");
        assert_eq!(profile.experience(), "unspecified");
        assert_eq!(profile.skills_list(), "Go, Postgres");
        assert!(profile.is_technical());
    }

    #[test]
    fn test_questions_request_defaults_count() {
        let req: QuestionsRequest = serde_json::from_value(json!({"profile": {}})).unwrap();
        assert_eq!(req.count, 5);
        assert!(!req.profile.is_technical());
    }

    #[test]
    fn test_profile_accepts_loose_client_shapes() {
        let req: QuestionsRequest = serde_json::from_value(json!({
            "profile": {
                "jobTitle": "Backend Engineer",
                "yearsOfExperience": "5",
                "skills": "Go, Rust",
                "industry": null,
                "difficultyLevel": null
            },
            "count": "3"
        }))
        .unwrap();
        assert_eq!(req.count, 3);
        assert_eq!(req.profile.years_of_experience, Some(5.0));
        assert_eq!(req.profile.skills, vec!["Go", "Rust"]);
        assert_eq!(req.profile.industry(), "unspecified");
        assert_eq!(req.profile.difficulty_level, "intermediate");
    }

    #[test]
    fn test_count_null_keeps_default_and_words_fail() {
        let req: QuestionsRequest =
            serde_json::from_value(json!({"profile": {}, "count": null})).unwrap();
        assert_eq!(req.count, 5);
        assert!(serde_json::from_value::<QuestionsRequest>(json!({"count": "many"})).is_err());
    }
}
