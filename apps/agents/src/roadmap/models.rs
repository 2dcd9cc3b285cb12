use serde::{Deserialize, Serialize};

use crate::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl Timeframe {
    /// Number of weekly milestones the roadmap must contain.
    pub fn weeks(self) -> u32 {
        match self {
            Timeframe::OneMonth => 4,
            Timeframe::ThreeMonths => 12,
            Timeframe::SixMonths => 24,
            Timeframe::OneYear => 52,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1 month",
            Timeframe::ThreeMonths => "3 months",
            Timeframe::SixMonths => "6 months",
            Timeframe::OneYear => "1 year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapParams {
    pub category: Category,
    pub topic: String,
    pub current_level: Level,
    pub goals: String,
    pub timeframe: Timeframe,
}

/// A generated learning plan. All four top-level keys must be present; their
/// contents are read leniently and malformed milestones or resources are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::records")]
    pub milestones: Vec<Milestone>,
    #[serde(deserialize_with = "lenient::records")]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    /// learning | project | concept | assessment
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    /// "Week n"
    #[serde(deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    /// book | video | course | website | repository | tutorial | youtube | podcast
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub level: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    /// free | paid
    #[serde(deserialize_with = "lenient::string")]
    pub cost: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_wire_format() {
        let params: RoadmapParams = serde_json::from_value(json!({
            "category": "education",
            "topic": "Rust",
            "currentLevel": "intermediate",
            "goals": "Ship a CLI",
            "timeframe": "6months"
        }))
        .unwrap();
        assert_eq!(params.current_level, Level::Intermediate);
        assert_eq!(params.timeframe.weeks(), 24);
        assert_eq!(params.timeframe.label(), "6 months");
    }

    #[test]
    fn test_params_reject_unknown_category_and_timeframe() {
        let base = json!({
            "category": "education", "topic": "Go", "currentLevel": "beginner",
            "goals": "basics", "timeframe": "3months"
        });

        let mut bad_category = base.clone();
        bad_category["category"] = json!("fitness");
        assert!(serde_json::from_value::<RoadmapParams>(bad_category).is_err());

        let mut bad_timeframe = base;
        bad_timeframe["timeframe"] = json!("2weeks");
        assert!(serde_json::from_value::<RoadmapParams>(bad_timeframe).is_err());
    }

    #[test]
    fn test_roadmap_requires_top_level_keys() {
        let missing = json!({"title": "Go", "description": "d", "milestones": []});
        assert!(serde_json::from_value::<Roadmap>(missing).is_err());

        let roadmap: Roadmap = serde_json::from_value(json!({
            "title": "Go", "description": "d",
            "milestones": [{"title": "Basics", "type": "learning", "duration": "Week 1"}],
            "resources": [{"title": "Tour of Go", "url": "https://go.dev/tour"}]
        }))
        .unwrap();
        assert_eq!(roadmap.milestones[0].kind, "learning");
        assert!(roadmap.milestones[0].tasks.is_empty());
        assert_eq!(roadmap.resources[0].url.as_deref(), Some("https://go.dev/tour"));
    }

    #[test]
    fn test_roadmap_tolerates_null_nested_fields() {
        let roadmap: Roadmap = serde_json::from_value(json!({
            "title": "Go", "description": null,
            "milestones": [
                {"title": "Basics", "type": null, "duration": 1, "tasks": null},
                "Week 2: concurrency"
            ],
            "resources": [{"title": "Tour of Go", "url": null, "tags": "intro, free"}]
        }))
        .unwrap();
        assert_eq!(roadmap.description, "");
        assert_eq!(roadmap.milestones.len(), 1);
        assert_eq!(roadmap.milestones[0].kind, "");
        assert_eq!(roadmap.milestones[0].duration, "1");
        assert!(roadmap.milestones[0].tasks.is_empty());
        assert_eq!(roadmap.resources[0].url, None);
        assert_eq!(roadmap.resources[0].tags, vec!["intro", "free"]);
    }
}
