//! Tailoring hints inferred from a job description by keyword scan.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::knowledge::ResumeKnowledge;

const DEFAULT_ROLE: &str = "software engineer";

/// Scanned in order; the first one contained in the text is the primary skill.
const PRIMARY_SKILLS: &[&str] = &[
    "react",
    "javascript",
    "typescript",
    "node.js",
    "node",
    "python",
    "java",
    "aws",
    "sql",
    "rest api",
];

static YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*\+?\s*(?:years?|yrs)").expect("years pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeHints {
    pub role: String,
    /// Empty when no location is recognised.
    pub location: String,
    pub years: Option<u32>,
}

pub fn infer_hints(job_text: &str, knowledge: &ResumeKnowledge) -> ResumeHints {
    let text = job_text.to_lowercase();

    let role = PRIMARY_SKILLS
        .iter()
        .find(|skill| text.contains(**skill))
        .and_then(|skill| knowledge.map_skill_to_role(skill).into_iter().next())
        .unwrap_or_else(|| DEFAULT_ROLE.to_string());

    let location = knowledge.normalize_country(&text).unwrap_or_default();

    ResumeHints {
        role,
        location,
        years: infer_years(&text),
    }
}

/// Explicit "N years" first, then seniority words.
fn infer_years(text: &str) -> Option<u32> {
    if let Some(years) = YEARS
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
    {
        return Some(years);
    }

    if ["junior", "entry", "fresher"].iter().any(|w| text.contains(w)) {
        Some(1)
    } else if ["mid", "intermediate"].iter().any(|w| text.contains(w)) {
        Some(3)
    } else if text.contains("senior") {
        Some(6)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(text: &str) -> ResumeHints {
        infer_hints(text, &ResumeKnowledge::seeded())
    }

    #[test]
    fn test_primary_skill_maps_to_role() {
        let h = hints("We need a React developer with 4+ years of experience in Pune");
        assert_eq!(h.role, "frontend engineer");
        assert_eq!(h.location, "india");
        assert_eq!(h.years, Some(4));
    }

    #[test]
    fn test_skill_order_prefers_earlier_keywords() {
        // "javascript" contains "java" but is scanned first.
        assert_eq!(hints("Strong JavaScript skills").role, "frontend engineer");
        assert_eq!(hints("Java and Spring").role, "software engineer");
        assert_eq!(hints("AWS Lambda pipelines").role, "cloud engineer");
    }

    #[test]
    fn test_defaults_without_signals() {
        let h = hints("Looking for a motivated teammate");
        assert_eq!(h.role, DEFAULT_ROLE);
        assert_eq!(h.location, "");
        assert_eq!(h.years, None);
    }

    #[test]
    fn test_years_patterns() {
        assert_eq!(infer_years("3 yrs minimum"), Some(3));
        assert_eq!(infer_years("10+ years"), Some(10));
        assert_eq!(infer_years("1 year of python"), Some(1));
    }

    #[test]
    fn test_seniority_fallbacks() {
        assert_eq!(infer_years("entry level role"), Some(1));
        assert_eq!(infer_years("intermediate engineer"), Some(3));
        assert_eq!(infer_years("senior engineer"), Some(6));
    }
}
