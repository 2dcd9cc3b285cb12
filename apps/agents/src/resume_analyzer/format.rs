//! Plain-text rendering of an analysis for chat replies.

use std::fmt::Display;

use super::models::AnalysisResult;

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn text_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn non_empty(link: Option<&String>) -> Option<&str> {
    link.map(String::as_str).filter(|l| !l.is_empty())
}

pub fn format_analysis(analysis: &AnalysisResult) -> String {
    let mut lines = vec![
        format!("ATS Score: {}", or_dash(analysis.ats_score)),
        format!("Format Score: {}", or_dash(analysis.format_score)),
        format!("Keyword Count: {}", or_dash(analysis.keyword_count)),
        format!("Years of Experience: {}", or_dash(analysis.years_of_experience)),
        format!("Education: {}", or_dash(analysis.education_level.as_deref())),
        format!("Job Match Score: {}", or_dash(analysis.job_match_score)),
        format!("Skills: {}", analysis.skills.join(", ")),
    ];

    if !analysis.score_breakdown.is_empty() {
        lines.push("\nScore Breakdown:".to_string());
        for item in &analysis.score_breakdown {
            lines.push(format!(
                "- {}: {} - {}",
                text_or_dash(&item.category),
                or_dash(item.score),
                item.description
            ));
        }
    }

    if !analysis.improvement_suggestions.is_empty() {
        lines.push("\nImprovement Suggestions:".to_string());
        for s in &analysis.improvement_suggestions {
            let examples = if s.examples.is_empty() {
                String::new()
            } else {
                format!(" Examples: {}", s.examples.join("; "))
            };
            lines.push(format!(
                "- [{}] {} ({}): {}{}",
                text_or_dash(&s.priority),
                text_or_dash(&s.title),
                text_or_dash(&s.section),
                s.description,
                examples
            ));
        }
    }

    if !analysis.job_recommendations.is_empty() {
        lines.push("\nJob Recommendations:".to_string());
        for job in &analysis.job_recommendations {
            lines.push(format!(
                " - {} at {} ({})",
                text_or_dash(&job.title),
                text_or_dash(&job.company),
                text_or_dash(&job.location)
            ));
            if let Some(pct) = job.match_percentage {
                lines.push(format!("   Match: {pct}%"));
            }
            if let Some(link) = non_empty(job.link.as_ref()).or(non_empty(job.source_link.as_ref())) {
                lines.push(format!("   Link: {link}"));
            }
        }
    }

    if !analysis.web_job_search.is_empty() {
        lines.push("\nWeb Search Jobs:".to_string());
        for job in &analysis.web_job_search {
            lines.push(format!(
                " - {} at {} ({})",
                text_or_dash(&job.title),
                text_or_dash(&job.company),
                text_or_dash(&job.location)
            ));
            if let Some(link) = non_empty(job.link.as_ref()) {
                lines.push(format!("   Link: {link}"));
            }
        }
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume_analyzer::models::{
        ImprovementSuggestion, JobRecommendation, ScoreBreakdown, WebJob,
    };

    #[test]
    fn test_header_uses_dash_for_missing_values() {
        let text = format_analysis(&AnalysisResult::default());
        assert_eq!(
            text,
            "ATS Score: -\nFormat Score: -\nKeyword Count: -\nYears of Experience: -\n\
             Education: -\nJob Match Score: -\nSkills:"
        );
    }

    #[test]
    fn test_full_report() {
        let analysis = AnalysisResult {
            ats_score: Some(82.0),
            format_score: Some(74.5),
            skills: vec!["Rust".into(), "Go".into()],
            score_breakdown: vec![ScoreBreakdown {
                category: "Content".into(),
                score: Some(80.0),
                description: "Strong impact statements".into(),
            }],
            improvement_suggestions: vec![ImprovementSuggestion {
                title: "Quantify results".into(),
                description: "Add numbers".into(),
                section: "Experience".into(),
                priority: "high".into(),
                examples: vec!["Cut p99 by 40%".into(), "Saved $20k".into()],
            }],
            job_recommendations: vec![JobRecommendation {
                id: 1,
                title: "Rust Engineer".into(),
                company: "Acme".into(),
                location: "Austin, TX".into(),
                match_percentage: Some(70),
                link: Some(String::new()),
                source_link: Some("https://acme.jobs/1".into()),
                ..JobRecommendation::default()
            }],
            web_job_search: vec![WebJob {
                title: "Backend Engineer".into(),
                location: "Pune, India".into(),
                link: Some("https://jobs.example/2".into()),
                ..WebJob::default()
            }],
            ..AnalysisResult::default()
        };

        let text = format_analysis(&analysis);
        assert!(text.starts_with("ATS Score: 82\nFormat Score: 74.5\n"));
        assert!(text.contains("Skills: Rust, Go"));
        assert!(text.contains("\n\nScore Breakdown:\n- Content: 80 - Strong impact statements"));
        assert!(text.contains(
            "- [high] Quantify results (Experience): Add numbers Examples: Cut p99 by 40%; Saved $20k"
        ));
        assert!(text.contains(" - Rust Engineer at Acme (Austin, TX)\n   Match: 70%\n   Link: https://acme.jobs/1"));
        assert!(text.ends_with(" - Backend Engineer at - (Pune, India)\n   Link: https://jobs.example/2"));
    }
}
