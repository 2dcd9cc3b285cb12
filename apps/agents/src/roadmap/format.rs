//! Markdown rendering of a roadmap for chat replies.

use super::models::Roadmap;

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

pub fn format_roadmap_markdown(roadmap: &Roadmap) -> String {
    let mut lines = vec![format!("# {}", or_default(&roadmap.title, "Learning Roadmap"))];

    if !roadmap.description.is_empty() {
        lines.push(String::new());
        lines.push(roadmap.description.clone());
    }

    if !roadmap.milestones.is_empty() {
        lines.push(String::new());
        lines.push("## Milestones (Weekly)".to_string());
        for m in &roadmap.milestones {
            let mut header = format!("- **{}**", or_default(&m.title, "Milestone"));
            if !m.duration.is_empty() {
                header.push_str(&format!(" ({})", m.duration));
            }
            header.push_str(&format!(" — {}", or_default(&m.kind, "learning")));
            lines.push(header);

            if !m.description.is_empty() {
                lines.push(format!("  - {}", m.description));
            }
            lines.extend(m.tasks.iter().map(|t| format!("  - [ ] {t}")));
        }
    }

    if !roadmap.resources.is_empty() {
        lines.push(String::new());
        lines.push("## Resources".to_string());
        for r in &roadmap.resources {
            let title = or_default(&r.title, "Resource");
            let badge = format!(
                "`{}` · `{}`",
                or_default(&r.kind, "website"),
                or_default(&r.level, "beginner")
            );
            match r.url.as_deref().filter(|u| !u.is_empty()) {
                Some(url) => lines.push(format!("- [{title}]({url}) {badge}")),
                None => lines.push(format!("- {title} {badge}")),
            }
            if !r.description.is_empty() {
                lines.push(format!("  - {}", r.description));
            }
        }
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::models::{Milestone, Resource};

    #[test]
    fn test_markdown_layout() {
        let roadmap = Roadmap {
            title: "Rust in 1 month".into(),
            description: "From ownership to async.".into(),
            milestones: vec![Milestone {
                title: "Ownership".into(),
                kind: "learning".into(),
                description: "Borrowing rules".into(),
                duration: "Week 1".into(),
                tasks: vec!["Read chapter 4".into(), "Fix borrowck errors".into()],
            }],
            resources: vec![
                Resource {
                    title: "The Book".into(),
                    kind: "book".into(),
                    url: Some("https://doc.rust-lang.org/book/".into()),
                    level: "beginner".into(),
                    description: "Official guide".into(),
                    ..Resource::default()
                },
                Resource {
                    title: "Local meetup".into(),
                    ..Resource::default()
                },
            ],
        };

        let expected = "# Rust in 1 month\n\
            \n\
            From ownership to async.\n\
            \n\
            ## Milestones (Weekly)\n\
            - **Ownership** (Week 1) — learning\n  \
            - Borrowing rules\n  \
            - [ ] Read chapter 4\n  \
            - [ ] Fix borrowck errors\n\
            \n\
            ## Resources\n\
            - [The Book](https://doc.rust-lang.org/book/) `book` · `beginner`\n  \
            - Official guide\n\
            - Local meetup `website` · `beginner`";
        assert_eq!(format_roadmap_markdown(&roadmap), expected);
    }

    #[test]
    fn test_empty_roadmap_has_default_title() {
        let roadmap = Roadmap {
            title: String::new(),
            description: String::new(),
            milestones: vec![],
            resources: vec![],
        };
        assert_eq!(format_roadmap_markdown(&roadmap), "# Learning Roadmap");
    }
}
