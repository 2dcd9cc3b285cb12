// Prompt template for roadmap generation.

/// Replace: {topic}, {level}, {timeframe}, {rag_hints}, {total_weeks}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a JSON roadmap for learning the educational topic {topic}.
Level: {level}. Timeframe: {timeframe}.
Focus exclusively on educational content, such as academic subjects, teaching methodologies, or educational technologies.
Incorporate where appropriate these RAG hints (subtopics/resources): {rag_hints}
Requirements for depth and quality:
- Provide exactly {total_weeks} weekly milestones. Include a mix of types: learning, project, assessment. At least 3 project milestones and 2 assessment milestones.
- Use duration values like "Week 1", "Week 2", ... "Week {total_weeks}".
- Each milestone must include 4-6 focused tasks (concise, < 18 words each).
- Projects must be practical and cumulative (e.g., build features, optimize performance, add tests).
- Assessments should include self-evaluation or timed practice with clear criteria.
- Resources should be high-quality and current. Prefer free where possible and include accurate URLs.

Output format (raw JSON only): {"title":"string","description":"string","milestones":[{"title":"string","type":"learning|project|assessment","description":"string","duration":"Week n","tasks":["string"]}],"resources":[{"title":"string","type":"website|course|video|repository","description":"string","url":"string","level":"beginner|intermediate|advanced","tags":["string"],"cost":"free|paid"}]}
Return ONLY raw JSON (no markdown, no code fences). Ensure valid JSON."#;
