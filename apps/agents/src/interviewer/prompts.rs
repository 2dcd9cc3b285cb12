// Prompt templates for the mock interviewer.

/// Replace: {target_role}, {industry}, {count}, {job_title}, {experience}, {skills},
/// {interview_type}, {rag_hints}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are an expert interviewer for {target_role} in {industry}.
Generate {count} challenging interview questions.
Profile:
- Job title: {job_title}
- Experience: {experience} years
- Skills: {skills}
- Interview type: {interview_type}

Focus areas (RAG): {rag_hints}

Guidelines:
- Include at least one DSA or algorithmic question for technical roles
- Include system design when appropriate
- Questions only; no numbering; each on a new line; end with '?'"#;

/// Replace: {question}, {response}, {target_role}, {industry}, {experience}, {skills},
/// {interview_type}, {technical_key}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following candidate response.
Question: "{question}"
Response: "{response}"
Profile:
- Role: {target_role}
- Industry: {industry}
- Experience: {experience} years
- Skills: {skills}
- Interview type: {interview_type}

Return JSON with keys: clarity, confidence, relevance, completeness{technical_key}, strengths[], weaknesses[], suggestions
Only return raw JSON."#;

/// Replace: {target_role}, {experience}, {skills}, {transcript}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Generate overall interview feedback for role {target_role}.
Candidate experience: {experience} years. Skills: {skills}.
Data:
{transcript}

Return raw JSON with keys: overallScore, strengths[], areasForImprovement[], recommendations[], summary."#;

pub const CHAT_USAGE: &str = "Send one of the following commands as JSON:\n\
    QUESTIONS: {\"profile\": {...}, \"count\": 5}\n\
    ANALYZE: {\"profile\": {...}, \"question\": \"...\", \"response\": \"...\"}\n\
    FEEDBACK: {\"profile\": {...}, \"questions\": [...], \"responses\": [...], \"analyses\": [...]}";
