// Prompt constants for the resume generator.

pub const RESUME_SYSTEM: &str = "You are a professional resume writer who creates tailored resumes \
    in plain text format suitable for PDF export. Ensure clear headings and bullet points.";

/// Replace: {role}, {years}, {location}, {job_description}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are a professional resume writer who creates tailored resumes from job descriptions.
Generate a customized resume optimized for ATS with these sections:
- Professional Summary
- Experience
- Skills
- Contact Information
- Certifications

Tailoring hints:
- Target role: {role}
- Years of experience to emphasize: {years}
- Location context: {location}

Formatting requirements:
- Use clear headings and concise bullet points
- Quantify impact with metrics where possible
- Avoid tables; output plain text suitable for PDF export

Job Description:
{job_description}"#;
