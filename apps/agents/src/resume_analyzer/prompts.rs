// Prompt constants for the resume analyzer.

pub const ANALYZER_SYSTEM: &str = "You are an expert ATS and resume analyzer.";

/// Replace: {resume_text}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert ATS and resume analyzer. Analyze the provided resume and return a JSON object
conforming to the following TypeScript interface:

interface AnalysisResultType {
  atsScore: number;
  formatScore: number;
  keywordCount: number;
  yearsOfExperience: number;
  educationLevel: string;
  jobMatchScore: number;
  skills: string[];
  scoreBreakdown: { category: string; score: number; description: string }[];
  improvementSuggestions: {
    title: string;
    description: string;
    section: string;
    priority: "high" | "medium" | "low";
    examples?: string[]
  }[];
  jobRecommendations: {
    id: number;
    title: string;
    company: string;
    location: string;
    description: string;
    matchPercentage: number;
    skills: string[];
    link?: string;
    salary?: { min: number; median: number; max: number };
    sourceLink?: string
  }[];
}

Resume:
{resume_text}

Instructions:
- Return response as JSON wrapped in markdown code block (```json\n{...}\n```)
- Calculate ATS score (0-100) based on keyword usage, formatting, and clarity
- Calculate format score (0-100) based on structure and readability
- Count relevant keywords for software engineering roles
- Estimate years of experience from work history
- Identify highest education level
- Calculate job match score (0-100) for software engineering roles
- List all detected skills
- Provide score breakdown for Content, Structure, and Keywords
- Suggest at least 3 improvements with priorities and examples
- Include placeholder job recommendations
- Use reasonable defaults for undetermined fields"#;

pub const WEB_JOBS_SYSTEM: &str = "Be precise and concise. Return ONLY a JSON array named jobs with items of the form \
    {title, company, location, link, description?, salary?}.";

/// Replace: {query}
pub const WEB_JOBS_PROMPT_TEMPLATE: &str = "Find 3-5 current software job openings for: {query}. \
    Prefer reputable sources. Return just the JSON array without extra text.";

pub const PROFILE_SYSTEM: &str = "You are an expert resume analyzer. Extract key information \
and return it in a structured JSON format.";

/// Replace: {resume_text}
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"Analyze this resume text and extract:
1. Name
2. Email
3. Current job title
4. Years of experience
5. Skills (comma-separated string)
6. Target role (if mentioned, otherwise infer based on experience)
7. Industry (if mentioned, otherwise infer based on experience)
8. Education
9. Certifications

Resume text: {resume_text}

Return the analysis as a JSON object with the structure:
{
  "name": string,
  "email": string,
  "jobTitle": string,
  "yearsOfExperience": number,
  "skills": string,
  "targetRole": string,
  "industry": string,
  "education": string[],
  "certifications": string[]
}
Ensure the response contains only the JSON object, without markdown or code block formatting."#;
