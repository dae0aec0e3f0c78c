// All LLM prompt constants for the letter module.

/// System prompt for letter generation — the reply must be the letter
/// itself, ready to send, nothing else.
pub const LETTER_SYSTEM: &str = "You are an expert career writer drafting \
    cover letters on behalf of a candidate. \
    Respond with the finished cover letter text ONLY. \
    Do NOT use markdown formatting or code fences. \
    Do NOT include explanations, preambles, or notes about your process. \
    Do NOT leave bracketed placeholders such as [Company Name]; if a detail \
    is unknown, write around it.";

/// Letter generation prompt template.
/// Replace `{cv_sections}` and `{job_description}` before sending.
pub const LETTER_PROMPT_TEMPLATE: &str = r#"Write a cover letter for the candidate below, tailored to the job description.

CANDIDATE CV SECTIONS (source of truth — only claim what appears here):
{cv_sections}

JOB DESCRIPTION:
{job_description}

Rules:
1. Ground every claim in the CV sections above — no invented employers, degrees, or skills
2. A section marked "{not_listed}" was absent from the CV; do not fabricate content for it
3. Address the strongest overlaps between the CV and the job description first
4. Three to four paragraphs, professional but not stiff, no bullet lists
5. Close with a short call to action"#;

/// Marker rendered for a catalog section the extractor could not find.
pub const SECTION_NOT_LISTED: &str = "(not listed in the CV)";
