//! Cover letter generation — orchestrates the pipeline.
//!
//! Flow: extract CV sections → render prompt → LLM call → letter text.
//! The extracted mapping is returned alongside the letter so the caller
//! can see what the letter was grounded on.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_all, ExtractedSections, SectionCatalog};
use crate::letter::prompts::{LETTER_PROMPT_TEMPLATE, LETTER_SYSTEM, SECTION_NOT_LISTED};
use crate::llm_client::LlmClient;

/// Request body for letter generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateLetterRequest {
    pub cv_text: String,
    pub job_description: String,
}

/// Response from the generation pipeline.
#[derive(Debug, Serialize)]
pub struct GenerateLetterResponse {
    pub cover_letter: String,
    /// The extracted section mapping, passed through unmodified.
    pub sections: ExtractedSections,
}

/// Runs the full generation pipeline.
///
/// Extraction cannot fail: an unrecognizable CV degrades to an
/// all-not-found mapping and the letter leans on the job description.
pub async fn generate_letter(
    llm: &LlmClient,
    catalog: &SectionCatalog,
    request: GenerateLetterRequest,
) -> Result<GenerateLetterResponse, AppError> {
    let sections = extract_all(&request.cv_text, catalog);
    info!(
        "Extracted {}/{} CV sections",
        sections.found_count(),
        sections.len()
    );
    if sections.found_count() == 0 {
        warn!("No recognizable CV sections; letter will be grounded on the job description alone");
    }

    let prompt = build_letter_prompt(&sections, &request.job_description);

    let cover_letter = llm
        .complete(&prompt, LETTER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Letter generation failed: {e}")))?;

    info!("Generated cover letter ({} chars)", cover_letter.len());

    Ok(GenerateLetterResponse {
        cover_letter,
        sections,
    })
}

/// Fills the letter template with the rendered section block and the JD.
fn build_letter_prompt(sections: &ExtractedSections, job_description: &str) -> String {
    LETTER_PROMPT_TEMPLATE
        .replace("{not_listed}", SECTION_NOT_LISTED)
        .replace("{cv_sections}", &render_sections(sections))
        .replace("{job_description}", job_description)
}

/// Renders the mapping as labeled blocks in catalog order. Missing
/// sections carry an explicit marker so the model does not invent them.
fn render_sections(sections: &ExtractedSections) -> String {
    let mut block = String::new();
    for (name, content) in sections.iter() {
        block.push_str("== ");
        block.push_str(name);
        block.push_str(" ==\n");
        block.push_str(content.body().unwrap_or(SECTION_NOT_LISTED));
        block.push_str("\n\n");
    }
    block.trim_end().to_string()
}
