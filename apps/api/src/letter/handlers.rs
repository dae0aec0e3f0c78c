//! Axum route handlers for the letter API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::{extract_all, ExtractedSections};
use crate::letter::generator::{generate_letter, GenerateLetterRequest, GenerateLetterResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractSectionsRequest {
    pub cv_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSectionsResponse {
    pub sections: ExtractedSections,
}

/// POST /api/v1/letters/extract-sections
///
/// Runs the extractor on its own and returns the mapping. Useful for
/// previewing what a letter would be grounded on before generating.
pub async fn handle_extract_sections(
    State(state): State<AppState>,
    Json(request): Json<ExtractSectionsRequest>,
) -> Result<Json<ExtractSectionsResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }

    let sections = extract_all(&request.cv_text, &state.catalog);

    Ok(Json(ExtractSectionsResponse { sections }))
}

/// POST /api/v1/letters/generate
///
/// Full pipeline: extract CV sections → build prompt → LLM → letter.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateLetterRequest>,
) -> Result<Json<GenerateLetterResponse>, AppError> {
    if request.cv_text.trim().is_empty() {
        return Err(AppError::Validation("cv_text cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let response = generate_letter(&state.llm, &state.catalog, request).await?;

    Ok(Json(response))
}
