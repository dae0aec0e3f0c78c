use std::sync::Arc;

use crate::extraction::SectionCatalog;
use crate::llm_client::LlmClient;

/// Shared application state injected into route handlers via axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Built-in section catalog, immutable for the process lifetime.
    pub catalog: Arc<SectionCatalog>,
}
