use std::sync::Arc;

use crate::analysis::extractor::ResumeTextExtractor;
use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data; each request works on its own values.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model client. Default: the Gemini `LlmClient`.
    pub model: Arc<dyn GenerativeModel>,
    /// Pluggable text extractor. Default: `PdfTextExtractor`.
    pub extractor: Arc<dyn ResumeTextExtractor>,
    pub config: Config,
}
