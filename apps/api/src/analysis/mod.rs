// Résumé analysis: PDF text extraction → prompt → model call → schema-checked result.
// All model calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod prompts;
