//! Résumé text extraction.
//!
//! `PdfTextExtractor` wraps `pdf-extract`. Extraction is CPU-bound and the
//! library may panic on malformed input, so `extract_resume_text` runs it inside
//! `tokio::task::spawn_blocking` and treats a panicked task as a failed extraction.

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF could not be parsed: {0}")]
    Pdf(String),

    #[error("document contains no extractable text")]
    NoText,

    #[error("extraction task failed: {0}")]
    Task(String),
}

/// Turns an uploaded document into plain text.
pub trait ResumeTextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

pub struct PdfTextExtractor;

impl ResumeTextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
        join_pages(pages)
    }
}

/// Joins page texts in order with `\n`, skipping pages that yielded no text.
/// Whitespace-only pages still count as text.
pub fn join_pages<I, S>(pages: I) -> Result<String, ExtractionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = pages
        .into_iter()
        .map(|page| page.as_ref().to_string())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if text.is_empty() {
        Err(ExtractionError::NoText)
    } else {
        Ok(text)
    }
}

/// Runs the extractor on the blocking pool.
pub async fn extract_resume_text(
    extractor: Arc<dyn ResumeTextExtractor>,
    bytes: Bytes,
) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
}
