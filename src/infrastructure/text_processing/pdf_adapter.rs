use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, UploadedDocument};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF text extraction via `pdf-extract`, run on a blocking thread under a
/// hard timeout so a pathological file cannot stall the runtime.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, TextExtractorError> {
        pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename, bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, TextExtractorError> {
        if document.content_type != ContentType::Pdf {
            return Err(TextExtractorError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let owned = data.to_vec();
        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::debug!(page_count = pages.len(), "PDF text extraction complete");

        let sanitized: Vec<String> = pages
            .iter()
            .map(|p| sanitize_extracted_text(p))
            .filter(|t| !t.is_empty())
            .collect();

        if sanitized.is_empty() {
            return Err(TextExtractorError::NoTextFound(document.filename.clone()));
        }

        Ok(sanitized.join("\n\n"))
    }
}
