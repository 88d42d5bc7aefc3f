use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    AiProvider, BlobStore, BlobStoreError, RepositoryError, SummaryRepository, TextExtractor,
    TextExtractorError,
};
use crate::application::services::{
    Summarizer, SummarizerError, Translator, TranslatorError,
};
use crate::domain::{
    Language, NewSummary, OwnerId, StorageKey, Summary, SummaryId, Translation, UploadedDocument,
};

/// Request-level coordinator for the summarization and translation flows.
///
/// Creation is all-or-nothing: nothing is persisted until extraction and
/// summarization have both succeeded. Translation never overwrites a cached
/// result with a failure.
pub struct SummaryPipeline<E, P>
where
    E: TextExtractor,
    P: AiProvider,
{
    extractor: Arc<E>,
    summarizer: Summarizer<P>,
    translator: Translator<P>,
    repository: Arc<dyn SummaryRepository>,
    blob_store: Arc<dyn BlobStore>,
    max_upload_bytes: u64,
}

impl<E, P> SummaryPipeline<E, P>
where
    E: TextExtractor,
    P: AiProvider,
{
    pub fn new(
        extractor: Arc<E>,
        provider: Arc<P>,
        repository: Arc<dyn SummaryRepository>,
        blob_store: Arc<dyn BlobStore>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            extractor,
            summarizer: Summarizer::new(Arc::clone(&provider)),
            translator: Translator::new(provider),
            repository,
            blob_store,
            max_upload_bytes,
        }
    }

    #[tracing::instrument(skip(self, data), fields(owner = %owner, filename = %document.filename, bytes = data.len()))]
    pub async fn create_summary(
        &self,
        owner: OwnerId,
        document: UploadedDocument,
        data: Bytes,
    ) -> Result<Summary, PipelineError> {
        if data.is_empty() {
            return Err(PipelineError::InvalidUpload("empty upload".to_string()));
        }
        if data.len() as u64 > self.max_upload_bytes {
            return Err(PipelineError::InvalidUpload(format!(
                "file exceeds the {} byte limit",
                self.max_upload_bytes
            )));
        }

        let text = self
            .extractor
            .extract_text(&data, &document)
            .await
            .map_err(|e| match e {
                TextExtractorError::NoTextFound(_) => PipelineError::EmptyDocument,
                other => PipelineError::Extraction(other),
            })?;

        let draft = self
            .summarizer
            .summarize(&text, &document)
            .await
            .map_err(|e| match e {
                SummarizerError::EmptyDocument => PipelineError::EmptyDocument,
                other => PipelineError::Summarization(other),
            })?;

        let key = StorageKey::new(&document.filename);
        self.blob_store.put(&key, data).await?;

        let stored = match self
            .repository
            .create(NewSummary {
                owner,
                title: draft.title,
                source_document: key.clone(),
                summarized_text: draft.summarized_text,
            })
            .await
        {
            Ok(stored) => stored,
            Err(e) => {
                // The record is the source of truth; if it never made it in,
                // the stored binary must not linger.
                if let Err(cleanup) = self.blob_store.delete(&key).await {
                    tracing::warn!(error = %cleanup, key = %key, "Failed to clean up orphaned upload");
                }
                return Err(map_repository_error(e));
            }
        };

        tracing::info!(summary_id = %stored.id, "Summary created");
        Ok(stored)
    }

    #[tracing::instrument(skip(self), fields(owner = %owner, summary_id = %id, language = %language))]
    pub async fn translate_summary(
        &self,
        owner: &OwnerId,
        id: SummaryId,
        language: Language,
    ) -> Result<Translation, PipelineError> {
        let summary = self
            .repository
            .get(id, owner)
            .await
            .map_err(map_repository_error)?
            .ok_or(PipelineError::NotFound)?;

        // A cached translation for the requested language is served without
        // contacting the provider.
        if let Some(cached) = summary.translation.filter(|t| t.language == language) {
            tracing::debug!("Translation cache hit");
            return Ok(cached);
        }

        let translated_text = self
            .translator
            .translate(&summary.summarized_text, language)
            .await
            .map_err(PipelineError::Translation)?;

        let translation = Translation {
            language,
            translated_text,
        };

        self.repository
            .attach_translation(id, owner, translation.clone())
            .await
            .map_err(map_repository_error)?;

        tracing::info!("Translation attached");
        Ok(translation)
    }

    pub async fn list_summaries(&self, owner: &OwnerId) -> Result<Vec<Summary>, PipelineError> {
        self.repository
            .list_by_owner(owner)
            .await
            .map_err(map_repository_error)
    }

    #[tracing::instrument(skip(self), fields(owner = %owner, summary_id = %id))]
    pub async fn delete_summary(
        &self,
        owner: &OwnerId,
        id: SummaryId,
    ) -> Result<(), PipelineError> {
        let summary = self
            .repository
            .get(id, owner)
            .await
            .map_err(map_repository_error)?
            .ok_or(PipelineError::NotFound)?;

        self.repository
            .delete(id, owner)
            .await
            .map_err(map_repository_error)?;

        // Best effort: the record is already gone, a stale blob only wastes
        // space.
        if let Err(e) = self.blob_store.delete(&summary.source_document).await {
            tracing::warn!(error = %e, key = %summary.source_document, "Failed to delete stored document");
        }

        tracing::info!("Summary deleted");
        Ok(())
    }
}

fn map_repository_error(e: RepositoryError) -> PipelineError {
    match e {
        RepositoryError::NotFound => PipelineError::NotFound,
        other => PipelineError::Repository(other),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid upload: {0}")]
    InvalidUpload(String),
    #[error("extraction: {0}")]
    Extraction(TextExtractorError),
    #[error("document has no extractable text")]
    EmptyDocument,
    #[error("summarization: {0}")]
    Summarization(SummarizerError),
    #[error("translation: {0}")]
    Translation(TranslatorError),
    #[error("summary not found")]
    NotFound,
    #[error("storage: {0}")]
    Storage(#[from] BlobStoreError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}
