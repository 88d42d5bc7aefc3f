use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use policybrief::application::ports::{
    AiProvider, AiProviderError, BlobStore, BlobStoreError, TextExtractor, TextExtractorError,
};
use policybrief::application::services::{PipelineError, SummaryPipeline};
use policybrief::domain::{ContentType, Language, OwnerId, StorageKey, UploadedDocument};
use policybrief::infrastructure::persistence::InMemorySummaryRepository;

const TEST_MAX_UPLOAD_BYTES: u64 = 1024;

struct Utf8Extractor;

#[async_trait::async_trait]
impl TextExtractor for Utf8Extractor {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &UploadedDocument,
    ) -> Result<String, TextExtractorError> {
        String::from_utf8(data.to_vec())
            .map_err(|e| TextExtractorError::ExtractionFailed(e.to_string()))
    }
}

struct ScriptedProvider {
    calls: AtomicUsize,
    response: String,
    fail_after: Option<usize>,
}

impl ScriptedProvider {
    fn new(response: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: response.to_string(),
            fail_after: None,
        }
    }

    /// Succeeds for the first `successes` calls, then errors.
    fn failing_after(response: &str, successes: usize) -> Self {
        Self {
            fail_after: Some(successes),
            ..Self::new(response)
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AiProvider for ScriptedProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, AiProviderError> {
        let call_index = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_after.is_some_and(|successes| call_index >= successes) {
            return Err(AiProviderError::ApiRequestFailed(
                "mock provider outage".to_string(),
            ));
        }
        Ok(self.response.clone())
    }
}

#[derive(Default)]
struct RecordingBlobStore {
    stored: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl BlobStore for RecordingBlobStore {
    async fn put(&self, key: &StorageKey, _data: Bytes) -> Result<(), BlobStoreError> {
        self.stored.lock().unwrap().push(key.as_str().to_string());
        Ok(())
    }

    async fn delete(&self, key: &StorageKey) -> Result<(), BlobStoreError> {
        self.deleted.lock().unwrap().push(key.as_str().to_string());
        Ok(())
    }
}

struct Fixture {
    pipeline: SummaryPipeline<Utf8Extractor, ScriptedProvider>,
    provider: Arc<ScriptedProvider>,
    blob_store: Arc<RecordingBlobStore>,
}

fn fixture_with(provider: ScriptedProvider) -> Fixture {
    let provider = Arc::new(provider);
    let blob_store = Arc::new(RecordingBlobStore::default());

    let pipeline = SummaryPipeline::new(
        Arc::new(Utf8Extractor),
        Arc::clone(&provider),
        Arc::new(InMemorySummaryRepository::new()),
        Arc::clone(&blob_store) as Arc<dyn BlobStore>,
        TEST_MAX_UPLOAD_BYTES,
    );

    Fixture {
        pipeline,
        provider,
        blob_store,
    }
}

fn fixture() -> Fixture {
    fixture_with(ScriptedProvider::new("Generated summary"))
}

fn pdf(filename: &str) -> UploadedDocument {
    UploadedDocument::new(filename.to_string(), ContentType::Pdf, 0)
}

fn owner(name: &str) -> OwnerId {
    OwnerId::new(name)
}

#[tokio::test]
async fn given_valid_upload_when_creating_then_record_and_blob_are_stored() {
    let f = fixture();

    let stored = f
        .pipeline
        .create_summary(
            owner("user-a"),
            pdf("tariff-policy.pdf"),
            Bytes::from_static(b"Policy X reduces tariffs."),
        )
        .await
        .unwrap();

    assert_eq!(stored.title, "tariff-policy");
    assert_eq!(stored.summarized_text, "Generated summary");
    assert!(stored.translation.is_none());

    let blobs = f.blob_store.stored.lock().unwrap();
    assert_eq!(blobs.len(), 1);
    assert!(blobs[0].ends_with("/tariff-policy.pdf"));
}

#[tokio::test]
async fn given_oversized_upload_when_creating_then_rejected_before_extraction() {
    let f = fixture();
    let oversized = vec![b'a'; (TEST_MAX_UPLOAD_BYTES + 1) as usize];

    let result = f
        .pipeline
        .create_summary(owner("user-a"), pdf("big.pdf"), Bytes::from(oversized))
        .await;

    assert!(matches!(result, Err(PipelineError::InvalidUpload(_))));
    assert_eq!(f.provider.call_count(), 0);
}

#[tokio::test]
async fn given_whitespace_only_text_when_creating_then_empty_document_and_nothing_stored() {
    let f = fixture();

    let result = f
        .pipeline
        .create_summary(
            owner("user-a"),
            pdf("blank.pdf"),
            Bytes::from_static(b" \n \t "),
        )
        .await;

    assert!(matches!(result, Err(PipelineError::EmptyDocument)));
    assert_eq!(f.provider.call_count(), 0);
    assert!(f.blob_store.stored.lock().unwrap().is_empty());

    let listed = f.pipeline.list_summaries(&owner("user-a")).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn given_blank_completion_when_creating_then_summarization_fails() {
    let f = fixture_with(ScriptedProvider::new("   "));

    let result = f
        .pipeline
        .create_summary(
            owner("user-a"),
            pdf("policy.pdf"),
            Bytes::from_static(b"Some policy text."),
        )
        .await;

    assert!(matches!(result, Err(PipelineError::Summarization(_))));

    let listed = f.pipeline.list_summaries(&owner("user-a")).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn given_same_language_twice_when_translating_then_one_provider_call() {
    let f = fixture();
    let user = owner("user-a");

    let stored = f
        .pipeline
        .create_summary(
            user.clone(),
            pdf("policy.pdf"),
            Bytes::from_static(b"Policy X reduces tariffs."),
        )
        .await
        .unwrap();
    let calls_after_create = f.provider.call_count();

    let first = f
        .pipeline
        .translate_summary(&user, stored.id, Language::Hindi)
        .await
        .unwrap();
    let second = f
        .pipeline
        .translate_summary(&user, stored.id, Language::Hindi)
        .await
        .unwrap();

    assert_eq!(first.translated_text, second.translated_text);
    assert_eq!(f.provider.call_count(), calls_after_create + 1);
}

#[tokio::test]
async fn given_new_language_when_translating_then_previous_cache_is_discarded() {
    let f = fixture();
    let user = owner("user-a");

    let stored = f
        .pipeline
        .create_summary(
            user.clone(),
            pdf("policy.pdf"),
            Bytes::from_static(b"Policy X reduces tariffs."),
        )
        .await
        .unwrap();

    f.pipeline
        .translate_summary(&user, stored.id, Language::Hindi)
        .await
        .unwrap();
    f.pipeline
        .translate_summary(&user, stored.id, Language::Bengali)
        .await
        .unwrap();

    let listed = f.pipeline.list_summaries(&user).await.unwrap();
    let translation = listed[0].translation.as_ref().unwrap();
    assert_eq!(translation.language, Language::Bengali);
}

#[tokio::test]
async fn given_provider_outage_when_translating_then_cached_slot_survives() {
    // Create and the Hindi translate succeed; every call after that errors.
    let f = fixture_with(ScriptedProvider::failing_after("Generated summary", 2));
    let user = owner("user-a");

    let stored = f
        .pipeline
        .create_summary(
            user.clone(),
            pdf("policy.pdf"),
            Bytes::from_static(b"Policy X reduces tariffs."),
        )
        .await
        .unwrap();

    let hindi = f
        .pipeline
        .translate_summary(&user, stored.id, Language::Hindi)
        .await
        .unwrap();

    let result = f
        .pipeline
        .translate_summary(&user, stored.id, Language::Tamil)
        .await;
    assert!(matches!(result, Err(PipelineError::Translation(_))));

    let listed = f.pipeline.list_summaries(&user).await.unwrap();
    let translation = listed[0].translation.as_ref().unwrap();
    assert_eq!(translation.language, Language::Hindi);
    assert_eq!(translation.translated_text, hindi.translated_text);
}

#[tokio::test]
async fn given_foreign_summary_when_translating_then_not_found() {
    let f = fixture();

    let stored = f
        .pipeline
        .create_summary(
            owner("user-a"),
            pdf("policy.pdf"),
            Bytes::from_static(b"Policy X reduces tariffs."),
        )
        .await
        .unwrap();
    let calls_after_create = f.provider.call_count();

    let result = f
        .pipeline
        .translate_summary(&owner("user-b"), stored.id, Language::Hindi)
        .await;

    assert!(matches!(result, Err(PipelineError::NotFound)));
    assert_eq!(f.provider.call_count(), calls_after_create);
}

#[tokio::test]
async fn given_own_summary_when_deleting_then_blob_is_cleared_too() {
    let f = fixture();
    let user = owner("user-a");

    let stored = f
        .pipeline
        .create_summary(
            user.clone(),
            pdf("policy.pdf"),
            Bytes::from_static(b"Policy X reduces tariffs."),
        )
        .await
        .unwrap();

    f.pipeline.delete_summary(&user, stored.id).await.unwrap();

    let listed = f.pipeline.list_summaries(&user).await.unwrap();
    assert!(listed.is_empty());

    let deleted = f.blob_store.deleted.lock().unwrap();
    assert_eq!(deleted.as_slice(), [stored.source_document.as_str()]);
}

#[tokio::test]
async fn given_foreign_summary_when_deleting_then_not_found() {
    let f = fixture();

    let stored = f
        .pipeline
        .create_summary(
            owner("user-a"),
            pdf("policy.pdf"),
            Bytes::from_static(b"Policy X reduces tariffs."),
        )
        .await
        .unwrap();

    let result = f.pipeline.delete_summary(&owner("user-b"), stored.id).await;

    assert!(matches!(result, Err(PipelineError::NotFound)));
    assert!(f.blob_store.deleted.lock().unwrap().is_empty());
}
