mod ai_provider;
mod blob_store;
mod credential_verifier;
mod summary_repository;
mod text_extractor;

pub use ai_provider::{AiProvider, AiProviderError};
pub use blob_store::{BlobStore, BlobStoreError};
pub use credential_verifier::{CredentialError, CredentialVerifier};
pub use summary_repository::{RepositoryError, SummaryRepository};
pub use text_extractor::{TextExtractor, TextExtractorError};
