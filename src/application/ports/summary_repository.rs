use async_trait::async_trait;

use crate::domain::{NewSummary, OwnerId, Summary, SummaryId, Translation};

/// The sole sanctioned mutation point on persisted summaries. Every operation
/// is ownership-scoped: a record belonging to another owner behaves exactly
/// like a record that does not exist.
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Assigns id and timestamps, persists, returns the canonical stored form.
    async fn create(&self, new: NewSummary) -> Result<Summary, RepositoryError>;

    async fn get(
        &self,
        id: SummaryId,
        owner: &OwnerId,
    ) -> Result<Option<Summary>, RepositoryError>;

    /// Most-recent-first by creation time. Empty vec, never an error, for an
    /// owner with no records.
    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Summary>, RepositoryError>;

    async fn delete(&self, id: SummaryId, owner: &OwnerId) -> Result<(), RepositoryError>;

    /// Overwrites any existing translation slot and bumps `updated_at`.
    async fn attach_translation(
        &self,
        id: SummaryId,
        owner: &OwnerId,
        translation: Translation,
    ) -> Result<Summary, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("summary not found")]
    NotFound,
}
