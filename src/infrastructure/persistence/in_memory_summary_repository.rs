use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{RepositoryError, SummaryRepository};
use crate::domain::{NewSummary, OwnerId, Summary, SummaryId, Translation};

/// In-process store used by the test suite and scaffold mode. Records are kept
/// in insertion order so most-recent-first listing stays stable even when two
/// creations land on the same timestamp.
#[derive(Default)]
pub struct InMemorySummaryRepository {
    records: RwLock<Vec<Summary>>,
}

impl InMemorySummaryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SummaryRepository for InMemorySummaryRepository {
    async fn create(&self, new: NewSummary) -> Result<Summary, RepositoryError> {
        let now = Utc::now();
        let summary = Summary {
            id: SummaryId::new(),
            owner: new.owner,
            title: new.title,
            source_document: new.source_document,
            summarized_text: new.summarized_text,
            translation: None,
            created_at: now,
            updated_at: now,
        };

        let mut records = self
            .records
            .write()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        records.push(summary.clone());

        Ok(summary)
    }

    async fn get(
        &self,
        id: SummaryId,
        owner: &OwnerId,
    ) -> Result<Option<Summary>, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(records
            .iter()
            .find(|s| s.id == id && s.owner == *owner)
            .cloned())
    }

    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Summary>, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(records
            .iter()
            .rev()
            .filter(|s| s.owner == *owner)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: SummaryId, owner: &OwnerId) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let before = records.len();
        records.retain(|s| !(s.id == id && s.owner == *owner));

        if records.len() == before {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn attach_translation(
        &self,
        id: SummaryId,
        owner: &OwnerId,
        translation: Translation,
    ) -> Result<Summary, RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let summary = records
            .iter_mut()
            .find(|s| s.id == id && s.owner == *owner)
            .ok_or(RepositoryError::NotFound)?;

        summary.translation = Some(translation);
        summary.updated_at = Utc::now();

        Ok(summary.clone())
    }
}
