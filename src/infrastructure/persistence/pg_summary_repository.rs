use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, SummaryRepository};
use crate::domain::{
    Language, NewSummary, OwnerId, StorageKey, Summary, SummaryId, Translation,
};

pub struct PgSummaryRepository {
    pool: PgPool,
}

impl PgSummaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn summary_from_row(row: &PgRow) -> Result<Summary, RepositoryError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let owner: String = row
        .try_get("owner")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let source_document: String = row
        .try_get("source_document")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let summarized_text: String = row
        .try_get("summarized_text")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let translation_language: Option<String> = row
        .try_get("translation_language")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let translation_text: Option<String> = row
        .try_get("translation_text")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    let translation = match (translation_language, translation_text) {
        (Some(language), Some(translated_text)) => Some(Translation {
            language: language
                .parse::<Language>()
                .map_err(RepositoryError::QueryFailed)?,
            translated_text,
        }),
        _ => None,
    };

    Ok(Summary {
        id: SummaryId::from_uuid(id),
        owner: OwnerId::new(owner),
        title,
        source_document: StorageKey::from_raw(source_document),
        summarized_text,
        translation,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl SummaryRepository for PgSummaryRepository {
    #[instrument(skip(self, new), fields(owner = %new.owner))]
    async fn create(&self, new: NewSummary) -> Result<Summary, RepositoryError> {
        let id = SummaryId::new();
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO summaries
                (id, owner, title, source_document, summarized_text, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, owner, title, source_document, summarized_text,
                      translation_language, translation_text, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(new.owner.as_str())
        .bind(&new.title)
        .bind(new.source_document.as_str())
        .bind(&new.summarized_text)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        summary_from_row(&row)
    }

    #[instrument(skip(self), fields(summary_id = %id, owner = %owner))]
    async fn get(
        &self,
        id: SummaryId,
        owner: &OwnerId,
    ) -> Result<Option<Summary>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner, title, source_document, summarized_text,
                   translation_language, translation_text, created_at, updated_at
            FROM summaries
            WHERE id = $1 AND owner = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.as_ref().map(summary_from_row).transpose()
    }

    #[instrument(skip(self), fields(owner = %owner))]
    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Summary>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner, title, source_document, summarized_text,
                   translation_language, translation_text, created_at, updated_at
            FROM summaries
            WHERE owner = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(summary_from_row).collect()
    }

    #[instrument(skip(self), fields(summary_id = %id, owner = %owner))]
    async fn delete(&self, id: SummaryId, owner: &OwnerId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM summaries WHERE id = $1 AND owner = $2")
            .bind(id.as_uuid())
            .bind(owner.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    #[instrument(skip(self, translation), fields(summary_id = %id, owner = %owner, language = %translation.language))]
    async fn attach_translation(
        &self,
        id: SummaryId,
        owner: &OwnerId,
        translation: Translation,
    ) -> Result<Summary, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE summaries
            SET translation_language = $1,
                translation_text = $2,
                updated_at = $3
            WHERE id = $4 AND owner = $5
            RETURNING id, owner, title, source_document, summarized_text,
                      translation_language, translation_text, created_at, updated_at
            "#,
        )
        .bind(translation.language.as_str())
        .bind(&translation.translated_text)
        .bind(Utc::now())
        .bind(id.as_uuid())
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(row) => summary_from_row(&row),
            None => Err(RepositoryError::NotFound),
        }
    }
}
