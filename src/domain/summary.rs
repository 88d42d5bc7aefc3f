use chrono::{DateTime, Utc};

use super::{Language, OwnerId, StorageKey, SummaryId};

/// One generated summary of one uploaded policy document.
///
/// `summarized_text` is written exactly once, at creation. The translation
/// slot holds at most one cached translation; requesting a different language
/// replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub id: SummaryId,
    pub owner: OwnerId,
    pub title: String,
    pub source_document: StorageKey,
    pub summarized_text: String,
    pub translation: Option<Translation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub language: Language,
    pub translated_text: String,
}

/// Fields supplied by the pipeline; id and timestamps are assigned by the
/// store gateway at persistence time.
#[derive(Debug, Clone)]
pub struct NewSummary {
    pub owner: OwnerId,
    pub title: String,
    pub source_document: StorageKey,
    pub summarized_text: String,
}
