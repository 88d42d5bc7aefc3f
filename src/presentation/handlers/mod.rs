mod create_summary;
mod delete_summary;
mod health;
mod list_summaries;
mod translate_summary;

pub use create_summary::create_summary_handler;
pub use delete_summary::delete_summary_handler;
pub use health::health_handler;
pub use list_summaries::list_summaries_handler;
pub use translate_summary::translate_summary_handler;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::PipelineError;
use crate::domain::{Language, Summary, SummaryId};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub id: SummaryId,
    pub title: String,
    pub summarized_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<TranslationResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct TranslationResponse {
    pub language: Language,
    pub translated_text: String,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            summarized_text: summary.summarized_text,
            translation: summary.translation.map(|t| TranslationResponse {
                language: t.language,
                translated_text: t.translated_text,
            }),
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}

/// Shared pipeline-error to status mapping. Ownership violations surface as
/// 404 so callers cannot probe for other users' records.
pub(crate) fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::InvalidUpload(_) | PipelineError::Extraction(_) => StatusCode::BAD_REQUEST,
        PipelineError::EmptyDocument => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Summarization(_) | PipelineError::Translation(_) => StatusCode::BAD_GATEWAY,
        PipelineError::NotFound => StatusCode::NOT_FOUND,
        PipelineError::Storage(_) | PipelineError::Repository(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn log_pipeline_error(error: &PipelineError, operation: &str) {
    if status_for(error).is_server_error() {
        tracing::error!(error = %error, operation, "Pipeline operation failed");
    } else {
        tracing::warn!(error = %error, operation, "Pipeline operation rejected");
    }
}
