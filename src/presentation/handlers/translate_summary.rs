use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{AiProvider, TextExtractor};
use crate::domain::{Language, OwnerId, SummaryId};
use crate::presentation::state::AppState;

use super::{log_pipeline_error, status_for, ErrorResponse};

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub language: String,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub language: Language,
    pub translated_text: String,
}

#[tracing::instrument(skip(state, request), fields(owner = %owner, summary_id = %id))]
pub async fn translate_summary_handler<E, P>(
    State(state): State<AppState<E, P>>,
    Extension(owner): Extension<OwnerId>,
    Path(id): Path<Uuid>,
    Json(request): Json<TranslateRequest>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    P: AiProvider + 'static,
{
    // The language set is closed; reject anything else before the pipeline
    // (and therefore the provider) is involved.
    let language = match request.language.parse::<Language>() {
        Ok(l) => l,
        Err(_) => {
            tracing::warn!(language = %request.language, "Unsupported translation language");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!(
                        "unsupported language: {} (supported: {})",
                        request.language,
                        Language::ALL.map(|l| l.as_str()).join(", ")
                    ),
                }),
            )
                .into_response();
        }
    };

    let id = SummaryId::from_uuid(id);

    match state.pipeline.translate_summary(&owner, id, language).await {
        Ok(translation) => (
            StatusCode::OK,
            Json(TranslateResponse {
                language: translation.language,
                translated_text: translation.translated_text,
            }),
        )
            .into_response(),
        Err(e) => {
            log_pipeline_error(&e, "translate_summary");
            (
                status_for(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
