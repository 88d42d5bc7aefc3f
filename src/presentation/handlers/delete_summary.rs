use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{AiProvider, TextExtractor};
use crate::domain::{OwnerId, SummaryId};
use crate::presentation::state::AppState;

use super::{log_pipeline_error, status_for, ErrorResponse};

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[tracing::instrument(skip(state), fields(owner = %owner, summary_id = %id))]
pub async fn delete_summary_handler<E, P>(
    State(state): State<AppState<E, P>>,
    Extension(owner): Extension<OwnerId>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    P: AiProvider + 'static,
{
    let id = SummaryId::from_uuid(id);

    match state.pipeline.delete_summary(&owner, id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                message: "summary deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            log_pipeline_error(&e, "delete_summary");
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
