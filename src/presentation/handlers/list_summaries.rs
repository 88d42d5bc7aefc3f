use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::application::ports::{AiProvider, TextExtractor};
use crate::domain::OwnerId;
use crate::presentation::state::AppState;

use super::{log_pipeline_error, status_for, ErrorResponse, SummaryResponse};

#[tracing::instrument(skip(state), fields(owner = %owner))]
pub async fn list_summaries_handler<E, P>(
    State(state): State<AppState<E, P>>,
    Extension(owner): Extension<OwnerId>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    P: AiProvider + 'static,
{
    match state.pipeline.list_summaries(&owner).await {
        Ok(summaries) => {
            tracing::debug!(count = summaries.len(), "Listed summaries");
            let body: Vec<SummaryResponse> =
                summaries.into_iter().map(SummaryResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            log_pipeline_error(&e, "list_summaries");
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
