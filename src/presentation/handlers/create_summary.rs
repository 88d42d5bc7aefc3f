use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::application::ports::{AiProvider, TextExtractor};
use crate::domain::{ContentType, OwnerId, UploadedDocument};
use crate::presentation::state::AppState;

use super::{log_pipeline_error, status_for, ErrorResponse, SummaryResponse};

/// Multipart field carrying the policy document.
pub const DOCUMENT_FIELD: &str = "document";

#[tracing::instrument(skip(state, multipart), fields(owner = %owner))]
pub async fn create_summary_handler<E, P>(
    State(state): State<AppState<E, P>>,
    Extension(owner): Extension<OwnerId>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    P: AiProvider + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some(DOCUMENT_FIELD) => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Create request without a document field");
                return bad_request(format!("missing multipart field '{}'", DOCUMENT_FIELD));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(format!("failed to read multipart body: {}", e));
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown.pdf").to_string();
    let mime = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let content_type = match ContentType::from_mime(&mime) {
        Some(ct) => ct,
        None => {
            tracing::warn!(content_type = %mime, "Rejected non-PDF upload");
            return bad_request(format!("unsupported content type: {}", mime));
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read uploaded file");
            return bad_request(format!("failed to read file: {}", e));
        }
    };

    let document = UploadedDocument::new(filename, content_type, data.len() as u64);

    match state.pipeline.create_summary(owner, document, data).await {
        Ok(summary) => (
            StatusCode::CREATED,
            Json(SummaryResponse::from(summary)),
        )
            .into_response(),
        Err(e) => {
            log_pipeline_error(&e, "create_summary");
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

fn bad_request(message: String) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}
