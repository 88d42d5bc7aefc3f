use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::CredentialVerifier;
use crate::presentation::handlers::ErrorResponse;

/// Rejects requests without a valid bearer credential before any handler
/// runs; on success the resolved `OwnerId` is made available as a request
/// extension.
pub async fn auth_middleware(
    State(verifier): State<Arc<dyn CredentialVerifier>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let token = match token {
        Some(t) => t,
        None => {
            tracing::warn!("Request without bearer credential");
            return unauthorized("missing bearer credential");
        }
    };

    match verifier.verify(token) {
        Ok(owner) => {
            request.extensions_mut().insert(owner);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(error = %e, "Credential verification failed");
            unauthorized("invalid bearer credential")
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
