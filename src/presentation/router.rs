use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AiProvider, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_summary_handler, delete_summary_handler, health_handler, list_summaries_handler,
    translate_summary_handler,
};
use crate::presentation::middleware::auth_middleware;
use crate::presentation::state::AppState;

// Multipart framing adds overhead on top of the configured document cap.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

pub fn create_router<E, P>(state: AppState<E, P>) -> Router
where
    E: TextExtractor + 'static,
    P: AiProvider + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit =
        DefaultBodyLimit::max((state.upload_limit_bytes + MULTIPART_OVERHEAD_BYTES) as usize);

    let summary_routes = Router::new()
        .route("/create", post(create_summary_handler::<E, P>))
        .route("/get/all", get(list_summaries_handler::<E, P>))
        .route("/delete/{id}", delete(delete_summary_handler::<E, P>))
        .route("/translate/{id}", post(translate_summary_handler::<E, P>))
        .route_layer(middleware::from_fn_with_state(
            state.credential_verifier.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1/summary", summary_routes)
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
