use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::application::ports::RepositoryError;

const CONNECT_ATTEMPTS: u32 = 5;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Opens the connection pool, retrying with exponential backoff so the
/// service survives a database that comes up slightly after it does.
#[tracing::instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let mut backoff = INITIAL_BACKOFF;

    for attempt in 1..=CONNECT_ATTEMPTS {
        let options = PgPoolOptions::new().max_connections(max_connections);
        match options.connect(url).await {
            Ok(pool) => {
                tracing::info!(attempt, "PostgreSQL connection pool established");
                return Ok(pool);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(
                    error = %e,
                    attempt,
                    backoff_ms = backoff.as_millis(),
                    "PostgreSQL connection failed, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
            Err(e) => return Err(RepositoryError::ConnectionFailed(e.to_string())),
        }
    }

    unreachable!("loop returns on the final attempt")
}
