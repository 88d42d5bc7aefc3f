use std::sync::Arc;

use crate::application::ports::{AiProvider, CredentialVerifier, TextExtractor};
use crate::application::services::SummaryPipeline;

pub struct AppState<E, P>
where
    E: TextExtractor,
    P: AiProvider,
{
    pub pipeline: Arc<SummaryPipeline<E, P>>,
    pub credential_verifier: Arc<dyn CredentialVerifier>,
    pub upload_limit_bytes: u64,
}

impl<E, P> Clone for AppState<E, P>
where
    E: TextExtractor,
    P: AiProvider,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            credential_verifier: Arc::clone(&self.credential_verifier),
            upload_limit_bytes: self.upload_limit_bytes,
        }
    }
}
