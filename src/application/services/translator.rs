use std::sync::Arc;

use crate::application::ports::{AiProvider, AiProviderError};
use crate::domain::Language;

/// Pure request/response translation of a summary body. Cache awareness lives
/// in the pipeline; this component has no knowledge of persisted state.
pub struct Translator<P>
where
    P: AiProvider,
{
    provider: Arc<P>,
}

impl<P> Translator<P>
where
    P: AiProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    #[tracing::instrument(skip(self, summarized_text), fields(language = %language))]
    pub async fn translate(
        &self,
        summarized_text: &str,
        language: Language,
    ) -> Result<String, TranslatorError> {
        let prompt = format!(
            "Translate the following summary into {}. Preserve the meaning and \
             tone; respond with the translation only.\n\n{}",
            language, summarized_text
        );

        let completion = self
            .provider
            .generate(&prompt)
            .await
            .map_err(TranslatorError::Provider)?;

        if completion.trim().is_empty() {
            return Err(TranslatorError::BlankCompletion);
        }

        Ok(completion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("provider: {0}")]
    Provider(AiProviderError),
    #[error("provider returned a blank translation")]
    BlankCompletion,
}
