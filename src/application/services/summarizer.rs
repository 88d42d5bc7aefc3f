use std::sync::Arc;

use crate::application::ports::{AiProvider, AiProviderError};
use crate::domain::UploadedDocument;

const SUMMARY_PROMPT: &str = "Summarize the following policy document in clear, \
plain language. Cover the key provisions, who is affected, and any deadlines \
or obligations. Respond with the summary only.";

/// Turns extracted document text into a summary draft via one provider call.
/// No retry, no persistence; the pipeline owns both.
pub struct Summarizer<P>
where
    P: AiProvider,
{
    provider: Arc<P>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDraft {
    pub title: String,
    pub summarized_text: String,
}

impl<P> Summarizer<P>
where
    P: AiProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    #[tracing::instrument(skip(self, text), fields(filename = %document.filename))]
    pub async fn summarize(
        &self,
        text: &str,
        document: &UploadedDocument,
    ) -> Result<SummaryDraft, SummarizerError> {
        if text.trim().is_empty() {
            return Err(SummarizerError::EmptyDocument);
        }

        let prompt = format!("{}\n\n{}", SUMMARY_PROMPT, text);
        let completion = self
            .provider
            .generate(&prompt)
            .await
            .map_err(SummarizerError::Provider)?;

        // A blank completion is a provider failure, not a valid empty summary.
        if completion.trim().is_empty() {
            return Err(SummarizerError::BlankCompletion);
        }

        tracing::debug!(summary_chars = completion.len(), "Summary generated");

        Ok(SummaryDraft {
            title: document.title(),
            summarized_text: completion,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("document has no extractable text")]
    EmptyDocument,
    #[error("provider: {0}")]
    Provider(AiProviderError),
    #[error("provider returned a blank summary")]
    BlankCompletion,
}
