mod pipeline;
mod summarizer;
mod translator;

pub use pipeline::{PipelineError, SummaryPipeline};
pub use summarizer::{Summarizer, SummarizerError, SummaryDraft};
pub use translator::{Translator, TranslatorError};
