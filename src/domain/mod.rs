mod document;
mod language;
mod owner;
mod storage_key;
mod summary;
mod summary_id;

pub use document::{ContentType, UploadedDocument};
pub use language::Language;
pub use owner::OwnerId;
pub use storage_key::StorageKey;
pub use summary::{NewSummary, Summary, Translation};
pub use summary_id::SummaryId;
