pub mod auth;
pub mod llm;
pub mod observability;
pub mod persistence;
pub mod storage;
pub mod text_processing;
