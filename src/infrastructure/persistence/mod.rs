mod in_memory_summary_repository;
mod pg_pool;
mod pg_summary_repository;

pub use in_memory_summary_repository::InMemorySummaryRepository;
pub use pg_pool::create_pool;
pub use pg_summary_repository::PgSummaryRepository;
