//! Общие типы и трейты для агрегатов каталога

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::AggregateId;
