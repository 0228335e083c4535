pub mod envelope;
pub mod error;
pub mod list_query;
pub mod pagination;
