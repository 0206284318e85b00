pub mod classify;
pub mod error;
pub mod ingest;
pub mod probe;
