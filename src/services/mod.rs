pub mod ingestion;
pub mod notification;
pub mod processing;
