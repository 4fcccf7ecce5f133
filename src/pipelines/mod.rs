/// Data Ingestion
pub mod ingestion;
