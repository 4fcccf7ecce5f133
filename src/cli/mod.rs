/// CLI Indexes: Datasets
pub mod datasets;
