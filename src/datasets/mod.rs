use polars::prelude::DataFrame;

/// CSV reading and writing for data frames
pub mod frames;

/// Loading CSV data from URLs and files
pub mod fetch;

/// The tweet emotions dataset
pub mod tweet_emotions;

pub use fetch::{read_data, Source};

/// An in-memory table with named, typed columns and an ordered sequence of rows
pub type RecordSet = DataFrame;
