use std::path::PathBuf;

use crate::datasets::{tweet_emotions, Source};

use super::split::DEFAULT_SEED;

/// Settings for a single ingestion run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The parameters document holding `data_ingestion.test_size`
    pub params_path: PathBuf,

    /// Where the CSV dataset is read from
    pub source: Source,

    /// Seed for the train/test shuffle
    pub seed: u64,

    /// Directory receiving `train.csv` and `test.csv`
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params_path: PathBuf::from("params.yaml"),
            source: Source::Url(tweet_emotions::URL.to_string()),
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from("data").join("raw"),
        }
    }
}
