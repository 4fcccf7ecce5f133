use std::path::PathBuf;

use log::info;

use crate::{config::load_params, datasets::read_data, error::Result, LOG_TARGET};

use super::{process_data, save_data, split, Config};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Rows written to the train partition
    pub train_rows: usize,

    /// Rows written to the test partition
    pub test_rows: usize,

    /// Directory holding the partitions
    pub output_dir: PathBuf,
}

/// Load parameters, fetch, transform, split, and persist, in that order
pub fn run(config: &Config) -> Result<Summary> {
    let test_size = load_params(&config.params_path)?;

    let records = read_data(config.source.clone())?;
    info!(
        target: LOG_TARGET,
        "Loaded {} rows with {} columns from {}",
        records.height(),
        records.width(),
        config.source
    );

    let processed = process_data(&records)?;

    let (train, test) = split(&processed, test_size, config.seed)?;

    save_data(&config.output_dir, &train, &test)?;

    Ok(Summary {
        train_rows: train.height(),
        test_rows: test.height(),
        output_dir: config.output_dir.clone(),
    })
}
