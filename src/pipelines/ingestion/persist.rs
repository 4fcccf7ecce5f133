use std::path::Path;

use log::{debug, error};

use crate::{
    datasets::RecordSet,
    error::{IngestionError, Result},
    utils::files::{ensure_dir, write_csv},
    LOG_TARGET,
};

/// File name of the train partition
pub static TRAIN_FILE: &str = "train.csv";

/// File name of the test partition
pub static TEST_FILE: &str = "test.csv";

/// Write the train and test partitions into `dir`, creating it if needed
pub fn save_data(dir: impl AsRef<Path>, train: &RecordSet, test: &RecordSet) -> Result<()> {
    let dir = dir.as_ref();

    write_partitions(dir, train, test).map_err(|err| {
        error!(
            target: LOG_TARGET,
            "Unexpected error occurred while saving the data: {}", err
        );
        err
    })?;

    debug!(target: LOG_TARGET, "Train and test data saved to {}", dir.display());

    Ok(())
}

fn write_partitions(dir: &Path, train: &RecordSet, test: &RecordSet) -> Result<()> {
    ensure_dir(dir).map_err(|e| IngestionError::io(dir, e))?;

    for (name, records) in [(TRAIN_FILE, train), (TEST_FILE, test)] {
        let path = dir.join(name);

        write_csv(&path, records).map_err(|e| IngestionError::io(&path, e))?;
    }

    Ok(())
}
