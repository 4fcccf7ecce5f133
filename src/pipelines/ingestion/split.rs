use log::{debug, error};
use polars::prelude::{IdxCa, IdxSize, NewChunkedArray};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    datasets::RecordSet,
    error::{IngestionError, Result},
    LOG_TARGET,
};

/// The seed used when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Partition sizes for a shuffle split of `len` rows: (train, test)
pub fn partition_sizes(len: usize, test_fraction: f64) -> Result<(usize, usize)> {
    if !test_fraction.is_finite() || test_fraction <= 0.0 || test_fraction >= 1.0 {
        return Err(IngestionError::Config(format!(
            "test_size={} should be a float in the (0, 1) range",
            test_fraction
        )));
    }

    if len == 0 {
        return Err(IngestionError::Config(
            "cannot split an empty record set".to_string(),
        ));
    }

    let test = (test_fraction * len as f64).ceil() as usize;
    let train = len - test;

    if train == 0 {
        return Err(IngestionError::Config(format!(
            "with {} rows and test_size={}, the resulting train partition would be empty",
            len, test_fraction
        )));
    }

    Ok((train, test))
}

/// Shuffle the rows with a seeded generator and split them into (train, test) partitions
pub fn split(
    records: &RecordSet,
    test_fraction: f64,
    seed: u64,
) -> Result<(RecordSet, RecordSet)> {
    let (train_len, test_len) = partition_sizes(records.height(), test_fraction).map_err(|err| {
        error!(target: LOG_TARGET, "Unable to split the data: {}", err);
        err
    })?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<IdxSize> = (0..records.height() as IdxSize).collect();
    indices.shuffle(&mut rng);

    let (test_indices, train_indices) = indices.split_at(test_len);

    let take = |indices: &[IdxSize]| {
        records
            .take(&IdxCa::from_slice("idx", indices))
            .map_err(|e| IngestionError::Transform(e.to_string()))
    };

    let train = take(train_indices)?;
    let test = take(test_indices)?;

    debug!(
        target: LOG_TARGET,
        "Split {} rows into {} train and {} test with seed {}",
        records.height(),
        train_len,
        test_len,
        seed
    );

    Ok((train, test))
}
