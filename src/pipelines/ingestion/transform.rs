use log::{debug, error};
use polars::prelude::*;

use crate::{
    datasets::{
        tweet_emotions::{ID_COLUMN, LABEL_COLUMN, NEGATIVE, POSITIVE},
        RecordSet,
    },
    error::{IngestionError, Result},
    LOG_TARGET,
};

/// Encode a sentiment category as a binary label
pub fn encode_label(category: &str) -> Option<i64> {
    if category == POSITIVE {
        Some(1)
    } else if category == NEGATIVE {
        Some(0)
    } else {
        None
    }
}

/// Drop the identifier column, keep the two target categories, and encode them as 0/1 labels.
///
/// The input is left untouched. Kept rows are filtered into a new frame before the label
/// column is rewritten.
pub fn process_data(records: &RecordSet) -> Result<RecordSet> {
    match transform(records) {
        Ok(processed) => {
            debug!(
                target: LOG_TARGET,
                "Preprocessing Completed: kept {} of {} rows",
                processed.height(),
                records.height()
            );

            Ok(processed)
        }
        Err(err) => {
            match &err {
                IngestionError::Schema(message) => {
                    error!(target: LOG_TARGET, "Missing column in the dataframe: {}", message)
                }
                other => error!(
                    target: LOG_TARGET,
                    "Unexpected error during preprocessing: {}", other
                ),
            }

            Err(err)
        }
    }
}

fn transform(records: &RecordSet) -> Result<RecordSet> {
    // Both columns must exist before the label type is looked at
    records.column(ID_COLUMN).map_err(schema)?;
    let labels = records.column(LABEL_COLUMN).map_err(schema)?;

    if labels.dtype() != &DataType::String {
        return Err(IngestionError::Transform(format!(
            "'{}' holds {} values, expected categories",
            LABEL_COLUMN,
            labels.dtype()
        )));
    }

    let trimmed = records.drop(ID_COLUMN).map_err(schema)?;

    let categories = trimmed
        .column(LABEL_COLUMN)
        .and_then(|c| c.str())
        .map_err(transform_error)?;
    let mask = &categories.equal(POSITIVE) | &categories.equal(NEGATIVE);

    let mut filtered = trimmed.filter(&mask).map_err(transform_error)?;

    let encoded = Int64Chunked::from_iter_options(
        LABEL_COLUMN,
        filtered
            .column(LABEL_COLUMN)
            .and_then(|c| c.str())
            .map_err(transform_error)?
            .into_iter()
            .map(|category| category.and_then(encode_label)),
    );

    filtered
        .with_column(encoded.into_series())
        .map_err(transform_error)?;

    Ok(filtered)
}

fn schema(err: PolarsError) -> IngestionError {
    match err {
        PolarsError::ColumnNotFound(name) => IngestionError::Schema(format!("'{}'", name)),
        other => transform_error(other),
    }
}

fn transform_error(err: PolarsError) -> IngestionError {
    IngestionError::Transform(err.to_string())
}
