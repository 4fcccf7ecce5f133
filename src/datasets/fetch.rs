use std::{
    fmt::{self, Display},
    fs,
    path::PathBuf,
    time::Duration,
};

use log::{debug, error};
use reqwest::blocking::Client;

use crate::{
    error::{IngestionError, Result},
    LOG_TARGET,
};

use super::{frames::read_csv, RecordSet};

/// Where a CSV dataset is read from
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Source {
    /// An http or https URL
    Url(String),

    /// A local file
    Path(PathBuf),
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        let lower = value.to_lowercase();

        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(value.to_string())
        } else {
            Source::Path(PathBuf::from(value))
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load a CSV dataset from a URL or a local path
pub fn read_data(source: impl Into<Source>) -> Result<RecordSet> {
    let source = source.into();

    match load(&source) {
        Ok(records) => {
            debug!(target: LOG_TARGET, "Data loaded from {}", source);

            Ok(records)
        }
        Err(err) => {
            match &err {
                IngestionError::Parse(message) => {
                    error!(target: LOG_TARGET, "Failed to parse the CSV file: {}", message)
                }
                other => error!(
                    target: LOG_TARGET,
                    "Unexpected error occurred while loading the data: {}", other
                ),
            }

            Err(err)
        }
    }
}

fn load(source: &Source) -> Result<RecordSet> {
    let name = source.to_string();

    let bytes = match source {
        Source::Url(url) => download(url).map_err(|e| IngestionError::fetch(&name, e))?,
        Source::Path(path) => fs::read(path).map_err(|e| IngestionError::fetch(&name, e))?,
    };

    std::str::from_utf8(&bytes).map_err(|e| IngestionError::fetch(&name, e))?;

    read_csv(bytes).map_err(|e| {
        IngestionError::Parse(format!("Error tokenizing data in {}: {}", name, e))
    })
}

/// GET the URL with no request timeout, failing on non-success statuses
fn download(url: &str) -> reqwest::Result<Vec<u8>> {
    let client = Client::builder().timeout(None::<Duration>).build()?;

    let response = client.get(url).send()?.error_for_status()?;

    Ok(response.bytes()?.to_vec())
}
