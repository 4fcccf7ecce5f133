use std::{fs, io, path::Path};

use derive_new::new;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::{
    error::{IngestionError, Result},
    LOG_TARGET,
};

/// The section of the parameters document that holds this stage's settings
pub static SECTION: &str = "data_ingestion";

/// The key holding the test partition fraction
pub static TEST_SIZE: &str = "test_size";

/// Parameters for the data ingestion stage
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct DataIngestion {
    /// Fraction of rows that go to the test partition
    pub test_size: f64,
}

/// The parameters document. Sections for other stages are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct Params {
    /// Data ingestion parameters
    pub data_ingestion: DataIngestion,
}

impl Params {
    /// Load and validate the parameters document at the given path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        parse(path).map_err(|err| {
            match &err {
                IngestionError::NotFound(_) => {
                    error!(target: LOG_TARGET, "File not found: {}", path.display())
                }
                IngestionError::Schema(message) => {
                    error!(target: LOG_TARGET, "Error: {}", message)
                }
                IngestionError::Parse(message) => {
                    error!(target: LOG_TARGET, "YAML Error: {}", message)
                }
                other => error!(target: LOG_TARGET, "Unable to read {}: {}", path.display(), other),
            }

            err
        })
    }
}

/// Read the test partition fraction from the parameters document
pub fn load_params(path: impl AsRef<Path>) -> Result<f64> {
    let path = path.as_ref();
    let params = Params::load(path)?;

    debug!(target: LOG_TARGET, "test_size retrieved from {}", path.display());

    Ok(params.data_ingestion.test_size)
}

fn parse(path: &Path) -> Result<Params> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IngestionError::NotFound(path.to_path_buf()),
        _ => IngestionError::io(path, e),
    })?;

    let document: Value = serde_yaml::from_str(&contents)
        .map_err(|e| IngestionError::Parse(format!("{}: {}", path.display(), e)))?;

    // Check the key path by hand so a missing key is told apart from a bad value
    let section = document.get(SECTION).ok_or_else(|| {
        IngestionError::Schema(format!("'{}' not found in {}", SECTION, path.display()))
    })?;

    let test_size = section.get(TEST_SIZE).ok_or_else(|| {
        IngestionError::Schema(format!(
            "'{}.{}' not found in {}",
            SECTION,
            TEST_SIZE,
            path.display()
        ))
    })?;

    if !test_size.is_number() {
        return Err(IngestionError::Schema(format!(
            "'{}.{}' in {} is not a number",
            SECTION,
            TEST_SIZE,
            path.display()
        )));
    }

    serde_yaml::from_value(document)
        .map_err(|e| IngestionError::Schema(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn params_file(contents: &str) -> anyhow::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;

        Ok(file)
    }

    #[test]
    fn test_load_params_returns_exact_value() -> anyhow::Result<()> {
        for value in [0.2, 0.25, 0.001, 0.999] {
            let file = params_file(&format!("data_ingestion:\n  test_size: {}\n", value))?;

            assert_eq!(load_params(file.path())?, value);
        }

        Ok(())
    }

    #[test]
    fn test_ignores_other_sections() -> anyhow::Result<()> {
        let file = params_file(
            "data_ingestion:\n  test_size: 0.3\nfeature_engineering:\n  max_features: 50\n",
        )?;

        let params = Params::load(file.path())?;

        assert_eq!(params, Params::new(DataIngestion::new(0.3)));

        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = load_params("does/not/exist/params.yaml");

        assert!(matches!(result, Err(IngestionError::NotFound(_))));
    }

    #[test]
    fn test_missing_keys() -> anyhow::Result<()> {
        let file = params_file("model_building:\n  n_estimators: 10\n")?;
        assert!(matches!(
            load_params(file.path()),
            Err(IngestionError::Schema(_))
        ));

        let file = params_file("data_ingestion:\n  train_size: 0.8\n")?;
        assert!(matches!(
            load_params(file.path()),
            Err(IngestionError::Schema(_))
        ));

        let file = params_file("- 0.2\n- 0.8\n")?;
        assert!(matches!(
            load_params(file.path()),
            Err(IngestionError::Schema(_))
        ));

        Ok(())
    }

    #[test]
    fn test_non_numeric_value() -> anyhow::Result<()> {
        let file = params_file("data_ingestion:\n  test_size: twenty percent\n")?;

        assert!(matches!(
            load_params(file.path()),
            Err(IngestionError::Schema(_))
        ));

        Ok(())
    }

    #[test]
    fn test_malformed_yaml() -> anyhow::Result<()> {
        let file = params_file("data_ingestion: [test_size: 0.2\n")?;

        assert!(matches!(
            load_params(file.path()),
            Err(IngestionError::Parse(_))
        ));

        Ok(())
    }
}
