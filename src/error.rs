use std::{io, path::PathBuf};

/// Result type for every ingestion stage
pub type Result<T, E = IngestionError> = std::result::Result<T, E>;

/// The closed set of failures an ingestion stage can report
#[derive(thiserror::Error, Debug)]
pub enum IngestionError {
    /// A required input file does not exist
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An expected key or column is missing, or holds the wrong kind of value
    #[error("{0}")]
    Schema(String),

    /// A document could not be parsed
    #[error("{0}")]
    Parse(String),

    /// The dataset could not be retrieved from its source
    #[error("unable to load data from {source_name}: {message}")]
    Fetch {
        /// The URL or path that was being read
        source_name: String,

        /// What went wrong
        message: String,
    },

    /// The record set could not be transformed
    #[error("{0}")]
    Transform(String),

    /// A parameter is outside its valid range
    #[error("{0}")]
    Config(String),

    /// Reading or writing a file failed
    #[error("{}: {source}", path.display())]
    Io {
        /// The file or directory involved
        path: PathBuf,

        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl IngestionError {
    /// Build an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a fetch error for the given source
    pub fn fetch(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}
