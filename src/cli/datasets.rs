use std::fmt::Display;

use crate::datasets::{tweet_emotions, Source};

/// The Dataset enum
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Dataset {
    /// Tweet emotions dataset
    TweetEmotions,
}

impl Dataset {
    /// Where the dataset is published
    pub fn source(&self) -> Source {
        match self {
            Dataset::TweetEmotions => Source::Url(tweet_emotions::URL.to_string()),
        }
    }
}

impl TryFrom<&str> for Dataset {
    type Error = DatasetError;

    /// Try to convert a string to a Dataset
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.to_lowercase() == tweet_emotions::DATASET {
            Ok(Dataset::TweetEmotions)
        } else {
            Err(Self::Error::Unknown(value.to_string()))
        }
    }
}

impl Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dataset::TweetEmotions => tweet_emotions::DATASET,
        };

        write!(f, "{}", name)
    }
}

/// Dataset Error
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// No dataset found for the given string
    #[error("no dataset found for {0}")]
    Unknown(String),
}
