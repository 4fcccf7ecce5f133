/// The name of the tweet emotions dataset
pub static DATASET: &str = "tweet-emotions";

/// Where the tweet emotions CSV is published
pub static URL: &str =
    "https://raw.githubusercontent.com/campusx-official/jupyter-masterclass/main/tweet_emotions.csv";

/// The non-semantic identifier column
pub static ID_COLUMN: &str = "tweet_id";

/// The categorical label column
pub static LABEL_COLUMN: &str = "sentiment";

/// The category encoded as 1
pub static POSITIVE: &str = "happiness";

/// The category encoded as 0
pub static NEGATIVE: &str = "sadness";
