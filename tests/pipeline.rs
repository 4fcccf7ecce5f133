use std::{collections::HashSet, fs, path::Path};

use pretty_assertions::assert_eq;
use sentiment_ingestion::{
    datasets::{frames::read_csv, RecordSet, Source},
    pipelines::ingestion::{self, Config},
    IngestionError,
};
use tempfile::tempdir;

fn write_tweets(path: &Path) -> anyhow::Result<()> {
    let mut csv = String::from("tweet_id,sentiment,content\n");

    for i in 0..100 {
        let sentiment = match i % 10 {
            0..=5 => "happiness",
            6..=8 => "sadness",
            _ => "worry",
        };

        csv.push_str(&format!("{},{},tweet number {}\n", 1_956_967_000 + i, sentiment, i));
    }

    fs::write(path, csv)?;

    Ok(())
}

fn read_output(path: &Path) -> anyhow::Result<RecordSet> {
    Ok(read_csv(fs::read(path)?)?)
}

#[test]
fn test_end_to_end() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let params = dir.path().join("params.yaml");
    let source = dir.path().join("tweet_emotions.csv");
    let output_dir = dir.path().join("data").join("raw");

    fs::write(&params, "data_ingestion:\n  test_size: 0.2\n")?;
    write_tweets(&source)?;

    let config = Config {
        params_path: params,
        source: Source::Path(source),
        output_dir: output_dir.clone(),
        ..Config::default()
    };

    let summary = ingestion::run(&config)?;

    assert_eq!(summary.train_rows, 72);
    assert_eq!(summary.test_rows, 18);
    assert_eq!(summary.output_dir, output_dir);

    let train = read_output(&output_dir.join("train.csv"))?;
    let test = read_output(&output_dir.join("test.csv"))?;

    assert_eq!(train.height(), 72);
    assert_eq!(test.height(), 18);

    for partition in [&train, &test] {
        assert_eq!(partition.get_column_names(), vec!["sentiment", "content"]);

        let labels = partition.column("sentiment")?.i64()?;
        assert_eq!(labels.null_count(), 0);
        assert!(labels.into_no_null_iter().all(|label| label == 0 || label == 1));
    }

    let contents = |records: &RecordSet| -> anyhow::Result<HashSet<String>> {
        Ok(records
            .column("content")?
            .str()?
            .into_no_null_iter()
            .map(str::to_string)
            .collect())
    };

    let train_contents = contents(&train)?;
    let test_contents = contents(&test)?;

    assert!(train_contents.is_disjoint(&test_contents));
    assert_eq!(train_contents.len() + test_contents.len(), 90);

    let mut happy = 0;
    for partition in [&train, &test] {
        happy += partition
            .column("sentiment")?
            .i64()?
            .into_no_null_iter()
            .filter(|&label| label == 1)
            .count();
    }
    assert_eq!(happy, 60);

    Ok(())
}

#[test]
fn test_runs_are_reproducible() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let params = dir.path().join("params.yaml");
    let source = dir.path().join("tweet_emotions.csv");

    fs::write(&params, "data_ingestion:\n  test_size: 0.25\n")?;
    write_tweets(&source)?;

    let mut outputs = Vec::new();
    for run in ["first", "second"] {
        let output_dir = dir.path().join(run);
        let config = Config {
            params_path: params.clone(),
            source: Source::Path(source.clone()),
            output_dir: output_dir.clone(),
            ..Config::default()
        };

        ingestion::run(&config)?;

        outputs.push((
            fs::read_to_string(output_dir.join("train.csv"))?,
            fs::read_to_string(output_dir.join("test.csv"))?,
        ));
    }

    assert_eq!(outputs[0], outputs[1]);

    Ok(())
}

#[test]
fn test_stops_at_first_failure() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let output_dir = dir.path().join("out");

    let config = Config {
        params_path: dir.path().join("missing.yaml"),
        source: Source::Path(dir.path().join("missing.csv")),
        output_dir: output_dir.clone(),
        ..Config::default()
    };

    assert!(matches!(
        ingestion::run(&config),
        Err(IngestionError::NotFound(_))
    ));
    assert!(!output_dir.exists());

    Ok(())
}

#[test]
fn test_invalid_test_size() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let params = dir.path().join("params.yaml");
    let source = dir.path().join("tweet_emotions.csv");

    fs::write(&params, "data_ingestion:\n  test_size: 1.5\n")?;
    write_tweets(&source)?;

    let config = Config {
        params_path: params,
        source: Source::Path(source),
        output_dir: dir.path().join("out"),
        ..Config::default()
    };

    assert!(matches!(
        ingestion::run(&config),
        Err(IngestionError::Config(_))
    ));

    Ok(())
}
