//! Command line tool to run the data ingestion stage

use std::{path::PathBuf, process::ExitCode};

use anyhow::anyhow;
use log::{error, info, LevelFilter};
use pico_args::Arguments;
use sentiment_ingestion::{
    cli::datasets::Dataset,
    datasets::Source,
    pipelines::ingestion::{self, Config},
    utils::logging::{self, Format, LogConfig},
    LOG_TARGET,
};

const HELP: &str = "\
Usage: ingest [OPTIONS]

Options:
  -h, --help           Print help
  -p, --params         The parameters document (defaults to 'params.yaml')
  -s, --source         A dataset name, URL, or CSV path (defaults to 'tweet-emotions')
  -o, --output-dir     Where train.csv and test.csv are written (defaults to 'data/raw')
  --seed               Seed for the train/test shuffle (defaults to 42)
  --log-file           Where errors are logged (defaults to 'errors.log')
  -q, --quiet          Only log warnings and errors to the console
  --pretty             Colored console logging
";

#[derive(Debug)]
struct Args {
    params: Option<PathBuf>,
    source: Option<String>,
    output_dir: Option<PathBuf>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
    quiet: bool,
    pretty: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Option<Self>> {
        let mut pargs = Arguments::from_env();

        // Help has a higher priority and should be handled separately.
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let args = Args {
            params: pargs.opt_value_from_str(["-p", "--params"])?,
            source: pargs.opt_value_from_str(["-s", "--source"])?,
            output_dir: pargs.opt_value_from_str(["-o", "--output-dir"])?,
            seed: pargs.opt_value_from_str("--seed")?,
            log_file: pargs.opt_value_from_str("--log-file")?,
            quiet: pargs.contains(["-q", "--quiet"]),
            pretty: pargs.contains("--pretty"),
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", remaining));
        }

        Ok(Some(args))
    }

    fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::default();

        if self.quiet {
            config.console_level = LevelFilter::Warn;
        }

        if self.pretty {
            config.format = Format::Pretty;
        }

        if let Some(log_file) = &self.log_file {
            config.file_path = log_file.clone();
        }

        config
    }

    fn config(&self) -> Config {
        let mut config = Config::default();

        if let Some(params) = &self.params {
            config.params_path = params.clone();
        }

        if let Some(source) = &self.source {
            config.source = match Dataset::try_from(source.as_str()) {
                Ok(dataset) => dataset.source(),
                Err(_) => Source::from(source.as_str()),
            };
        }

        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }

        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        config
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let output = Args::parse()?;

    let Some(args) = output else {
        print!("{}", HELP);

        return Ok(ExitCode::SUCCESS);
    };

    logging::init(&args.log_config())?;

    match ingestion::run(&args.config()) {
        Ok(summary) => {
            info!(
                target: LOG_TARGET,
                "Wrote {} train and {} test rows to {}",
                summary.train_rows,
                summary.test_rows,
                summary.output_dir.display()
            );

            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(
                target: LOG_TARGET,
                "Failed to complete the data ingestion process: {}", e
            );
            println!("Error: {}", e);

            Ok(ExitCode::FAILURE)
        }
    }
}
