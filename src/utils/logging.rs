use std::{
    env,
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

use env_logger::{fmt::Formatter, Builder, Target};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::LOG_TARGET;

/// How log lines are rendered on the console
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Format {
    /// `<timestamp> - <logger name> - <LEVEL> - <message>`
    Standard,

    /// Colored, timestamped output from `pretty_env_logger`
    Pretty,
}

/// Everything needed to build the logging context
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Minimum severity written to the console
    pub console_level: LevelFilter,

    /// Minimum severity written to the log file
    pub file_level: LevelFilter,

    /// The log file. Appended to, never truncated.
    pub file_path: PathBuf,

    /// Console line format. The file always uses `Format::Standard`.
    pub format: Format,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: LevelFilter::Debug,
            file_level: LevelFilter::Error,
            file_path: PathBuf::from("errors.log"),
            format: Format::Standard,
        }
    }
}

/// A logger that fans records out to a console sink and a file sink, each with its own level.
///
/// Both sinks only accept records logged under `LOG_TARGET`, so dependencies stay quiet.
pub struct Logger {
    console: env_logger::Logger,
    file: env_logger::Logger,
}

impl Logger {
    /// Build both sinks, opening the log file for appending
    pub fn new(config: &LogConfig) -> io::Result<Self> {
        let mut console = match config.format {
            Format::Pretty => pretty_env_logger::formatted_timed_builder(),
            Format::Standard => {
                let mut builder = Builder::new();
                builder.format(standard_format);
                builder
            }
        };

        console
            .filter_module(LOG_TARGET, config.console_level)
            .target(Target::Stderr);

        if let Ok(filters) = env::var("RUST_LOG") {
            console.parse_filters(&filters);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file_path)?;

        let file = Builder::new()
            .format(standard_format)
            .filter_module(LOG_TARGET, config.file_level)
            .target(Target::Pipe(Box::new(file)))
            .build();

        Ok(Self {
            console: console.build(),
            file,
        })
    }

    /// The most verbose level either sink accepts
    pub fn max_level(&self) -> LevelFilter {
        self.console.filter().max(self.file.filter())
    }

    /// Install as the global logger for the `log` macros
    pub fn install(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level();

        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);

        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata) || self.file.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.console.matches(record) {
            self.console.log(record);
        }

        if self.file.matches(record) {
            self.file.log(record);
        }
    }

    fn flush(&self) {
        self.console.flush();
        self.file.flush();
    }
}

/// Build the logging context from the given config and install it
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    Logger::new(config)
        .map_err(|source| LoggingError::Open {
            path: config.file_path.clone(),
            source,
        })?
        .install()?;

    Ok(())
}

fn standard_format(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let timestamp = buf.timestamp_millis();

    writeln!(buf, "{}", line(&timestamp, record))
}

fn line(timestamp: &dyn std::fmt::Display, record: &Record) -> String {
    format!(
        "{} - {} - {} - {}",
        timestamp,
        record.target(),
        record.level(),
        record.args()
    )
}

/// Logging Error
#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    /// The log file could not be opened
    #[error("unable to open log file {}: {source}", path.display())]
    Open {
        /// The log file path
        path: PathBuf,

        /// The underlying I/O error
        source: io::Error,
    },

    /// Another logger was already installed
    #[error(transparent)]
    AlreadySet(#[from] SetLoggerError),
}
