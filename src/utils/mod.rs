/// File utilities
pub mod files;

/// The logging context
pub mod logging;
