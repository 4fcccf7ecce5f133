/// Driver configuration
pub mod config;

/// Dropping, filtering, and label encoding
pub mod transform;

/// Seeded train/test splitting
pub mod split;

/// Writing partitions to disk
pub mod persist;

/// The end-to-end run
pub mod pipeline;

pub use config::Config;
pub use persist::save_data;
pub use pipeline::{run, Summary};
pub use split::split;
pub use transform::process_data;
