//! Process-level plumbing shared by Taply binaries: configuration
//! loading, home directory resolution, and logging setup.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{AppConfig, CliArgs, LoggingConfig, ServerConfig, StoreConfig};
pub use logging::init_logging_from_config;
pub use paths::resolve_home_dir;
