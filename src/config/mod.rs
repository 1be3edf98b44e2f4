#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, StoreCommand};
pub use toml_config::{AppConfig, LoggingConfig, ServerConfig, StorageConfig};
