//! Configuration file loading for ollama-toolcall
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLCALL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolcall.toml` or `./.toolcall.toml`
//! 4. Global: `<config_dir>/ollama-toolcall/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApiConfig, FileConfig, FileModelConfig, FileOutputConfig,
    FileReplConfig, FileSessionConfig,
};
pub use loader::{ConfigError, ConfigLoader, ConfigSource};
